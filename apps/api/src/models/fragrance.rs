use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Gender category of a fragrance. Stored as lowercase text in the
/// `fragrances.gender` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Unisex,
}

impl Gender {
    /// Lowercase column value, used when binding filter parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Unisex => "unisex",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "masculine" => Ok(Gender::Masculine),
            "feminine" => Ok(Gender::Feminine),
            "unisex" => Ok(Gender::Unisex),
            _ => Err("expected 'masculine', 'feminine' or 'unisex'"),
        }
    }
}

/// A catalog entry as returned by list/search/detail endpoints.
/// `brand` is the joined brand display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fragrance {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub brand: Option<String>,
    pub gender: Gender,
    pub image_url: Option<String>,
}

/// A single autocomplete suggestion. `brand` is the brand display name or
/// the empty string when the fragrance has no brand row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Suggestion {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub slug: String,
    pub image_url: Option<String>,
}

/// Provenance tag for catalog query results: which backing source answered.
/// Only the live database backend exists today; `Fallback` is kept in the
/// wire format so clients can distinguish degraded responses if one is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Database,
    #[allow(dead_code)]
    Fallback,
}

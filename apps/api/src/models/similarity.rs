use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::fragrance::Gender;

/// A related fragrance surfaced on the detail page, joined through a
/// similarity edge. `tally` is the edge's aggregate signed vote sum, the
/// ranking key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SimilarFragrance {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub brand: Option<String>,
    pub gender: Gender,
    pub image_url: Option<String>,
    pub tally: i32,
}

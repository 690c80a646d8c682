use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::queries::{self, SearchFilters};
use crate::errors::AppError;
use crate::models::fragrance::{Fragrance, Gender, Source};
use crate::models::similarity::SimilarFragrance;
use crate::state::AppState;

/// How many related fragrances the detail page carries.
const SIMILAR_LIMIT: i64 = 6;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub gender: Option<Gender>,
    pub note: Option<String>,
    pub accord: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub offset: Option<i64>,
}

/// Frontends send blank query params (`?limit=&gender=`); treat those the
/// same as absent instead of failing deserialization.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Serialize)]
pub struct SearchMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub source: Source,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Fragrance>,
    pub meta: SearchMeta,
}

#[derive(Serialize)]
pub struct DetailResponse {
    pub success: bool,
    pub data: Fragrance,
    pub similar: Vec<SimilarFragrance>,
}

/// GET /api/fragrances?q=&brand=&gender=&note=&accord=&limit=&offset=
/// `limit` is silently capped at 100; the executed values are echoed in `meta`.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let limit = queries::clamp_limit(params.limit);
    let offset = queries::clamp_offset(params.offset);
    // Blank query params mean "no filter", not "match the empty string"
    let filters = SearchFilters {
        q: params.q.filter(|s| !s.trim().is_empty()),
        brand: params.brand.filter(|s| !s.trim().is_empty()),
        gender: params.gender,
        note: params.note.filter(|s| !s.trim().is_empty()),
        accord: params.accord.filter(|s| !s.trim().is_empty()),
    };

    let (data, total) = queries::search(&state.db, &filters, limit, offset).await?;

    Ok(Json(SearchResponse {
        success: true,
        data,
        meta: SearchMeta {
            total,
            limit,
            offset,
            source: Source::Database,
        },
    }))
}

/// GET /api/fragrances/:slug
pub async fn handle_get_fragrance(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DetailResponse>, AppError> {
    let fragrance = queries::get_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fragrance '{slug}' not found")))?;

    let similar = queries::get_similar(&state.db, fragrance.id, SIMILAR_LIMIT).await?;

    Ok(Json(DetailResponse {
        success: true,
        data: fragrance,
        similar,
    }))
}

/// GET /api/surprise-me
/// Redirects to a random fragrance detail page, or the browse page when the
/// catalog is empty.
pub async fn handle_surprise_me(State(state): State<AppState>) -> Result<Redirect, AppError> {
    match queries::random_slug(&state.db).await? {
        Some(slug) => Ok(Redirect::to(&format!("/fragrance/{slug}"))),
        None => Ok(Redirect::to("/explore")),
    }
}

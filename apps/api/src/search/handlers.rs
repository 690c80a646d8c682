use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::fragrance::Suggestion;
use crate::search::suggest;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub suggestions: Vec<Suggestion>,
}

/// GET /api/search?q=
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, AppError> {
    let suggestions = suggest::suggestions(&state.db, &params.q).await?;
    Ok(Json(SuggestResponse {
        success: true,
        suggestions,
    }))
}

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::errors::AppError;
use crate::similarity::cache;
use crate::similarity::voting::{self, Direction, Transition};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VoteRequest {
    pub edge_id: Uuid,
    /// `1` for "smells similar", `-1` for "not similar".
    pub vote: i16,
    /// Slug of the detail page the edge is rendered on, for cache invalidation.
    pub slug: String,
}

#[derive(Serialize)]
pub struct VoteResponse {
    pub success: bool,
    pub action: Transition,
}

#[derive(Deserialize)]
pub struct SuggestRequest {
    pub fragrance_id: Uuid,
    pub similar_id: Uuid,
    pub slug: String,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub success: bool,
}

/// POST /api/similarity/vote
/// Requires an authenticated session; no mutation happens without one.
pub async fn handle_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, AppError> {
    let user_id = auth::require_user(state.sessions.as_ref(), &headers).await?;

    let direction = Direction::from_value(req.vote)
        .ok_or_else(|| AppError::Validation("vote must be 1 or -1".to_string()))?;

    let action = voting::record_vote(&state.db, req.edge_id, user_id, direction).await?;
    info!("User {user_id} vote on edge {}: {action:?}", req.edge_id);

    cache::invalidate_fragrance_page(&state.redis, &req.slug).await;

    Ok(Json(VoteResponse {
        success: true,
        action,
    }))
}

/// POST /api/similarity/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let user_id = auth::require_user(state.sessions.as_ref(), &headers).await?;

    voting::suggest_edge(&state.db, req.fragrance_id, req.similar_id).await?;
    info!(
        "User {user_id} suggested edge {} -> {}",
        req.fragrance_id, req.similar_id
    );

    cache::invalidate_fragrance_page(&state.redis, &req.slug).await;

    Ok(Json(SuggestResponse { success: true }))
}

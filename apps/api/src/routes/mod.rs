pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{catalog, email, search, similarity};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/fragrances", get(catalog::handlers::handle_search))
        .route(
            "/api/fragrances/:slug",
            get(catalog::handlers::handle_get_fragrance),
        )
        .route("/api/surprise-me", get(catalog::handlers::handle_surprise_me))
        // Search suggestions
        .route("/api/search", get(search::handlers::handle_suggestions))
        // Similarity voting
        .route(
            "/api/similarity/vote",
            post(similarity::handlers::handle_vote),
        )
        .route(
            "/api/similarity/suggest",
            post(similarity::handlers::handle_suggest),
        )
        // Account
        .route(
            "/api/account/email-check",
            post(email::handlers::handle_email_check),
        )
        .with_state(state)
}

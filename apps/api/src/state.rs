use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::auth::SessionProvider;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis carries the rendered detail-page cache and session tokens.
    pub redis: RedisClient,
    pub config: Config,
    /// Pluggable session capability. Production: `RedisSessionProvider`;
    /// tests swap in a stub.
    pub sessions: Arc<dyn SessionProvider>,
}

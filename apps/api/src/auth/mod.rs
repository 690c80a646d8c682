//! Session capability for operations that mutate similarity data.
//!
//! The identity provider is an external collaborator; all this subsystem
//! needs is `current_user`: resolve a bearer token to a user id, or `None`
//! when the session is missing or expired. Handlers hold the provider as an
//! `Arc<dyn SessionProvider>` in `AppState`, so tests can swap in a stub.

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use redis::AsyncCommands;
use uuid::Uuid;

use crate::errors::AppError;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolves a session token to the signed-in user, if any.
    async fn current_user(&self, token: &str) -> Result<Option<Uuid>, AppError>;
}

/// Production provider: session tokens live in redis under `session:{token}`
/// with the user id as the value, written by the identity collaborator.
pub struct RedisSessionProvider {
    client: redis::Client,
}

impl RedisSessionProvider {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionProvider for RedisSessionProvider {
    async fn current_user(&self, token: &str) -> Result<Option<Uuid>, AppError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = con.get(format!("session:{token}")).await?;
        match raw {
            Some(id) => match id.parse::<Uuid>() {
                Ok(user_id) => Ok(Some(user_id)),
                Err(_) => {
                    // A malformed session value is treated as signed-out,
                    // not as a server fault.
                    tracing::warn!("Discarding malformed session value for token");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }
}

/// Extracts the bearer token from the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolves the calling user or fails Unauthorized. Called at the top of
/// every mutating handler, before any database work.
pub async fn require_user(
    sessions: &dyn SessionProvider,
    headers: &HeaderMap,
) -> Result<Uuid, AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    sessions
        .current_user(token)
        .await?
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    struct StaticSessions(Option<Uuid>);

    #[async_trait]
    impl SessionProvider for StaticSessions {
        async fn current_user(&self, _token: &str) -> Result<Option<Uuid>, AppError> {
            Ok(self.0)
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsed() {
        assert_eq!(bearer_token(&headers_with("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn test_missing_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
    }

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }

    #[tokio::test]
    async fn test_require_user_with_session() {
        let user_id = Uuid::new_v4();
        let sessions = StaticSessions(Some(user_id));
        let got = require_user(&sessions, &headers_with("Bearer tok")).await.unwrap();
        assert_eq!(got, user_id);
    }

    #[tokio::test]
    async fn test_require_user_signed_out() {
        let sessions = StaticSessions(None);
        let err = require_user(&sessions, &headers_with("Bearer tok"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_require_user_no_header() {
        let sessions = StaticSessions(Some(Uuid::new_v4()));
        let err = require_user(&sessions, &HeaderMap::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}

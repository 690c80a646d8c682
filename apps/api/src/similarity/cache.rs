use redis::AsyncCommands;
use tracing::{debug, warn};

/// Drops the cached rendering of a fragrance detail page after a similarity
/// mutation. Best-effort: a failed invalidation is logged and the request
/// still succeeds; the cache entry ages out on its own TTL.
pub async fn invalidate_fragrance_page(client: &redis::Client, slug: &str) {
    let key = format!("fragrance:page:{slug}");
    match client.get_multiplexed_async_connection().await {
        Ok(mut con) => {
            if let Err(e) = con.del::<_, ()>(&key).await {
                warn!("Failed to invalidate {key}: {e}");
            } else {
                debug!("Invalidated {key}");
            }
        }
        Err(e) => warn!("Redis unavailable, skipping invalidation of {key}: {e}"),
    }
}

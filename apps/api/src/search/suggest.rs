//! Autocomplete suggestions over the fragrance/brand relation.
//!
//! Matching is a case-insensitive substring match on the fragrance search
//! name or the brand name. Exact name-prefix matches sort before all other
//! matches; within each tier rows come back alphabetically.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::fragrance::Suggestion;

pub const MAX_SUGGESTIONS: i64 = 8;
pub const MIN_QUERY_LEN: usize = 2;

/// Trims the raw query and rejects anything shorter than `MIN_QUERY_LEN`
/// characters. `None` means no query should be executed at all.
pub fn normalized_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        None
    } else {
        Some(trimmed)
    }
}

/// Escapes LIKE/ILIKE metacharacters so user input only ever matches
/// literally. Postgres treats backslash as the default escape character.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Returns up to `MAX_SUGGESTIONS` matches for a free-text query, or an
/// empty list without touching the database when the query is too short.
pub async fn suggestions(pool: &PgPool, raw_query: &str) -> Result<Vec<Suggestion>, AppError> {
    let Some(query) = normalized_query(raw_query) else {
        return Ok(Vec::new());
    };

    let pattern = format!("%{}%", escape_like(query));
    let prefix = format!("{}%", escape_like(query));

    Ok(sqlx::query_as::<_, Suggestion>(
        "SELECT f.id, f.name, COALESCE(b.name, '') AS brand, f.slug, f.image_url \
         FROM fragrances f LEFT JOIN brands b ON b.id = f.brand_id \
         WHERE f.search_name ILIKE $1 OR b.name ILIKE $1 \
         ORDER BY (f.name ILIKE $2) DESC, f.name ASC \
         LIMIT $3",
    )
    .bind(&pattern)
    .bind(&prefix)
    .bind(MAX_SUGGESTIONS)
    .fetch_all(pool)
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(normalized_query(""), None);
    }

    #[test]
    fn test_single_char_rejected() {
        assert_eq!(normalized_query("a"), None);
    }

    #[test]
    fn test_whitespace_padding_ignored() {
        // "  a  " trims down to one character, still too short
        assert_eq!(normalized_query("  a  "), None);
        assert_eq!(normalized_query("  di  "), Some("di"));
    }

    #[test]
    fn test_two_chars_accepted() {
        assert_eq!(normalized_query("no"), Some("no"));
    }

    #[test]
    fn test_multibyte_chars_counted_not_bytes() {
        // two chars, four bytes
        assert_eq!(normalized_query("éà"), Some("éà"));
    }

    #[test]
    fn test_escape_like_passthrough() {
        assert_eq!(escape_like("sauvage"), "sauvage");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}

//! Parameterized catalog queries over the fragrance relation.
//!
//! All operations here are read-only and idempotent; writes happen only in
//! the similarity module. Filters are combined with AND and bound as
//! parameters, never interpolated.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::fragrance::{Fragrance, Gender};
use crate::models::similarity::SimilarFragrance;
use crate::search::suggest::escape_like;

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Optional filters for a catalog search. All present filters must match.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub q: Option<String>,
    pub brand: Option<String>,
    pub gender: Option<Gender>,
    pub note: Option<String>,
    pub accord: Option<String>,
}

/// Clamps the requested page size into `1..=MAX_LIMIT`.
/// The clamp is silent: an oversized request is executed at `MAX_LIMIT`
/// rather than rejected.
pub fn clamp_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Floors the requested offset at zero.
pub fn clamp_offset(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}

fn push_filters<'a>(qb: &mut QueryBuilder<'a, Postgres>, filters: &'a SearchFilters) {
    if let Some(q) = &filters.q {
        let pattern = format!("%{}%", escape_like(q));
        qb.push(" AND (f.search_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR b.name ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(brand) = &filters.brand {
        qb.push(" AND LOWER(b.name) = LOWER(").push_bind(brand).push(")");
    }
    if let Some(gender) = filters.gender {
        qb.push(" AND f.gender = ").push_bind(gender.as_str());
    }
    if let Some(note) = &filters.note {
        qb.push(" AND ").push_bind(note.to_lowercase()).push(" = ANY(f.notes)");
    }
    if let Some(accord) = &filters.accord {
        qb.push(" AND ")
            .push_bind(accord.to_lowercase())
            .push(" = ANY(f.accords)");
    }
}

/// Runs a filtered catalog search and returns the page plus the total count
/// of matching rows (counted without limit/offset).
pub async fn search(
    pool: &PgPool,
    filters: &SearchFilters,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Fragrance>, i64), AppError> {
    let mut qb = QueryBuilder::new(
        "SELECT f.id, f.slug, f.name, b.name AS brand, f.gender, f.image_url \
         FROM fragrances f LEFT JOIN brands b ON b.id = f.brand_id WHERE TRUE",
    );
    push_filters(&mut qb, filters);
    qb.push(" ORDER BY f.name ASC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    let rows = qb.build_query_as::<Fragrance>().fetch_all(pool).await?;

    let mut count_qb = QueryBuilder::new(
        "SELECT COUNT(*) FROM fragrances f \
         LEFT JOIN brands b ON b.id = f.brand_id WHERE TRUE",
    );
    push_filters(&mut count_qb, filters);
    let total: i64 = count_qb.build_query_scalar().fetch_one(pool).await?;

    Ok((rows, total))
}

/// Looks up a single fragrance by its URL slug.
pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Fragrance>, AppError> {
    Ok(sqlx::query_as::<_, Fragrance>(
        "SELECT f.id, f.slug, f.name, b.name AS brand, f.gender, f.image_url \
         FROM fragrances f LEFT JOIN brands b ON b.id = f.brand_id \
         WHERE f.slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?)
}

/// Returns up to `limit` fragrances related to `fragrance_id` through
/// similarity edges, ranked by aggregate vote tally descending.
pub async fn get_similar(
    pool: &PgPool,
    fragrance_id: Uuid,
    limit: i64,
) -> Result<Vec<SimilarFragrance>, AppError> {
    Ok(sqlx::query_as::<_, SimilarFragrance>(
        "SELECT f.id, f.slug, f.name, b.name AS brand, f.gender, f.image_url, e.tally \
         FROM similarity_edges e \
         JOIN fragrances f ON f.id = e.similar_id \
         LEFT JOIN brands b ON b.id = f.brand_id \
         WHERE e.fragrance_id = $1 \
         ORDER BY e.tally DESC, f.name ASC \
         LIMIT $2",
    )
    .bind(fragrance_id)
    .bind(limit)
    .fetch_all(pool)
    .await?)
}

/// Picks one random catalog slug, delegating randomness to the database.
/// `ORDER BY RANDOM()` scans the table, which is acceptable at catalog scale.
pub async fn random_slug(pool: &PgPool) -> Result<Option<String>, AppError> {
    Ok(
        sqlx::query_scalar("SELECT slug FROM fragrances ORDER BY RANDOM() LIMIT 1")
            .fetch_optional(pool)
            .await?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_when_missing() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(clamp_limit(Some(500)), MAX_LIMIT);
    }

    #[test]
    fn test_limit_at_max_passes_through() {
        assert_eq!(clamp_limit(Some(100)), 100);
    }

    #[test]
    fn test_limit_floor_is_one() {
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
    }

    #[test]
    fn test_offset_floored_at_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }
}

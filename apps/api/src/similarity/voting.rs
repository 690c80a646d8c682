//! Similarity voting: a three-state machine per (edge, user) pair.
//!
//! The transition table is explicit so the toggle-off and flip-direction
//! semantics stay testable without a database. Persistence is a single vote
//! row per (edge, user), enforced by the primary key; the edge tally is
//! recomputed from the vote rows after every mutation.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Direction of a similarity vote. On the wire this is `1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn value(self) -> i16 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn from_value(value: i16) -> Option<Self> {
        match value {
            1 => Some(Direction::Up),
            -1 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Stored vote state for one (edge, user) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteState {
    NoVote,
    VotedUp,
    VotedDown,
}

impl VoteState {
    /// Maps the stored row value (if any) onto a state. Unknown stored
    /// values are treated as no vote rather than rejected.
    pub fn from_stored(value: Option<i16>) -> Self {
        match value {
            Some(1) => VoteState::VotedUp,
            Some(-1) => VoteState::VotedDown,
            _ => VoteState::NoVote,
        }
    }
}

/// Which mutation a vote produced, echoed back so the UI can update
/// optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Removed,
    Updated,
}

/// The full transition table. Re-voting in the stored direction toggles the
/// vote off; every other input lands on the voted state for that direction.
pub fn apply(current: VoteState, direction: Direction) -> (VoteState, Transition) {
    match (current, direction) {
        (VoteState::NoVote, Direction::Up) => (VoteState::VotedUp, Transition::Updated),
        (VoteState::NoVote, Direction::Down) => (VoteState::VotedDown, Transition::Updated),
        (VoteState::VotedUp, Direction::Up) => (VoteState::NoVote, Transition::Removed),
        (VoteState::VotedUp, Direction::Down) => (VoteState::VotedDown, Transition::Updated),
        (VoteState::VotedDown, Direction::Down) => (VoteState::NoVote, Transition::Removed),
        (VoteState::VotedDown, Direction::Up) => (VoteState::VotedUp, Transition::Updated),
    }
}

/// Records a user's vote on an edge and refreshes the edge tally.
/// Cross-request races on the same pair resolve last-write-wins through the
/// database; no in-process coordination happens here.
pub async fn record_vote(
    pool: &PgPool,
    edge_id: Uuid,
    user_id: Uuid,
    direction: Direction,
) -> Result<Transition, AppError> {
    let edge_exists: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM similarity_edges WHERE id = $1")
            .bind(edge_id)
            .fetch_optional(pool)
            .await?;
    if edge_exists.is_none() {
        return Err(AppError::NotFound(format!("Similarity edge {edge_id} not found")));
    }

    let stored: Option<i16> =
        sqlx::query_scalar("SELECT value FROM similarity_votes WHERE edge_id = $1 AND user_id = $2")
            .bind(edge_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    let (next, transition) = apply(VoteState::from_stored(stored), direction);

    match next {
        VoteState::NoVote => {
            sqlx::query("DELETE FROM similarity_votes WHERE edge_id = $1 AND user_id = $2")
                .bind(edge_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        }
        VoteState::VotedUp | VoteState::VotedDown => {
            sqlx::query(
                "INSERT INTO similarity_votes (edge_id, user_id, value) VALUES ($1, $2, $3) \
                 ON CONFLICT (edge_id, user_id) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(edge_id)
            .bind(user_id)
            .bind(direction.value())
            .execute(pool)
            .await?;
        }
    }

    refresh_tally(pool, edge_id).await?;
    Ok(transition)
}

/// Creates a similarity edge suggestion. Duplicate suggestions are absorbed
/// by the (fragrance_id, similar_id) uniqueness constraint.
pub async fn suggest_edge(
    pool: &PgPool,
    fragrance_id: Uuid,
    similar_id: Uuid,
) -> Result<(), AppError> {
    if fragrance_id == similar_id {
        return Err(AppError::Validation(
            "A fragrance cannot be suggested as similar to itself".to_string(),
        ));
    }

    sqlx::query(
        "INSERT INTO similarity_edges (id, fragrance_id, similar_id, tally) \
         VALUES ($1, $2, $3, 0) \
         ON CONFLICT (fragrance_id, similar_id) DO NOTHING",
    )
    .bind(Uuid::new_v4())
    .bind(fragrance_id)
    .bind(similar_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Recomputes the aggregate tally from the vote rows. Issued as its own
/// statement; the recompute is self-correcting under concurrent votes.
async fn refresh_tally(pool: &PgPool, edge_id: Uuid) -> Result<(), AppError> {
    sqlx::query(
        "UPDATE similarity_edges \
         SET tally = COALESCE((SELECT SUM(value) FROM similarity_votes WHERE edge_id = $1), 0) \
         WHERE id = $1",
    )
    .bind(edge_id)
    .execute(pool)
    .await?;
    Ok(())
}

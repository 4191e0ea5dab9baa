//! Reaction database model

use sqlx::FromRow;

/// Database model for the reactions table
///
/// One row per `(automation_id, emoji)` pair; the `count` column is the
/// counter itself, incremented in place by the store's upsert.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub automation_id: i64,
    pub emoji: String,
    pub count: i32,
}

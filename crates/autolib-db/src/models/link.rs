//! Link database model

use sqlx::FromRow;

/// Database model for the automation_links table
#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub automation_id: i64,
    pub title: String,
    pub url: String,
}

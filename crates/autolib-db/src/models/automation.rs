//! Automation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the automations table
///
/// `tags` and `images` are Postgres `TEXT[]` columns; child links and
/// reactions live in their own tables and are joined by the mappers.
#[derive(Debug, Clone, FromRow)]
pub struct AutomationModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub student_name: String,
    pub submission_date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub setup_instructions: String,
    pub installation_code: Option<String>,
}

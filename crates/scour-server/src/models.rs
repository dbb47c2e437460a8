//! Database row types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FileRecord {
    pub id: i64,
    pub original_filename: String,
    pub stored_path: String,
    pub uploaded_at: DateTime<Utc>,
    pub user_id: i64,
}

/// One persisted cleaning run, carrying the same metrics as the cleaning
/// response so the history endpoint can replay them.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CleaningHistory {
    pub id: i64,
    pub file_id: i64,
    pub steps_applied: String,
    pub cleaned_file_path: Option<String>,
    pub rows_before: i64,
    pub rows_after: i64,
    pub duplicates_removed: i64,
    pub missing_values_fixed: i64,
    pub data_quality_score: i64,
    pub cleaned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ActivityLog {
    pub id: i64,
    pub user_email: String,
    pub action: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

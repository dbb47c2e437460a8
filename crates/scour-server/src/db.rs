//! Postgres access: pool setup, schema creation, and queries.

use scour_processing::CleaningReport;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::{CleaningHistory, FileRecord, User};

pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Create the tables if they do not exist yet. Run once at startup.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS files (
            id BIGSERIAL PRIMARY KEY,
            original_filename TEXT NOT NULL,
            stored_path TEXT NOT NULL,
            uploaded_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            user_id BIGINT NOT NULL REFERENCES users(id)
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS cleaning_history (
            id BIGSERIAL PRIMARY KEY,
            file_id BIGINT NOT NULL REFERENCES files(id),
            steps_applied TEXT NOT NULL DEFAULT '',
            cleaned_file_path TEXT,
            rows_before BIGINT NOT NULL,
            rows_after BIGINT NOT NULL,
            duplicates_removed BIGINT NOT NULL,
            missing_values_fixed BIGINT NOT NULL,
            data_quality_score BIGINT NOT NULL,
            cleaned_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS activity_logs (
            id BIGSERIAL PRIMARY KEY,
            user_email TEXT NOT NULL,
            action TEXT NOT NULL,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_activity_logs_user_email
         ON activity_logs(user_email)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, hashed_password, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn insert_user(
    pool: &PgPool,
    email: &str,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, hashed_password)
         VALUES ($1, $2)
         RETURNING id, email, hashed_password, created_at",
    )
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}

pub async fn insert_file_record(
    pool: &PgPool,
    user_id: i64,
    original_filename: &str,
    stored_path: &str,
) -> Result<FileRecord, sqlx::Error> {
    sqlx::query_as::<_, FileRecord>(
        "INSERT INTO files (original_filename, stored_path, user_id)
         VALUES ($1, $2, $3)
         RETURNING id, original_filename, stored_path, uploaded_at, user_id",
    )
    .bind(original_filename)
    .bind(stored_path)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn insert_cleaning_history(
    pool: &PgPool,
    file_id: i64,
    report: &CleaningReport,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO cleaning_history
            (file_id, steps_applied, cleaned_file_path, rows_before, rows_after,
             duplicates_removed, missing_values_fixed, data_quality_score)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING id",
    )
    .bind(file_id)
    .bind(report.steps.join("; "))
    .bind(report.cleaned_file_path.as_deref())
    .bind(report.rows_before as i64)
    .bind(report.rows_after as i64)
    .bind(report.duplicates_removed as i64)
    .bind(report.missing_values_fixed as i64)
    .bind(report.data_quality_score)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Cleaning runs for one user, newest first.
pub async fn list_cleaning_history(
    pool: &PgPool,
    user_email: &str,
    limit: i64,
) -> Result<Vec<CleaningHistory>, sqlx::Error> {
    sqlx::query_as::<_, CleaningHistory>(
        "SELECT h.id, h.file_id, h.steps_applied, h.cleaned_file_path,
                h.rows_before, h.rows_after, h.duplicates_removed,
                h.missing_values_fixed, h.data_quality_score, h.cleaned_at
         FROM cleaning_history h
         JOIN files f ON f.id = h.file_id
         JOIN users u ON u.id = f.user_id
         WHERE u.email = $1
         ORDER BY h.cleaned_at DESC
         LIMIT $2",
    )
    .bind(user_email)
    .bind(limit)
    .fetch_all(pool)
    .await
}

//! The upload-analyze-clean pipeline endpoint and its history.
//!
//! POST /pipeline/clean-csv — multipart upload, returns the merged report
//! GET  /pipeline/history   — the caller's past cleaning runs

use std::path::PathBuf;

use axum::extract::Multipart;
use axum::{Extension, Json};
use scour_processing::{AnalysisReport, CleaningReport, DataAnalyzer, DataCleaner, PipelineReport};
use sqlx::PgPool;
use tracing::info;

use crate::activity::log_activity;
use crate::db;
use crate::error::AppError;
use crate::middleware::jwt::AuthUser;
use crate::models::CleaningHistory;
use crate::storage::Storage;

const HISTORY_LIMIT: i64 = 50;

pub async fn clean_csv(
    Extension(pool): Extension<PgPool>,
    Extension(storage): Extension<Storage>,
    Extension(AuthUser(user_email)): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<Json<PipelineReport>, AppError> {
    let (filename, bytes) = read_upload(multipart).await?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    let path = storage
        .save_upload(&filename, &bytes)
        .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;
    info!("Stored upload {} for {}", path.display(), user_email);

    log_activity(
        &pool,
        &user_email,
        "UPLOAD",
        &format!("Uploaded file: {}", filename),
    )
    .await;

    let analysis = run_analysis(path.clone()).await?;
    log_activity(
        &pool,
        &user_email,
        "ANALYZE",
        &format!(
            "Rows: {}, Columns: {}",
            analysis.total_rows, analysis.total_columns
        ),
    )
    .await;

    let cleaning = run_cleaning(path.clone()).await?;
    log_activity(
        &pool,
        &user_email,
        "CLEAN",
        &format!(
            "Rows before: {}, Rows after: {}, Duplicates removed: {}, \
             Missing values fixed: {}, Quality score: {}",
            cleaning.rows_before,
            cleaning.rows_after,
            cleaning.duplicates_removed,
            cleaning.missing_values_fixed,
            cleaning.data_quality_score
        ),
    )
    .await;

    record_run(&pool, &user_email, &filename, &path, &cleaning).await?;

    Ok(Json(PipelineReport::new(analysis, cleaning)))
}

pub async fn history(
    Extension(pool): Extension<PgPool>,
    Extension(AuthUser(user_email)): Extension<AuthUser>,
) -> Result<Json<Vec<CleaningHistory>>, AppError> {
    let rows = db::list_cleaning_history(&pool, &user_email, HISTORY_LIMIT).await?;
    Ok(Json(rows))
}

/// Pull the `file` field out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.csv").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
        return Ok((filename, bytes.to_vec()));
    }

    Err(AppError::BadRequest("Missing 'file' field".to_string()))
}

// The core is synchronous blocking work; keep it off the async workers.

async fn run_analysis(path: PathBuf) -> Result<AnalysisReport, AppError> {
    tokio::task::spawn_blocking(move || DataAnalyzer::analyze(&path))
        .await
        .map_err(|e| AppError::Internal(format!("analysis task panicked: {e}")))?
        .map_err(AppError::from)
}

async fn run_cleaning(path: PathBuf) -> Result<CleaningReport, AppError> {
    tokio::task::spawn_blocking(move || DataCleaner::clean(&path))
        .await
        .map_err(|e| AppError::Internal(format!("cleaning task panicked: {e}")))?
        .map_err(AppError::from)
}

async fn record_run(
    pool: &PgPool,
    user_email: &str,
    filename: &str,
    stored_path: &std::path::Path,
    cleaning: &CleaningReport,
) -> Result<(), AppError> {
    let Some(user) = db::find_user_by_email(pool, user_email).await? else {
        // Token outlived the account; the report is still valid, skip the trail
        return Ok(());
    };

    let file = db::insert_file_record(
        pool,
        user.id,
        filename,
        &stored_path.to_string_lossy(),
    )
    .await?;
    db::insert_cleaning_history(pool, file.id, cleaning).await?;
    Ok(())
}

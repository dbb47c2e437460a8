//! Per-user activity trail.
//!
//! Every audited action (REGISTER, LOGIN, UPLOAD, ANALYZE, CLEAN) becomes
//! one `activity_logs` row. Audit writes never fail the request they
//! describe.

use sqlx::PgPool;
use tracing::warn;

pub async fn log_activity(pool: &PgPool, user_email: &str, action: &str, description: &str) {
    let result = sqlx::query(
        "INSERT INTO activity_logs (user_email, action, description) VALUES ($1, $2, $3)",
    )
    .bind(user_email)
    .bind(action)
    .bind(description)
    .execute(pool)
    .await;

    if let Err(e) = result {
        warn!("Failed to record {action} activity for {user_email}: {e}");
    }
}

//! scour-server — REST server for the scour cleaning pipeline.
//!
//! Reads config from env vars (a `.env` file is honored):
//!   DATABASE_URL              — Postgres connection string (required)
//!   SCOUR_JWT_SECRET          — JWT HMAC secret (required)
//!   SCOUR_JWT_EXPIRE_MINUTES  — token lifetime (default: 30)
//!   SCOUR_BIND_ADDR           — listen address (default: 0.0.0.0:8000)
//!   SCOUR_UPLOAD_DIR          — upload directory (default: uploads)

use anyhow::Context;
use dotenv::dotenv;
use scour_server::config::ServerConfig;
use scour_server::middleware::jwt::JwtConfig;
use scour_server::router::build_router;
use scour_server::storage::Storage;
use scour_server::db;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scour_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let pool = db::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Connected to database");

    db::init_schema(&pool)
        .await
        .context("failed to initialize schema")?;

    let storage = Storage::new(&config.upload_dir)
        .with_context(|| format!("failed to open upload dir {}", config.upload_dir.display()))?;

    let jwt_config = JwtConfig::from_secret(config.jwt_secret.as_bytes(), config.jwt_expire_minutes);

    let app = build_router(pool, storage, jwt_config);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("scour-server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

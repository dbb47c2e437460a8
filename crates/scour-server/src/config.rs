//! Server configuration, read once from the environment at startup.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration for the server.
///
/// Built from environment variables (a `.env` file is honored) and passed
/// explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string. Required.
    pub database_url: String,
    /// JWT HMAC secret. Required; startup fails fast when unset.
    pub jwt_secret: String,
    /// Access-token lifetime in minutes.
    pub jwt_expire_minutes: i64,
    /// Listen address.
    pub bind_addr: String,
    /// Directory uploaded files are stored in.
    pub upload_dir: PathBuf,
}

impl ServerConfig {
    /// Read the configuration from the environment.
    ///
    /// Env vars:
    ///   DATABASE_URL              — Postgres connection string (required)
    ///   SCOUR_JWT_SECRET          — JWT HMAC secret (required)
    ///   SCOUR_JWT_EXPIRE_MINUTES  — token lifetime (default: 30)
    ///   SCOUR_BIND_ADDR           — listen address (default: 0.0.0.0:8000)
    ///   SCOUR_UPLOAD_DIR          — upload directory (default: uploads)
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt_secret = env::var("SCOUR_JWT_SECRET").context("SCOUR_JWT_SECRET must be set")?;

        let jwt_expire_minutes = match env::var("SCOUR_JWT_EXPIRE_MINUTES") {
            Ok(raw) => raw
                .parse::<i64>()
                .context("SCOUR_JWT_EXPIRE_MINUTES must be an integer")?,
            Err(_) => 30,
        };

        let bind_addr =
            env::var("SCOUR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let upload_dir = env::var("SCOUR_UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expire_minutes,
            bind_addr,
            upload_dir,
        })
    }
}

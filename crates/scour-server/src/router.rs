//! Router construction for the scour server.

use axum::extract::DefaultBodyLimit;
use axum::{
    Extension, Router, middleware as axum_mw,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::jwt::{JwtConfig, jwt_auth};
use crate::storage::Storage;

/// Uploads are buffered in memory; cap the body well above typical datasets.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Build the full axum router with all routes and middleware.
pub fn build_router(pool: PgPool, storage: Storage, jwt_config: JwtConfig) -> Router {
    // Routes that require JWT authentication
    let protected = Router::new()
        .route("/pipeline/clean-csv", post(handlers::pipeline::clean_csv))
        .route("/pipeline/history", get(handlers::pipeline::history))
        .layer(axum_mw::from_fn(jwt_auth));

    // Public routes (no auth)
    let public = Router::new()
        .route("/", get(handlers::health::root))
        .route("/users/register", post(handlers::users::register))
        .route("/users/login", post(handlers::users::login));

    public
        .merge(protected)
        .layer(Extension(pool))
        .layer(Extension(storage))
        .layer(Extension(jwt_config))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

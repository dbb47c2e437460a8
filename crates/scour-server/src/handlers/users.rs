//! User registration and login handlers.
//!
//! POST /users/register — create an account
//! POST /users/login    — exchange credentials for a JWT

use axum::{Extension, Form, Json};
use sqlx::PgPool;
use tracing::info;

use crate::activity::log_activity;
use crate::db;
use crate::error::AppError;
use crate::middleware::jwt::{JwtConfig, create_access_token};
use crate::schemas::{LoginForm, MessageResponse, RegisterRequest, TokenResponse};
use crate::security;

pub async fn register(
    Extension(pool): Extension<PgPool>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("Password must not be empty".to_string()));
    }
    if db::find_user_by_email(&pool, &req.email).await?.is_some() {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let hashed = security::hash_password(&req.password)?;
    db::insert_user(&pool, &req.email, &hashed).await?;
    info!("Registered user {}", req.email);

    log_activity(&pool, &req.email, "REGISTER", "New user registered").await;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

pub async fn login(
    Extension(pool): Extension<PgPool>,
    Extension(jwt): Extension<JwtConfig>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = db::find_user_by_email(&pool, &form.username)
        .await?
        .filter(|user| security::verify_password(&form.password, &user.hashed_password))
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    log_activity(&pool, &user.email, "LOGIN", "User logged in").await;

    let token = create_access_token(&jwt, &user.email)?;
    Ok(Json(TokenResponse::bearer(token)))
}

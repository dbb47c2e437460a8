//! JWT issuance and verification middleware.
//!
//! Tokens carry the user's email in `sub` plus `iat`/`exp`, signed HS256.
//! Protected routes run [`jwt_auth`], which verifies the bearer token and
//! exposes the caller as an [`AuthUser`] request extension.

use axum::Extension;
use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Signing/verification keys plus token lifetime.
#[derive(Clone)]
pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
    pub expire_minutes: i64,
}

impl JwtConfig {
    pub fn from_secret(secret: &[u8], expire_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            expire_minutes,
        }
    }
}

/// Claims carried by an access token. `sub` holds the user's email.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// The authenticated caller's email, inserted by [`jwt_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

/// Issue an access token for `email`.
pub fn create_access_token(config: &JwtConfig, email: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(config.expire_minutes)).timestamp(),
    };

    encode(&Header::default(), &claims, &config.encoding)
        .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
}

/// Axum middleware enforcing `Authorization: Bearer <token>`.
pub async fn jwt_auth(
    Extension(config): Extension<JwtConfig>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let data = decode::<Claims>(token, &config.decoding, &Validation::default())
        .map_err(|_| AppError::Unauthorized("Token verification failed".to_string()))?;

    if data.claims.sub.is_empty() {
        return Err(AppError::Unauthorized("Invalid token payload".to_string()));
    }

    req.extensions_mut().insert(AuthUser(data.claims.sub));
    Ok(next.run(req).await)
}

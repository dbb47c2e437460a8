//! Root liveness endpoint.

use axum::Json;

use crate::schemas::MessageResponse;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Server running successfully"))
}

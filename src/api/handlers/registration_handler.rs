//! Registration handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::REGISTER_PATH;
use crate::domain::RegistrationRequest;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create registration routes (with and without trailing slash)
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route(REGISTER_PATH, post(register))
        .route(&format!("{}/", REGISTER_PATH), post(register))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Registration",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Missing credentials, username taken or malformed body", body = crate::errors::ErrorResponse),
        (status = 500, description = "User store failure", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegistrationRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let info = state.registration_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(info.message))))
}

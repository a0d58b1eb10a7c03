//! HTTP handlers for the counter API.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer for business logic.

use axum::{body::Bytes, extract::State, Json};
use tracing::debug;

use super::dto::{ApiResponse, CounterDto};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult = Result<Json<ApiResponse>, AppError>;

/// Plain-text welcome message enumerating the available routes.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the counter API server.\nDatapoints available: \n /data[GET] \n /data[POST]\n";

/// GET /
///
/// Welcome page listing the available endpoints. Always 200, no side effects.
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// GET /data
///
/// Read the current counter value.
pub async fn get_data(State(state): State<AppState>) -> HandlerResult {
    let value = services::get_counter(state.repository.as_ref()).await?;
    Ok(Json(ApiResponse::with_counter(value)))
}

/// POST /data
///
/// Overwrite the counter with the value from a `{"Count": <n>}` body.
/// Validation order: the body must parse as the counter shape, then the
/// value must be non-negative. The stored value is not echoed back.
pub async fn post_data(State(state): State<AppState>, body: Bytes) -> HandlerResult {
    let input: CounterDto = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {}", e)))?;
    debug!(count = input.count, "counter update requested");

    services::set_counter(state.repository.as_ref(), input.count).await?;
    Ok(Json(ApiResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_lists_both_data_routes() {
        assert!(WELCOME_MESSAGE.contains("/data[GET]"));
        assert!(WELCOME_MESSAGE.contains("/data[POST]"));
    }
}

//! HTTP mapping of `PricerError`.
//!
//! Validation -> 422, model failure -> 400, everything else -> opaque 500
//! (cause logged, never sent to the client).

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use pricer_core::error::{ModelError, PricerError, ValidationError};

use crate::predict::invoker::panic_message;

const INTERNAL_DETAIL: &str = "Internal server error";

#[derive(Debug)]
pub struct ApiError(pub PricerError);

impl From<PricerError> for ApiError {
    fn from(e: PricerError) -> Self {
        Self(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self(PricerError::Validation(e))
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        Self(PricerError::Model(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PricerError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": format!("Validation Error: {e}"),
                    "field": e.field,
                    "reason": e.reason,
                })),
            )
                .into_response(),
            PricerError::Model(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": format!("Model Error: {e}") })),
            )
                .into_response(),
            other => {
                tracing::error!(code = other.client_code().as_str(), error = %other, "unhandled fault");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": INTERNAL_DETAIL })),
    )
        .into_response()
}

/// Response for a panic that escaped a handler.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = %panic_message(payload.as_ref()), "handler panicked");
    internal_error()
}

//! Shared error type across pricer crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Request body failed schema validation.
    ValidationFailed,
    /// The loaded model rejected an otherwise valid record.
    ModelError,
    /// Configuration is missing or malformed.
    ConfigInvalid,
    /// Model artifact could not be loaded.
    ModelUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::ModelError => "MODEL_ERROR",
            ClientCode::ConfigInvalid => "CONFIG_INVALID",
            ClientCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// A single field of the input record violated its constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// The model failed on a schema-valid record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ModelError {
    pub message: String,
}

impl ModelError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PricerError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PricerError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Model Error: {0}")]
    Model(#[from] ModelError),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("model load failed: {0}")]
    ModelLoad(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PricerError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PricerError::Validation(_) => ClientCode::ValidationFailed,
            PricerError::Model(_) => ClientCode::ModelError,
            PricerError::Config(_) => ClientCode::ConfigInvalid,
            PricerError::ModelLoad(_) => ClientCode::ModelUnavailable,
            PricerError::Internal(_) => ClientCode::Internal,
        }
    }
}

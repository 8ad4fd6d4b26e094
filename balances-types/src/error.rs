//! Error types for the balances proxy.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single request-validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending query parameter
    #[schema(example = "PageSize")]
    pub field: String,
    #[schema(example = "PageSize must be between 1 and 100.")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Gateway-level errors (provider access failures).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The provider answered and rejected or failed the call.
    #[error("{message}")]
    Provider {
        message: String,
        status: Option<u16>,
        code: Option<String>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Provider error carrying only a message.
    pub fn provider(message: impl Into<String>) -> Self {
        GatewayError::Provider {
            message: message.into(),
            status: None,
            code: None,
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Cannot specify both StartAfter and EndBefore. Please provide only one of them.")]
    ConflictingCursors,

    #[error("Remote service error: {0}")]
    RemoteService(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Provider { message, .. } => AppError::RemoteService(message),
            e @ GatewayError::Transport(_) => AppError::Unexpected(e.to_string()),
            e @ GatewayError::Decode(_) => AppError::Unexpected(e.to_string()),
        }
    }
}

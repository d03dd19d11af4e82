use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body returned to clients: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application-level error taxonomy.
///
/// Each variant maps to a fixed HTTP status. Validation always happens
/// before any store mutation, so a client error never leaves partial state
/// behind. Absence and expiry both surface as [`AppError::NotFound`] —
/// deliberately indistinguishable so expired links leak no existence
/// information.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: bad URL, non-positive expiry, invalid code alphabet.
    #[error("{message}")]
    Validation { message: String },

    /// Unknown or expired short code.
    #[error("{message}")]
    NotFound { message: String },

    /// Custom short code already taken.
    #[error("{message}")]
    Conflict { message: String },

    /// Code generation exhausted its retry budget. Indicates an undersized
    /// code space or a store fault, so it is reported as a server error.
    #[error("failed to allocate a short code after {attempts} attempts")]
    NamespaceExhausted { attempts: usize },

    /// Unexpected failure in the storage layer.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::NamespaceExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed with server error");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::Validation { message }
    }
}

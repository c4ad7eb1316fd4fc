//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::ErrorResponse;
use crate::application::JournalError;
use crate::application::ports::UserDirectoryError;
use crate::domain::trade::TradeError;

/// An error rendered as a JSON body with a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// Caller identity missing or unknown.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: ErrorResponse {
                code: "UNAUTHORIZED".to_string(),
                message: message.into(),
                field: None,
            },
        }
    }

    /// HTTP status of this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.body.code
    }
}

impl From<JournalError> for ApiError {
    fn from(err: JournalError) -> Self {
        let status = match &err {
            JournalError::Trade(TradeError::NotFound { .. }) | JournalError::UserNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            JournalError::Trade(TradeError::Forbidden { .. }) | JournalError::AdminOnly => {
                StatusCode::FORBIDDEN
            }
            JournalError::Trade(
                TradeError::InvalidRiskReward(_)
                | TradeError::NonPositiveRatio
                | TradeError::InvalidField { .. },
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            JournalError::Trade(TradeError::Conflict { .. })
            | JournalError::Directory(UserDirectoryError::AlreadyExists { .. }) => {
                StatusCode::CONFLICT
            }
            JournalError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            JournalError::Trade(TradeError::Storage(_))
            | JournalError::Directory(UserDirectoryError::Unavailable { .. })
            | JournalError::Analytics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let field = match &err {
            JournalError::Trade(TradeError::InvalidRiskReward(reason)) => {
                Some(reason.field().to_string())
            }
            JournalError::Trade(TradeError::InvalidField { field, .. })
            | JournalError::InvalidInput { field, .. } => Some(field.clone()),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(error = %err, "Request failed");
        }

        Self {
            status,
            body: ErrorResponse {
                code: err.code().to_string(),
                message: err.to_string(),
                field,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

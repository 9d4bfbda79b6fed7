use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub detail: String,
    /// HTTP status code, repeated for clients that only see the body.
    pub code: u16,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("OCR engine error: {0}")]
    Engine(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client as `detail`.
    pub fn detail(&self) -> &str {
        match self {
            GatewayError::InvalidInput(msg) | GatewayError::Engine(msg) => msg,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let body = Json(ErrorBody {
            detail: self.detail().to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

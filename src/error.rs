use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Places API error: {0}")]
    PlacesApi(String),

    /// A single interest's lookup failed. Logged and skipped by the generator.
    #[error("Lookup failed for interest '{interest}': {reason}")]
    LookupFailed { interest: String, reason: String },

    #[error("No places found for the selected interests")]
    NoPlacesFound,

    #[error("At least one interest must be selected")]
    InvalidInterestSelection,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the client can reasonably try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NoPlacesFound
                | AppError::InvalidInterestSelection
                | AppError::PlacesApi(_)
                | AppError::LookupFailed { .. }
        )
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let retryable = self.is_retryable();
        let message = self.to_string();
        let (status, error_message) = match self {
            AppError::PlacesApi(ref e) => {
                tracing::error!("Places API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Places service error")
            }
            AppError::LookupFailed { ref interest, ref reason } => {
                tracing::warn!(interest = %interest, "Lookup failed: {}", reason);
                (StatusCode::BAD_GATEWAY, "Places service error")
            }
            AppError::NoPlacesFound => {
                tracing::info!("No places found for itinerary request");
                (StatusCode::NOT_FOUND, message.as_str())
            }
            AppError::InvalidInterestSelection => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::NotFound(ref e) => (StatusCode::NOT_FOUND, e.as_str()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
            "retryable": retryable,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

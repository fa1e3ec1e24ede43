use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use journey_core::GeoError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Geo(GeoError::InvalidParameter {
                name,
                value,
                expected,
            }) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": format!("Invalid {name} parameter"),
                    "message": self.to_string(),
                    "value": value,
                    "valid": expected.split(", ").collect::<Vec<_>>(),
                }),
            ),
            ApiError::Geo(e) if e.is_client_error() => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Bad request", "message": self.to_string() }),
            ),
            _ => {
                tracing::error!("Request failed: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "message": self.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

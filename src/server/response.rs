use crate::errors::AppError;
use crate::models::{Driver, Event};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexedEvent {
    pub index: usize,
    #[serde(flatten)]
    pub event: Event,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub drivers: Vec<Driver>,
    pub events: Vec<IndexedEvent>,
}

/// Body of every successful mutation.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub status: &'static str,
    pub index: usize,
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl EventResponse {
    pub fn ok(index: usize, event: Event) -> Self {
        Self {
            status: "ok",
            index,
            event,
            warning: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

/// An [`AppError`] rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::NotFound { .. } | AppError::NoSuchPosition(_) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            format!("storage failure: {}", self.0)
        } else {
            self.0.to_string()
        };
        (
            status,
            Json(ErrorBody {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}

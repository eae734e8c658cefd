use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Request-handling failures. Dispatch failures never reach this type:
/// the lead form maps them to its own submission status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");

        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
    }
}

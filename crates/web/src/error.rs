use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use ci_core::artifacts::ArtifactError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Plain-text error pages; the dashboard has no JSON surface.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Artifact(err @ ArtifactError::Missing { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Artifact(err @ ArtifactError::Read { .. }) => {
                tracing::error!(error = ?err, "artifact read failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The report could not be read".to_string(),
                )
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

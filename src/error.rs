use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::queue::SubmitError;

/// Body returned for every rejected submission. Internal detail stays in
/// the operator logs.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no file found under the `csv` field")]
    MissingFile,

    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    #[error("multipart decode failed: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("upload storage failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("job submission failed: {0}")]
    Submission(#[from] SubmitError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure at the submission boundary is answered the same
        // way; nothing propagates and nothing leaks to the client.
        tracing::error!(error = %self, "order submission rejected");
        (StatusCode::BAD_REQUEST, GENERIC_FAILURE).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_map_to_400() {
        let errors = vec![
            AppError::MissingFile,
            AppError::InvalidUpload("bad extension".to_string()),
            AppError::Submission(SubmitError::QueueFull),
            AppError::Io(std::io::Error::other("disk gone")),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}

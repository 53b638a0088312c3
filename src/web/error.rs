use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use super::pages;

#[derive(Error, Debug)]
pub(crate) enum AppError {
    #[error("invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("{0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            // 400 for a malformed body, 413 past the upload limit.
            AppError::Multipart(e) => e.status(),
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), error = %self, "request failed");
        (status, Html(pages::error_page(status, &self.to_string()))).into_response()
    }
}

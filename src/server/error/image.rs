use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the student image endpoints.
///
/// Image endpoints answer with plain-text bodies (upload) or empty bodies
/// (delete) instead of the JSON `ErrorDto` used elsewhere.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The upload carried no file content.
    #[error("Please upload a file")]
    EmptyUpload,

    /// The uploaded file part has no usable file name.
    #[error("Uploaded file has no usable file name")]
    MissingFileName,

    /// The previously recorded image exists but could not be removed.
    ///
    /// The upload is aborted before the new file is written.
    #[error("Failed to delete the existing file")]
    ReplaceExisting(#[source] std::io::Error),

    /// Resolving the storage directory or writing the new file failed.
    #[error("Failed to upload file: {0}")]
    Write(#[source] std::io::Error),

    /// The student has no image on disk to delete.
    ///
    /// Covers a missing student, a missing recorded path and a recorded path
    /// that no longer references an existing file.
    #[error("No image found for student {0}")]
    NoImage(i32),

    /// Removing the image file failed, including permission failures.
    #[error("Failed to delete image file: {0}")]
    Remove(#[source] std::io::Error),
}

/// Converts image errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `EmptyUpload` / `MissingFileName`, message as plain text
/// - 404 Not Found - For `NoImage`, empty body
/// - 500 Internal Server Error - For `ReplaceExisting` / `Write` with the message as
///   plain text, and `Remove` with an empty body
impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyUpload | Self::MissingFileName => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::ReplaceExisting(ref source) => {
                tracing::error!("Failed to delete existing image: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
            Self::Write(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
            Self::NoImage(id) => {
                tracing::debug!("No image to delete for student {}", id);
                StatusCode::NOT_FOUND.into_response()
            }
            Self::Remove(_) => {
                tracing::error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

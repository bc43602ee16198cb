//! Common error type and alias.
//!
//! `AppError` covers every failure the service reports to clients; the
//! `IntoResponse` impl maps each variant to an HTTP status plus a JSON
//! body of the form `{"error": "..."}`.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// The uploaded file could not be used as an input image.
    #[error("Failed to load image: {0}")]
    UnreadableFile(String),

    /// A required field was missing or empty. The message is shown verbatim.
    #[error("{0}")]
    MissingInput(String),

    /// The generation service answered, but no image part was in the response.
    #[error("No image was generated. The model might have refused the request.")]
    NoImageProduced,

    /// The generation service failed or returned an unusable response.
    #[error("Image generation failed: {0}")]
    ServiceError(String),

    /// The mail backend rejected or failed the send. The cause is kept for
    /// logging but never shown to the client.
    #[error("Failed to send message.")]
    MailSendFailure(String),

    #[error("A generation is already in progress for this session.")]
    GenerationInFlight,

    #[error("Session not found")]
    SessionNotFound,

    #[error("No edited image is available to download.")]
    NoResultImage,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UnreadableFile(_) | AppError::MissingInput(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::SessionNotFound | AppError::NoResultImage => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::GenerationInFlight => (StatusCode::CONFLICT, self.to_string()),
            AppError::NoImageProduced => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::ServiceError(_) | AppError::MailSendFailure(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

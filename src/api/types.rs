//! Request and response bodies for the HTTP API.
//!
//! Image bytes never appear in session snapshots; clients get sizes and
//! MIME types and fetch the actual result through the download route.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media;
use crate::session::controller::{EditSession, SessionState};

// Sessions

#[derive(Deserialize)]
pub struct UploadImageRequest {
    /// Original filename, used to type the image by its extension.
    pub filename: String,
    /// Base64 encoded image bytes.
    pub data: String,
    /// Client-declared content type, used when the extension is unknown.
    pub content_type: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct ImageInfo {
    pub mime_type: String,
    pub size_bytes: usize,
}

#[derive(Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub state: SessionState,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_image: Option<ImageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_image: Option<ImageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_filename: Option<String>,
}

impl SessionSnapshot {
    pub fn of(session_id: Uuid, session: &EditSession, brand: &str) -> Self {
        SessionSnapshot {
            session_id,
            state: session.state(),
            prompt: session.prompt().to_string(),
            input_image: session.input_image().map(|image| ImageInfo {
                mime_type: image.mime_type.clone(),
                size_bytes: image.bytes.len(),
            }),
            result_image: session.result_image().map(|part| ImageInfo {
                mime_type: part.mime_type.clone(),
                size_bytes: part.bytes.len(),
            }),
            error: session.last_error().map(str::to_string),
            download_filename: session
                .result_image()
                .map(|part| media::download_filename(brand, &part.mime_type)),
        }
    }
}

// Contact

#[derive(Deserialize)]
pub struct PropertyInquiryRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub property_id: String,
    pub property_title: String,
    pub agent_email: Option<String>,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub ok: bool,
}

//! HTTP client for the `generateContent` image-editing endpoint.
//!
//! One call per edit: the source image goes up inline (base64) together
//! with the prompt, the response modality is restricted to images, and the
//! first inline image part of the answer comes back decoded.
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::session::controller::InputImage;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// One generated image as returned by the service.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Value>,
}

#[derive(Clone)]
pub struct GenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GenAiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        // Image generation can take minutes, so the default timeout is far
        // too short here.
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .unwrap_or_else(|_| Client::new());
        GenAiClient {
            client,
            base_url: base,
            api_key,
            model,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Ask the model to edit `image` as described by `prompt`.
    ///
    /// A well-formed answer that carries no image part is reported as
    /// `NoImageProduced`; transport failures, error statuses, and unusable
    /// payloads all surface as `ServiceError`.
    pub async fn edit_image(&self, image: &InputImage, prompt: &str) -> AppResult<ImagePart> {
        let url = self.generate_url();
        tracing::info!(
            "Sending edit request to {} ({} input bytes)",
            url,
            image.bytes.len()
        );

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": image.mime_type, "data": BASE64.encode(&image.bytes) } },
                    { "text": prompt },
                ],
            }],
            "generationConfig": { "responseModalities": ["IMAGE"] },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ServiceError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("status {}: {}", status, error_body);
            tracing::error!("Generation request failed: {}", error_message);
            return Err(AppError::ServiceError(error_message));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ServiceError(e.to_string()))?;

        let (mime_type, data) =
            first_inline_image(&parsed.candidates).ok_or(AppError::NoImageProduced)?;
        let bytes = BASE64
            .decode(data.as_bytes())
            .map_err(|e| AppError::ServiceError(format!("invalid image payload: {}", e)))?;
        tracing::info!("Received {} result ({} bytes)", mime_type, bytes.len());
        Ok(ImagePart { mime_type, bytes })
    }
}

/// First `inlineData` part across all candidates, as `(mimeType, data)`.
fn first_inline_image(candidates: &[Value]) -> Option<(String, String)> {
    for candidate in candidates {
        let Some(parts) = candidate
            .get("content")
            .and_then(|c| c.get("parts"))
            .and_then(Value::as_array)
        else {
            continue;
        };
        for part in parts {
            let Some(inline) = part.get("inlineData") else {
                continue;
            };
            let Some(data) = inline.get("data").and_then(Value::as_str) else {
                continue;
            };
            let mime = inline
                .get("mimeType")
                .and_then(Value::as_str)
                .unwrap_or("image/png");
            return Some((mime.to_string(), data.to_string()));
        }
    }
    None
}

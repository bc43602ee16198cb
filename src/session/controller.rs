//! Lifecycle state machine for one photo-edit session.
//!
//! A session walks `Idle -> ImageLoaded -> Generating -> Succeeded|Failed`,
//! with `reset` returning to `Idle` from anywhere. Generation is split into
//! `begin_generate` / `complete_generate` so the caller can run the service
//! call without holding a lock on the session; an attempt token ties the two
//! halves together and lets a reset invalidate work still in flight.
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::genai::client::ImagePart;
use crate::media;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    ImageLoaded,
    Generating,
    Succeeded,
    Failed,
}

/// An uploaded source image with its resolved MIME type.
#[derive(Debug, Clone)]
pub struct InputImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Everything the caller needs to run one generation attempt. The outcome
/// must be reported back through `complete_generate` with the same token.
#[derive(Debug)]
pub struct PendingGeneration {
    pub token: u64,
    pub image: InputImage,
    pub prompt: String,
}

/// Result of a finished generation attempt.
pub enum GenerateOutcome {
    Image(ImagePart),
    Failed(String),
}

/// A result image packaged for download.
pub struct DownloadFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub struct EditSession {
    state: SessionState,
    input_image: Option<InputImage>,
    prompt: String,
    result_image: Option<ImagePart>,
    last_error: Option<String>,
    // Bumped on every begin_generate and reset; a completion only applies
    // when its token still matches.
    attempt: u64,
}

impl EditSession {
    pub fn new() -> Self {
        EditSession {
            state: SessionState::Idle,
            input_image: None,
            prompt: String::new(),
            result_image: None,
            last_error: None,
            attempt: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn input_image(&self) -> Option<&InputImage> {
        self.input_image.as_ref()
    }

    pub fn result_image(&self) -> Option<&ImagePart> {
        self.result_image.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the session's source image and move to `ImageLoaded`.
    ///
    /// The MIME type comes from the filename extension, falling back to the
    /// client-declared content type. Rejected while a generation is in
    /// flight; on any failure the session is left cleared in `Idle`.
    pub fn load_image(
        &mut self,
        bytes: Vec<u8>,
        filename: &str,
        declared_mime: Option<&str>,
    ) -> AppResult<()> {
        if self.state == SessionState::Generating {
            return Err(AppError::GenerationInFlight);
        }
        self.clear();
        if bytes.is_empty() {
            return Err(AppError::UnreadableFile("empty file".to_string()));
        }
        let mime_type = match media::mime_for_filename(filename) {
            Some(mime) => mime.to_string(),
            None => match declared_mime.map(str::trim).filter(|m| !m.is_empty()) {
                Some(mime) => mime.to_string(),
                None => {
                    return Err(AppError::UnreadableFile(
                        "could not determine the image type".to_string(),
                    ))
                }
            },
        };
        self.input_image = Some(InputImage { mime_type, bytes });
        self.state = SessionState::ImageLoaded;
        Ok(())
    }

    /// Validate inputs and move to `Generating`.
    ///
    /// Prompts are trimmed before the emptiness check. A second call while
    /// already generating is rejected rather than queued.
    pub fn begin_generate(&mut self, prompt: &str) -> AppResult<PendingGeneration> {
        if self.state == SessionState::Generating {
            return Err(AppError::GenerationInFlight);
        }
        let prompt = prompt.trim();
        let image = match self.input_image.clone() {
            Some(image) if !prompt.is_empty() => image,
            _ => {
                return Err(AppError::MissingInput(
                    "Please provide an image and a prompt.".to_string(),
                ))
            }
        };
        self.prompt = prompt.to_string();
        self.result_image = None;
        self.last_error = None;
        self.attempt += 1;
        self.state = SessionState::Generating;
        Ok(PendingGeneration {
            token: self.attempt,
            image,
            prompt: prompt.to_string(),
        })
    }

    /// Apply the outcome of a generation attempt.
    ///
    /// Returns `false` when the attempt was superseded (a reset happened
    /// while the call was in flight); stale outcomes are dropped without
    /// touching the session.
    pub fn complete_generate(&mut self, token: u64, outcome: GenerateOutcome) -> bool {
        if self.state != SessionState::Generating || token != self.attempt {
            return false;
        }
        match outcome {
            GenerateOutcome::Image(part) => {
                self.result_image = Some(part);
                self.state = SessionState::Succeeded;
            }
            GenerateOutcome::Failed(message) => {
                self.last_error = Some(message);
                self.state = SessionState::Failed;
            }
        }
        true
    }

    /// The result image packaged for download, or `None` when the session
    /// holds no result.
    pub fn download(&self, brand: &str) -> Option<DownloadFile> {
        let part = self.result_image.as_ref()?;
        Some(DownloadFile {
            filename: media::download_filename(brand, &part.mime_type),
            mime_type: part.mime_type.clone(),
            bytes: part.bytes.clone(),
        })
    }

    /// Drop all images, prompt, and error state and return to `Idle`. Any
    /// generation still in flight is invalidated.
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.clear();
    }

    fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.input_image = None;
        self.prompt.clear();
        self.result_image = None;
        self.last_error = None;
    }
}

impl Default for EditSession {
    fn default() -> Self {
        EditSession::new()
    }
}

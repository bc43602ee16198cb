//! GenAI Photo Edit Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers, router setup, and request/response types.
//! - `session`: Per-session edit lifecycle and the in-memory registry.
//! - `genai`: Thin client for the generative image-editing endpoint.
//! - `mail`: Contact messages and the mail backend client.
//! - `media`: Image MIME and extension helpers.
//! - `utils`: Small shared helpers, including mock-server test support.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `GenAiClient`,
//! `MailClient`, and `EditSession`.
pub mod api;
pub mod session;
pub mod genai;
pub mod mail;
pub mod media;
pub mod utils;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use genai::client::GenAiClient;
pub use mail::client::MailClient;
pub use session::controller::EditSession;

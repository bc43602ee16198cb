//! Router setup and the shared application state.
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::handlers;
use crate::genai::client::GenAiClient;
use crate::mail::client::MailClient;
use crate::session::registry::SessionRegistry;

pub struct AppState {
    pub sessions: RwLock<SessionRegistry>,
    pub genai_client: GenAiClient,
    pub mail_client: MailClient,
    pub brand: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:id",
            get(handlers::session_status).delete(handlers::drop_session),
        )
        .route("/sessions/:id/image", post(handlers::upload_image))
        .route("/sessions/:id/generate", post(handlers::generate))
        .route("/sessions/:id/reset", post(handlers::reset_session))
        .route("/sessions/:id/download", get(handlers::download_result))
        .route("/contact", post(handlers::send_contact))
        .route("/contact/property", post(handlers::send_property_inquiry))
        // Base64 JSON uploads blow straight past axum's 2 MB default.
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .with_state(state)
}

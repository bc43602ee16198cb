//! Axum request handlers for the HTTP API.
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::Json;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::api::types::{
    ContactResponse, CreateSessionResponse, GenerateRequest, PropertyInquiryRequest,
    SessionSnapshot, UploadImageRequest,
};
use crate::error::{AppError, AppResult};
use crate::mail::contact::{ContactMessage, PropertyRef};
use crate::session::controller::GenerateOutcome;

pub async fn root() -> &'static str {
    "GenAI Photo Edit Proxy"
}

pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<CreateSessionResponse> {
    let session_id = state.sessions.write().await.create();
    tracing::info!("Created session {}", session_id);
    Json(CreateSessionResponse { session_id })
}

pub async fn session_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionSnapshot>> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(AppError::SessionNotFound)?;
    Ok(Json(SessionSnapshot::of(id, session, &state.brand)))
}

/// Decode and load an uploaded image into the session.
///
/// A bad base64 payload is rejected before the session is touched; failures
/// inside `load_image` leave the session cleared in `Idle`.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UploadImageRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    let bytes = BASE64
        .decode(payload.data.as_bytes())
        .map_err(|e| AppError::UnreadableFile(format!("invalid base64 data: {}", e)))?;
    let size = bytes.len();

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
    session.load_image(bytes, &payload.filename, payload.content_type.as_deref())?;
    tracing::info!("Session {}: loaded {} ({} bytes)", id, payload.filename, size);
    Ok(Json(SessionSnapshot::of(id, session, &state.brand)))
}

/// Run one generation attempt against the image service.
///
/// The session is locked only to begin and to complete the attempt; the
/// service call itself runs without any lock so other sessions, and a reset
/// on this one, stay responsive.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GenerateRequest>,
) -> AppResult<Json<SessionSnapshot>> {
    let pending = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
        session.begin_generate(&payload.prompt)?
    };

    tracing::info!("Session {}: generating (attempt {})", id, pending.token);
    let result = state
        .genai_client
        .edit_image(&pending.image, &pending.prompt)
        .await;

    let mut sessions = state.sessions.write().await;
    let session = match sessions.get_mut(&id) {
        Some(session) => session,
        None => {
            tracing::warn!("Session {} vanished while generating", id);
            return Err(AppError::SessionNotFound);
        }
    };
    let applied = match &result {
        Ok(part) => session.complete_generate(pending.token, GenerateOutcome::Image(part.clone())),
        Err(err) => {
            session.complete_generate(pending.token, GenerateOutcome::Failed(err.to_string()))
        }
    };
    if !applied {
        // A reset raced this attempt; the late result is dropped and the
        // caller sees the session as it stands now.
        tracing::info!("Session {}: discarded stale generation result", id);
        return Ok(Json(SessionSnapshot::of(id, session, &state.brand)));
    }
    result?;
    Ok(Json(SessionSnapshot::of(id, session, &state.brand)))
}

pub async fn download_result(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<(HeaderMap, Vec<u8>)> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(AppError::SessionNotFound)?;
    let file = session
        .download(&state.brand)
        .ok_or(AppError::NoResultImage)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&file.mime_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );
    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    Ok((headers, file.bytes))
}

pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionSnapshot>> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
    session.reset();
    tracing::info!("Session {}: reset", id);
    Ok(Json(SessionSnapshot::of(id, session, &state.brand)))
}

pub async fn drop_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if state.sessions.write().await.remove(&id) {
        tracing::info!("Dropped session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound)
    }
}

pub async fn send_contact(
    State(state): State<Arc<AppState>>,
    Json(message): Json<ContactMessage>,
) -> AppResult<Json<ContactResponse>> {
    message.validate()?;
    state.mail_client.send(&message).await?;
    tracing::info!("Contact message delivered for {}", message.email);
    Ok(Json(ContactResponse { ok: true }))
}

pub async fn send_property_inquiry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PropertyInquiryRequest>,
) -> AppResult<Json<ContactResponse>> {
    let property = PropertyRef {
        id: payload.property_id,
        title: payload.property_title,
        agent_email: payload.agent_email,
    };
    let message = ContactMessage::property_inquiry(
        &payload.name,
        &payload.email,
        &payload.message,
        &property,
    )?;
    state.mail_client.send(&message).await?;
    tracing::info!("Property inquiry delivered for {}", property.id);
    Ok(Json(ContactResponse { ok: true }))
}

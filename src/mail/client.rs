//! Thin HTTP client for the mail backend's send endpoint.
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::mail::contact::ContactMessage;

#[derive(Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct MailClient {
    client: Client,
    base_url: String,
}

impl MailClient {
    pub fn new(base_url: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        MailClient {
            client: Client::new(),
            base_url: base,
        }
    }

    /// Deliver a contact message through the backend's `/api/send-email`.
    ///
    /// The backend answers `{"ok": true}` on success. Transport failures,
    /// error statuses, and `ok: false` answers all come back as
    /// `MailSendFailure`; the cause is logged here, clients only see the
    /// generic notice.
    pub async fn send(&self, message: &ContactMessage) -> AppResult<()> {
        let url = format!("{}/api/send-email", self.base_url);
        tracing::info!("Sending contact message to {}", url);

        let response = self
            .client
            .post(&url)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::MailSendFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let cause = format!("status {}: {}", status, error_body);
            tracing::error!("Mail backend rejected message: {}", cause);
            return Err(AppError::MailSendFailure(cause));
        }

        let parsed: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| AppError::MailSendFailure(e.to_string()))?;
        if !parsed.ok {
            let cause = parsed
                .error
                .unwrap_or_else(|| "backend reported failure".to_string());
            tracing::error!("Mail backend reported failure: {}", cause);
            return Err(AppError::MailSendFailure(cause));
        }
        Ok(())
    }
}

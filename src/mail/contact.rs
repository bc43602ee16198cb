//! Contact messages and the fixed-layout property inquiry built from a
//! listing.
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A message for the mail backend. All four fields must be non-blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The listing fields that go into a property inquiry.
#[derive(Debug, Clone)]
pub struct PropertyRef {
    pub id: String,
    pub title: String,
    pub agent_email: Option<String>,
}

impl ContactMessage {
    /// Reject messages with any blank field before they reach the backend.
    pub fn validate(&self) -> AppResult<()> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.subject, "subject")?;
        require(&self.message, "message")?;
        Ok(())
    }

    /// Compose an inquiry about a property listing.
    ///
    /// Subject and body follow a fixed layout so the receiving inbox can be
    /// filtered on them. The visitor-supplied fields are validated first;
    /// the composed subject and body are non-blank by construction.
    pub fn property_inquiry(
        name: &str,
        email: &str,
        message: &str,
        property: &PropertyRef,
    ) -> AppResult<Self> {
        require(name, "name")?;
        require(email, "email")?;
        require(message, "message")?;
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: format!("Inquiry about {}", property.title),
            message: format!(
                "Property: {} ({})\nAgent email: {}\n\nMessage:\n{}",
                property.title,
                property.id,
                property.agent_email.as_deref().unwrap_or("unknown"),
                message
            ),
        })
    }
}

fn require(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::MissingInput(format!(
            "The {} field is required.",
            field
        )));
    }
    Ok(())
}

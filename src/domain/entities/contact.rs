use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::entities::validation::validate_not_blank;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContactInsert {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContactSubmissionResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub messages: Vec<ContactMessage>,
    pub total: i64,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewContactForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_not_blank"), email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000), custom(function = "validate_not_blank"))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SetReadRequest {
    pub read: bool,
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewContactForm> for ContactInsert {
    type Error = ValidationErrors;

    /// Validates the form and normalizes it for insertion. Stored values
    /// are trimmed; the `read` flag defaults to false at the database.
    fn try_from(form: NewContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(ContactInsert {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str) -> NewContactForm {
        NewContactForm {
            name: "  Ada Lovelace  ".into(),
            email: email.into(),
            subject: "Hello".into(),
            message: "I would like to get in touch.".into(),
        }
    }

    #[test]
    fn valid_form_is_trimmed_on_conversion() {
        let insert = ContactInsert::try_from(form("ada@example.com")).unwrap();
        assert_eq!(insert.name, "Ada Lovelace");
        assert_eq!(insert.email, "ada@example.com");
    }

    #[test]
    fn malformed_email_fails_with_email_field_error() {
        let err = ContactInsert::try_from(form("not-an-email")).unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn whitespace_only_message_is_rejected() {
        let mut bad = form("ada@example.com");
        bad.message = "   ".into();
        let err = ContactInsert::try_from(bad).unwrap_err();
        assert!(err.field_errors().contains_key("message"));
    }
}

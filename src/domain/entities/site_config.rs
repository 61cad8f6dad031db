use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{validate_not_blank, validate_optional_url};

// ───── Database Models ───────────────────────────────────────────────

/// Site-wide configuration. At most one row may ever exist; the create
/// use case enforces the bound at the write boundary.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SiteConfiguration {
    pub id: Uuid,
    pub site_title: String,
    pub site_subtitle: String,
    pub about_text: String,
    pub hero_text: String,
    pub email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Validate)]
pub struct SiteConfigurationInsert {
    #[validate(length(min = 1, max = 100))]
    pub site_title: String,

    #[validate(length(min = 1, max = 200))]
    pub site_subtitle: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub about_text: String,

    #[validate(length(min = 1))]
    pub hero_text: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub twitter_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub resume_url: Option<String>,

    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Used for both creation and in-place update: the configuration is a
/// singleton and edits replace every field.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SiteConfigurationRequest {
    #[serde(default = "default_site_title")]
    #[validate(length(min = 1, max = 100))]
    pub site_title: String,

    #[serde(default = "default_site_subtitle")]
    #[validate(length(min = 1, max = 200))]
    pub site_subtitle: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub about_text: String,

    #[serde(default = "default_hero_text")]
    #[validate(length(min = 1))]
    pub hero_text: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub twitter_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub resume_url: Option<String>,
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}
fn default_site_subtitle() -> String {
    "Full Stack Developer".to_string()
}
fn default_hero_text() -> String {
    "Welcome to my digital realm".to_string()
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<SiteConfigurationRequest> for SiteConfigurationInsert {
    type Error = ValidationErrors;

    fn try_from(value: SiteConfigurationRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let insert = SiteConfigurationInsert {
            site_title: value.site_title,
            site_subtitle: value.site_subtitle,
            about_text: value.about_text,
            hero_text: value.hero_text,
            email: value.email,
            github_url: value.github_url,
            linkedin_url: value.linkedin_url,
            twitter_url: value.twitter_url,
            resume_url: value.resume_url,
            updated_at: Utc::now(),
        };

        insert.validate()?;
        Ok(insert)
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::entities::{
    option_fields::OptionField,
    validation::{validate_not_blank, validate_not_blank_field, validate_optional_url, validate_url_field},
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_SHORT_DESCRIPTION_LENGTH: u64 = 300;
const MAX_TECHNOLOGIES_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Ai,
    Game,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Desktop,
        ProjectCategory::Ai,
        ProjectCategory::Game,
        ProjectCategory::Other,
    ];
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Desktop => "desktop",
            ProjectCategory::Ai => "ai",
            ProjectCategory::Game => "game",
            ProjectCategory::Other => "other",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(ProjectCategory::Web),
            "mobile" => Ok(ProjectCategory::Mobile),
            "desktop" => Ok(ProjectCategory::Desktop),
            "ai" => Ok(ProjectCategory::Ai),
            "game" => Ok(ProjectCategory::Game),
            "other" => Ok(ProjectCategory::Other),
            _ => Err(format!("Unknown project category: {s}")),
        }
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub category: ProjectCategory,
    /// Comma-separated list; see [`Project::technologies_list`].
    pub technologies: String,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Splits the stored technologies string into trimmed, non-empty
    /// entries, preserving order.
    pub fn technologies_list(&self) -> Vec<&str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .collect()
    }
}

#[derive(Debug, Validate)]
pub struct ProjectInsert {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(min = 1, max = MAX_SHORT_DESCRIPTION_LENGTH))]
    pub short_description: String,

    pub category: ProjectCategory,

    #[validate(length(min = 1, max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub demo_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1), custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(min = 1, max = MAX_SHORT_DESCRIPTION_LENGTH))]
    pub short_description: String,

    #[serde(default = "default_category")]
    pub category: ProjectCategory,

    #[validate(length(min = 1, max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub demo_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

fn default_category() -> ProjectCategory {
    ProjectCategory::Web
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_not_blank_field")
    )]
    pub title: OptionField<String>,

    #[validate(custom(function = "validate_not_blank_field"))]
    pub description: OptionField<String>,

    #[validate(length(min = 1, max = MAX_SHORT_DESCRIPTION_LENGTH))]
    pub short_description: OptionField<String>,

    pub category: OptionField<ProjectCategory>,

    #[validate(length(min = 1, max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies: OptionField<String>,

    #[validate(custom(function = "validate_url_field"))]
    pub image_url: OptionField<String>,

    #[validate(custom(function = "validate_url_field"))]
    pub demo_url: OptionField<String>,

    #[validate(custom(function = "validate_url_field"))]
    pub github_url: OptionField<String>,

    pub featured: OptionField<bool>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let insert = ProjectInsert {
            title: value.title,
            description: value.description,
            short_description: value.short_description,
            category: value.category,
            technologies: value.technologies,
            image_url: value.image_url,
            demo_url: value.demo_url,
            github_url: value.github_url,
            featured: value.featured,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        insert.validate()?;
        Ok(insert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_technologies(technologies: &str) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Sample".into(),
            description: "A sample project".into(),
            short_description: "Sample".into(),
            category: ProjectCategory::Web,
            technologies: technologies.into(),
            image_url: None,
            demo_url: None,
            github_url: None,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn technologies_list_trims_and_drops_empty_entries() {
        let project = project_with_technologies("React, Node.js,  Express");
        assert_eq!(project.technologies_list(), vec!["React", "Node.js", "Express"]);
    }

    #[test]
    fn technologies_list_ignores_trailing_and_double_commas() {
        let project = project_with_technologies("Rust,, actix-web, ");
        assert_eq!(project.technologies_list(), vec!["Rust", "actix-web"]);
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in ProjectCategory::ALL {
            assert_eq!(category.to_string().parse::<ProjectCategory>(), Ok(category));
        }
        assert!("gaming".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn blank_title_fails_validation() {
        let request = NewProjectRequest {
            title: "   ".into(),
            description: "desc".into(),
            short_description: "short".into(),
            category: ProjectCategory::Web,
            technologies: "Rust".into(),
            image_url: None,
            demo_url: None,
            github_url: None,
            featured: false,
        };
        assert!(ProjectInsert::try_from(request).is_err());
    }
}

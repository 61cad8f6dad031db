use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    entities::{
        option_fields::OptionField,
        validation::{
            new_validation_error, validate_not_blank, validate_not_blank_field,
            validate_optional_url, validate_slug, validate_slug_field, validate_url_field,
        },
    },
    utils::markdown::safe_markdown_to_html,
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MIN_SLUG_LENGTH: u64 = 3;
const MAX_SLUG_LENGTH: u64 = 200;
const MAX_EXCERPT_LENGTH: u64 = 500;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Validate)]
pub struct BlogPostInsert {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content_markdown: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub image_url: Option<String>,

    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlogPostListItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostListResponse {
    pub posts: Vec<BlogPostListItem>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub content_html: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostCreatedResponse {
    pub id: Uuid,
    pub slug: String,
    pub preview_url: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewBlogPostRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH), custom(function = "validate_not_blank"))]
    pub title: String,

    /// Generated from the title when omitted.
    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    pub content_markdown: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_not_blank_field")
    )]
    pub title: OptionField<String>,

    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug_field")
    )]
    pub slug: OptionField<String>,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: OptionField<String>,

    #[validate(custom(function = "validate_not_blank_field"))]
    pub content_markdown: OptionField<String>,

    #[validate(custom(function = "validate_url_field"))]
    pub image_url: OptionField<String>,

    pub published: OptionField<bool>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewBlogPostRequest> for BlogPostInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewBlogPostRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        // Generate slug if not provided
        let slug = match value.slug {
            Some(s) => s,
            None => {
                let generated = slug::slugify(&value.title);
                if generated.len() < MIN_SLUG_LENGTH as usize {
                    return Err({
                        let mut errors = ValidationErrors::new();
                        errors.add("slug", new_validation_error("slug_too_short", "Generated slug is too short; please provide a custom slug"));
                        errors
                    });
                }
                generated
            }
        };

        let insert = BlogPostInsert {
            title: value.title,
            slug,
            excerpt: value.excerpt,
            content_markdown: value.content_markdown,
            image_url: value.image_url,
            published: value.published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        insert.validate()?;
        Ok(insert)
    }
}

impl BlogPost {
    pub fn to_list_item(&self) -> BlogPostListItem {
        BlogPostListItem {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at,
        }
    }

    pub fn to_detail_response(&self) -> BlogPostDetailResponse {
        BlogPostDetailResponse {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content_markdown: self.content_markdown.clone(),
            content_html: safe_markdown_to_html(&self.content_markdown),
            image_url: self.image_url.clone(),
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post_request(title: &str, slug: Option<&str>) -> NewBlogPostRequest {
        NewBlogPostRequest {
            title: title.into(),
            slug: slug.map(Into::into),
            excerpt: "A short summary of the post".into(),
            content_markdown: "# Heading\n\nBody text.".into(),
            image_url: None,
            published: false,
        }
    }

    #[test]
    fn slug_is_generated_from_title_when_omitted() {
        let insert = BlogPostInsert::try_from(new_post_request("Shipping a Rust API", None)).unwrap();
        assert_eq!(insert.slug, "shipping-a-rust-api");
    }

    #[test]
    fn explicit_slug_wins_over_generation() {
        let insert = BlogPostInsert::try_from(new_post_request("Shipping a Rust API", Some("rust-api"))).unwrap();
        assert_eq!(insert.slug, "rust-api");
    }

    #[test]
    fn invalid_slug_is_rejected() {
        let result = BlogPostInsert::try_from(new_post_request("A post", Some("Not A Slug")));
        assert!(result.is_err());
    }
}

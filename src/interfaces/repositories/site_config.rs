use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::site_config::{SiteConfiguration, SiteConfigurationInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSiteConfigRepo,
};

/// Deliberately has no delete operation: the configuration is a
/// singleton and removal is rejected at the use-case boundary.
#[async_trait]
pub trait SiteConfigRepository: Send + Sync {
    async fn get_site_configuration(&self) -> Result<Option<SiteConfiguration>, AppError>;
    async fn site_configuration_exists(&self) -> Result<bool, AppError>;
    async fn create_site_configuration(
        &self,
        config: &SiteConfigurationInsert,
    ) -> Result<SiteConfiguration, AppError>;
    async fn update_site_configuration(
        &self,
        id: &Uuid,
        config: &SiteConfigurationInsert,
    ) -> Result<SiteConfiguration, AppError>;
}

impl SqlxSiteConfigRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSiteConfigRepo { pool }
    }
}

#[async_trait]
impl SiteConfigRepository for SqlxSiteConfigRepo {
    async fn get_site_configuration(&self) -> Result<Option<SiteConfiguration>, AppError> {
        let config = sqlx::query_as::<_, SiteConfiguration>(
            "SELECT * FROM site_configuration LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    async fn site_configuration_exists(&self) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM site_configuration)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn create_site_configuration(
        &self,
        config: &SiteConfigurationInsert,
    ) -> Result<SiteConfiguration, AppError> {
        let created = sqlx::query_as::<_, SiteConfiguration>(
            r#"
            INSERT INTO site_configuration (
                site_title, site_subtitle, about_text, hero_text, email,
                github_url, linkedin_url, twitter_url, resume_url, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&config.site_title)
        .bind(&config.site_subtitle)
        .bind(&config.about_text)
        .bind(&config.hero_text)
        .bind(&config.email)
        .bind(&config.github_url)
        .bind(&config.linkedin_url)
        .bind(&config.twitter_url)
        .bind(&config.resume_url)
        .bind(config.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_site_configuration(
        &self,
        id: &Uuid,
        config: &SiteConfigurationInsert,
    ) -> Result<SiteConfiguration, AppError> {
        let updated = sqlx::query_as::<_, SiteConfiguration>(
            r#"
            UPDATE site_configuration SET
                site_title = $1,
                site_subtitle = $2,
                about_text = $3,
                hero_text = $4,
                email = $5,
                github_url = $6,
                linkedin_url = $7,
                twitter_url = $8,
                resume_url = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&config.site_title)
        .bind(&config.site_subtitle)
        .bind(&config.about_text)
        .bind(&config.hero_text)
        .bind(&config.email)
        .bind(&config.github_url)
        .bind(&config.linkedin_url)
        .bind(&config.twitter_url)
        .bind(&config.resume_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Site configuration not found".to_string()))?;

        Ok(updated)
    }
}

use crate::{
    entities::site_config::{SiteConfiguration, SiteConfigurationInsert, SiteConfigurationRequest},
    errors::AppError,
    repositories::site_config::SiteConfigRepository,
};

pub struct SiteConfigHandler<R>
where
    R: SiteConfigRepository,
{
    pub config_repo: R,
}

impl<R> SiteConfigHandler<R>
where
    R: SiteConfigRepository,
{
    pub fn new(config_repo: R) -> Self {
        SiteConfigHandler { config_repo }
    }

    /// Returns the singleton configuration, or None before first creation
    pub async fn site_configuration(&self) -> Result<Option<SiteConfiguration>, AppError> {
        self.config_repo.get_site_configuration().await
    }

    /// Creates the singleton configuration. Fails with a validation error
    /// when a row already exists; nothing is written in that case.
    pub async fn create_site_configuration(
        &self,
        request: SiteConfigurationRequest,
    ) -> Result<SiteConfiguration, AppError> {
        let insert = SiteConfigurationInsert::try_from(request)?;

        if self.config_repo.site_configuration_exists().await? {
            return Err(AppError::validation(
                "site_configuration",
                "There can be only one site configuration instance",
            ));
        }

        self.config_repo.create_site_configuration(&insert).await
    }

    /// Replaces every field of the existing configuration in place
    pub async fn update_site_configuration(
        &self,
        request: SiteConfigurationRequest,
    ) -> Result<SiteConfiguration, AppError> {
        let insert = SiteConfigurationInsert::try_from(request)?;

        let current = self
            .config_repo
            .get_site_configuration()
            .await?
            .ok_or_else(|| AppError::NotFound("Site configuration not found".to_string()))?;

        self.config_repo
            .update_site_configuration(&current.id, &insert)
            .await
    }

    /// The singleton may never be deleted; rejected unconditionally.
    pub fn delete_site_configuration(&self) -> Result<(), AppError> {
        Err(AppError::Forbidden(
            "Site configuration cannot be deleted".to_string(),
        ))
    }
}

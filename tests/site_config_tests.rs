use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use portfolio_api::entities::site_config::{
    SiteConfiguration, SiteConfigurationInsert, SiteConfigurationRequest,
};
use portfolio_api::errors::AppError;
use portfolio_api::use_cases::site_config::SiteConfigHandler;

mock! {
    pub ConfigRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::site_config::SiteConfigRepository for ConfigRepo {
        async fn get_site_configuration(&self) -> Result<Option<SiteConfiguration>, AppError>;
        async fn site_configuration_exists(&self) -> Result<bool, AppError>;
        async fn create_site_configuration(&self, config: &SiteConfigurationInsert) -> Result<SiteConfiguration, AppError>;
        async fn update_site_configuration(&self, id: &Uuid, config: &SiteConfigurationInsert) -> Result<SiteConfiguration, AppError>;
    }
}

fn request() -> SiteConfigurationRequest {
    SiteConfigurationRequest {
        site_title: "Portfolio".into(),
        site_subtitle: "Full Stack Developer".into(),
        about_text: "About me.".into(),
        hero_text: "Welcome to my digital realm".into(),
        email: "owner@example.com".into(),
        github_url: Some("https://github.com/owner".into()),
        linkedin_url: None,
        twitter_url: None,
        resume_url: None,
    }
}

fn stored(insert: &SiteConfigurationInsert) -> SiteConfiguration {
    SiteConfiguration {
        id: Uuid::new_v4(),
        site_title: insert.site_title.clone(),
        site_subtitle: insert.site_subtitle.clone(),
        about_text: insert.about_text.clone(),
        hero_text: insert.hero_text.clone(),
        email: insert.email.clone(),
        github_url: insert.github_url.clone(),
        linkedin_url: insert.linkedin_url.clone(),
        twitter_url: insert.twitter_url.clone(),
        resume_url: insert.resume_url.clone(),
        created_at: Utc::now(),
        updated_at: insert.updated_at,
    }
}

#[tokio::test]
async fn first_creation_succeeds() {
    let mut repo = MockConfigRepo::new();
    repo.expect_site_configuration_exists().returning(|| Ok(false));
    repo.expect_create_site_configuration()
        .times(1)
        .returning(|insert| Ok(stored(insert)));

    let handler = SiteConfigHandler::new(repo);

    let created = handler.create_site_configuration(request()).await.unwrap();
    assert_eq!(created.email, "owner@example.com");
}

#[tokio::test]
async fn second_creation_fails_without_writing() {
    let mut repo = MockConfigRepo::new();
    repo.expect_site_configuration_exists().returning(|| Ok(true));
    repo.expect_create_site_configuration().times(0);

    let handler = SiteConfigHandler::new(repo);

    let err = handler.create_site_configuration(request()).await.unwrap_err();
    match err {
        AppError::ValidationError(fields) => {
            assert_eq!(fields[0].field, "site_configuration");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_email_is_rejected_before_the_existence_check() {
    let mut repo = MockConfigRepo::new();
    repo.expect_site_configuration_exists().times(0);
    repo.expect_create_site_configuration().times(0);

    let handler = SiteConfigHandler::new(repo);

    let mut bad = request();
    bad.email = "not-an-email".into();

    assert!(handler.create_site_configuration(bad).await.is_err());
}

#[tokio::test]
async fn update_replaces_the_existing_row_in_place() {
    let mut repo = MockConfigRepo::new();
    let existing_id = Uuid::new_v4();
    let existing = {
        let insert = SiteConfigurationInsert::try_from(request()).unwrap();
        SiteConfiguration {
            id: existing_id,
            ..stored(&insert)
        }
    };

    repo.expect_get_site_configuration()
        .returning(move || Ok(Some(existing.clone())));
    repo.expect_update_site_configuration()
        .withf(move |id, _| *id == existing_id)
        .times(1)
        .returning(|_, insert| Ok(stored(insert)));

    let handler = SiteConfigHandler::new(repo);

    let mut updated = request();
    updated.site_subtitle = "Backend Engineer".into();

    let config = handler.update_site_configuration(updated).await.unwrap();
    assert_eq!(config.site_subtitle, "Backend Engineer");
}

#[tokio::test]
async fn update_without_existing_row_is_not_found() {
    let mut repo = MockConfigRepo::new();
    repo.expect_get_site_configuration().returning(|| Ok(None));
    repo.expect_update_site_configuration().times(0);

    let handler = SiteConfigHandler::new(repo);

    let err = handler.update_site_configuration(request()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn deletion_is_rejected_unconditionally() {
    let handler = SiteConfigHandler::new(MockConfigRepo::new());

    let err = handler.delete_site_configuration().unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

use std::sync::Arc;

use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use portfolio_api::entities::contact::{ContactInsert, ContactMessage, NewContactForm};
use portfolio_api::entities::site_config::{SiteConfiguration, SiteConfigurationInsert};
use portfolio_api::errors::AppError;
use portfolio_api::notify::{ContactNotification, ContactNotifier};
use portfolio_api::use_cases::contact::ContactHandler;

// === Mocks ===

mock! {
    pub ContactRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::contact::ContactRepository for ContactRepo {
        async fn create_contact(&self, msg: &ContactInsert) -> Result<ContactMessage, AppError>;
        async fn get_contact_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError>;
        async fn list_contacts(&self) -> Result<Vec<ContactMessage>, AppError>;
        async fn count_contacts(&self) -> Result<i64, AppError>;
        async fn set_read(&self, id: &Uuid, read: bool) -> Result<ContactMessage, AppError>;
    }
}

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

mock! {
    pub Notifier {}

    #[async_trait::async_trait]
    impl ContactNotifier for Notifier {
        async fn send(&self, notification: &ContactNotification) -> anyhow::Result<()>;
    }
}

// === Helpers ===

fn valid_form() -> NewContactForm {
    NewContactForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        subject: "Collaboration".into(),
        message: "I have a project you might find interesting.".into(),
    }
}

fn stored_message(insert: &ContactInsert) -> ContactMessage {
    ContactMessage {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        email: insert.email.clone(),
        subject: insert.subject.clone(),
        message: insert.message.clone(),
        read: false,
        created_at: insert.created_at,
    }
}

fn site_config(email: &str) -> SiteConfiguration {
    SiteConfiguration {
        id: Uuid::new_v4(),
        site_title: "Portfolio".into(),
        site_subtitle: "Full Stack Developer".into(),
        about_text: "About me".into(),
        hero_text: "Welcome".into(),
        email: email.into(),
        github_url: None,
        linkedin_url: None,
        twitter_url: None,
        resume_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn field_names(err: AppError) -> Vec<String> {
    match err {
        AppError::ValidationError(fields) => fields.into_iter().map(|f| f.field).collect(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// === Tests ===

#[tokio::test]
async fn malformed_email_persists_nothing_and_reports_the_email_field() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact().times(0);

    let config_repo = MockConfigRepo::new();
    let notifier = Arc::new(MockNotifier::new());

    let handler = ContactHandler::new(repo, config_repo, notifier);

    let mut form = valid_form();
    form.email = "not-an-email".into();

    let err = handler.submit_contact(form).await.unwrap_err();
    assert!(field_names(err).contains(&"email".to_string()));
}

#[tokio::test]
async fn blank_subject_persists_nothing_and_reports_the_subject_field() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact().times(0);

    let handler = ContactHandler::new(repo, MockConfigRepo::new(), Arc::new(MockNotifier::new()));

    let mut form = valid_form();
    form.subject = "   ".into();

    let err = handler.submit_contact(form).await.unwrap_err();
    assert!(field_names(err).contains(&"subject".to_string()));
}

#[tokio::test]
async fn identical_submissions_create_two_distinct_records() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact()
        .withf(|insert: &ContactInsert| {
            insert.name == "Ada Lovelace" && insert.email == "ada@example.com"
        })
        .times(2)
        .returning(|insert| Ok(stored_message(insert)));

    let mut config_repo = MockConfigRepo::new();
    config_repo
        .expect_get_site_configuration()
        .returning(|| Ok(None));

    let handler = ContactHandler::new(repo, config_repo, Arc::new(MockNotifier::new()));

    let first = handler.submit_contact(valid_form()).await.unwrap();
    let second = handler.submit_contact(valid_form()).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn notification_failure_does_not_fail_the_submission() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact()
        .times(1)
        .returning(|insert| Ok(stored_message(insert)));

    let mut config_repo = MockConfigRepo::new();
    config_repo
        .expect_get_site_configuration()
        .returning(|| Ok(Some(site_config("owner@example.com"))));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send()
        .returning(|_| Err(anyhow::anyhow!("smtp relay unreachable")));

    let handler = ContactHandler::new(repo, config_repo, Arc::new(notifier));

    let result = handler.submit_contact(valid_form()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn configuration_lookup_failure_does_not_fail_the_submission() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact()
        .times(1)
        .returning(|insert| Ok(stored_message(insert)));

    let mut config_repo = MockConfigRepo::new();
    config_repo
        .expect_get_site_configuration()
        .returning(|| Err(AppError::InternalError("connection reset".into())));

    let handler = ContactHandler::new(repo, config_repo, Arc::new(MockNotifier::new()));

    let result = handler.submit_contact(valid_form()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn submission_values_are_trimmed_before_persisting() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact()
        .withf(|insert: &ContactInsert| insert.name == "Ada Lovelace")
        .times(1)
        .returning(|insert| Ok(stored_message(insert)));

    let mut config_repo = MockConfigRepo::new();
    config_repo
        .expect_get_site_configuration()
        .returning(|| Ok(None));

    let handler = ContactHandler::new(repo, config_repo, Arc::new(MockNotifier::new()));

    let mut form = valid_form();
    form.name = "  Ada Lovelace  ".into();

    assert!(handler.submit_contact(form).await.is_ok());
}

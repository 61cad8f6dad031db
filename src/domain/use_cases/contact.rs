use std::sync::Arc;

use crate::{
    entities::contact::{
        ContactInsert, ContactListResponse, ContactMessage, ContactSubmissionResponse,
        NewContactForm,
    },
    errors::AppError,
    notify::{ContactNotification, ContactNotifier},
    repositories::{contact::ContactRepository, site_config::SiteConfigRepository},
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R, C, N>
where
    R: ContactRepository,
    C: SiteConfigRepository,
    N: ContactNotifier,
{
    pub contact_repo: R,
    pub config_repo: C,
    pub notifier: Arc<N>,
}

impl<R, C, N> ContactHandler<R, C, N>
where
    R: ContactRepository,
    C: SiteConfigRepository,
    N: ContactNotifier,
{
    pub fn new(contact_repo: R, config_repo: C, notifier: Arc<N>) -> Self {
        ContactHandler {
            contact_repo,
            config_repo,
            notifier,
        }
    }

    /// Validates and records one contact submission. Every valid call
    /// inserts a new row, duplicates included. The notification is
    /// best-effort: its failure never surfaces to the caller.
    pub async fn submit_contact(
        &self,
        form: NewContactForm,
    ) -> Result<ContactSubmissionResponse, AppError> {
        let insert = ContactInsert::try_from(form)?;

        let message = self.contact_repo.create_contact(&insert).await?;

        self.dispatch_notification(&insert).await;

        Ok(ContactSubmissionResponse {
            id: message.id,
            message: "Your message has been sent successfully!".to_string(),
        })
    }

    /// Resolves the recipient from the site configuration and fires the
    /// notification without awaiting its outcome. Missing configuration,
    /// lookup errors, and send errors are all swallowed.
    async fn dispatch_notification(&self, submission: &ContactInsert) {
        let recipient = match self.config_repo.get_site_configuration().await {
            Ok(Some(config)) => config.email,
            Ok(None) => return,
            Err(err) => {
                tracing::debug!("skipping contact notification: {err}");
                return;
            }
        };

        let notification = ContactNotification {
            to: recipient,
            subject: format!("Portfolio Contact: {}", submission.subject),
            body: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                submission.name, submission.email, submission.message
            ),
        };

        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.send(&notification).await {
                tracing::debug!("contact notification failed: {err:#}");
            }
        });
    }

    /// Lists all contact messages, newest first
    pub async fn list_messages(&self) -> Result<ContactListResponse, AppError> {
        let messages = self.contact_repo.list_contacts().await?;
        let total = self.contact_repo.count_contacts().await?;

        Ok(ContactListResponse { messages, total })
    }

    /// Retrieves a contact message by its ID
    pub async fn get_message(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id)?;
        self.contact_repo.get_contact_by_id(&valid_id).await
    }

    /// Sets or clears the read flag. The rest of a contact message is
    /// immutable after creation.
    pub async fn set_read(&self, id: &str, read: bool) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id)?;
        self.contact_repo.set_read(&valid_id, read).await
    }
}

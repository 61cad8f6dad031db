use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use url::Url;

use crate::settings::AppConfig;

use super::{ContactNotification, ContactNotifier};

/// Forwards contact notifications to an HTTP mail endpoint as a JSON
/// POST. With no endpoint configured the notifier is a no-op.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    endpoint: Option<Url>,
    from: String,
}

impl WebhookNotifier {
    pub fn new(config: &AppConfig) -> Self {
        let endpoint = config.contact_notify_url.as_deref().and_then(|raw| {
            Url::parse(raw)
                .map_err(|e| tracing::warn!("Ignoring invalid contact_notify_url: {e}"))
                .ok()
        });

        if endpoint.is_none() {
            tracing::info!("Contact notifications disabled (no contact_notify_url configured)");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        WebhookNotifier {
            client,
            endpoint,
            from: config.notify_from.clone(),
        }
    }
}

#[async_trait]
impl ContactNotifier for WebhookNotifier {
    async fn send(&self, notification: &ContactNotification) -> anyhow::Result<()> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(());
        };

        self.client
            .post(endpoint.clone())
            .json(&serde_json::json!({
                "to": notification.to,
                "from": self.from,
                "subject": notification.subject,
                "text": notification.body,
            }))
            .send()
            .await
            .context("notification request failed")?
            .error_for_status()
            .context("notification endpoint returned an error status")?;

        Ok(())
    }
}

use async_trait::async_trait;
use serde::Serialize;

pub mod webhook;

pub use webhook::WebhookNotifier;

/// Payload of the best-effort contact notification.
#[derive(Debug, Clone, Serialize)]
pub struct ContactNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery transport for contact notifications. Implementations are
/// best-effort: callers swallow every error.
#[async_trait]
pub trait ContactNotifier: Send + Sync + 'static {
    async fn send(&self, notification: &ContactNotification) -> anyhow::Result<()>;
}

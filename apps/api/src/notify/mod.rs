//! Notifications: observes newly stored records and publishes a summary per document.

pub mod payload;

use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde_json::json;
use tokio::sync::{mpsc, OnceCell};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::errors::AppError;
use crate::notify::payload::render_notification;
use crate::store::StoredItem;

/// Publish/subscribe backend.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), AppError>;
}

/// Publishes `{"subject", "message"}` JSON envelopes on a Redis channel.
pub struct RedisNotifier {
    client: redis::Client,
    channel: String,
    /// Opened on first publish; left unset after a failed attempt so the next one retries.
    conn: OnceCell<MultiplexedConnection>,
}

impl RedisNotifier {
    pub fn new(client: redis::Client, channel: String) -> Self {
        Self {
            client,
            channel,
            conn: OnceCell::new(),
        }
    }

    async fn connection(&self) -> Result<MultiplexedConnection, AppError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                info!("Opening Redis connection for channel '{}'", self.channel);
                self.client.get_multiplexed_async_connection().await
            })
            .await
            .map_err(|e| AppError::Notification(format!("Redis connection failed: {e}")))?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl Notifier for RedisNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), AppError> {
        let envelope = json!({ "subject": subject, "message": message }).to_string();

        let mut conn = self.connection().await?;

        let receivers: i64 = conn
            .publish(&self.channel, envelope)
            .await
            .map_err(|e| AppError::Notification(format!("Redis publish failed: {e}")))?;

        info!(
            "Published to '{}' ({} subscribers): {}",
            self.channel, receivers, subject
        );
        Ok(())
    }
}

/// Builds and publishes the notification for one stored item.
pub async fn notify_stored(notifier: &dyn Notifier, item: &StoredItem) -> Result<(), AppError> {
    info!("Processing new CV data for document: {}", item.document_key);
    let (subject, message) = render_notification(item)?;
    notifier.publish(&subject, &message).await?;
    info!("Notification sent for document: {}", item.document_key);
    Ok(())
}

/// Consumes the change feed until every sender is dropped.
/// A failed publish is logged and does not stop the worker.
pub fn spawn_notification_worker(
    mut changes: mpsc::Receiver<StoredItem>,
    notifier: Arc<dyn Notifier>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(item) = changes.recv().await {
            if let Err(e) = notify_stored(notifier.as_ref(), &item).await {
                error!(
                    "Notification for document {} failed: {e}",
                    item.document_key
                );
            }
        }
        info!("Change feed closed, notification worker exiting");
    })
}

use anyhow::Result;
use lambda_runtime::tracing;

mod config;
mod notification;
mod notifier;
mod queue;

pub use config::{Config, DLQ_URL_VAR};
pub use notification::{ALERT_SUBJECT, AlertNotification, ERROR_SUBJECT, ErrorNotification};
pub use notifier::{Notifier, SnsNotifier};
pub use queue::{DeadLetterQueue, DlqMessage, SqsQueue};

pub const SNS_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:339713138979:notificacoes-frameSnap";
pub const MAX_MESSAGES: i32 = 10;
pub const WAIT_TIME_SECONDS: i32 = 20;

/// Drains one batch from the DLQ into alert notifications.
///
/// Holds no state between invocations, so a single instance can serve every
/// invocation of a warm Lambda.
pub struct Monitor<Q, N> {
    queue: Q,
    notifier: N,
    dlq_url: String,
    topic_arn: String,
}

impl<Q: DeadLetterQueue, N: Notifier> Monitor<Q, N> {
    pub fn new(queue: Q, notifier: N, config: Config) -> Monitor<Q, N> {
        Monitor {
            queue,
            notifier,
            dlq_url: config.dlq_url,
            topic_arn: SNS_TOPIC_ARN.to_string(),
        }
    }

    pub fn dlq_url(&self) -> &str {
        &self.dlq_url
    }

    /// Any failure is reported to the topic and then returned untouched.
    pub async fn run(&self) -> Result<()> {
        match self.process().await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.notify_error(&err).await?;
                tracing::error!("Failed processing DLQ: {}", err);
                Err(err)
            }
        }
    }

    async fn process(&self) -> Result<()> {
        let messages = self
            .queue
            .receive(&self.dlq_url, MAX_MESSAGES, WAIT_TIME_SECONDS)
            .await?;

        if messages.is_empty() {
            tracing::info!("No messages found in DLQ");
            return Ok(());
        }

        tracing::info!("Number of messages found in DLQ: {}", messages.len());
        for message in &messages {
            self.notify_alert(message).await?;
            tracing::info!("Notification sent for message {}", message.message_id);
        }

        Ok(())
    }

    async fn notify_alert(&self, message: &DlqMessage) -> Result<()> {
        let alert = AlertNotification::new(message, &self.dlq_url);
        let payload = serde_json::to_string(&alert)?;

        self.notifier
            .publish(&self.topic_arn, ALERT_SUBJECT, &payload)
            .await
    }

    async fn notify_error(&self, err: &anyhow::Error) -> Result<()> {
        let notification = ErrorNotification::new(err, &self.dlq_url);
        let payload = serde_json::to_string(&notification)?;

        self.notifier
            .publish(&self.topic_arn, ERROR_SUBJECT, &payload)
            .await
    }
}

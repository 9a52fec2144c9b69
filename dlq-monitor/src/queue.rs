use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_sqs as sqs;

/// A message sitting in the dead-letter queue. The body is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlqMessage {
    pub message_id: String,
    pub body: String,
}

impl DlqMessage {
    pub fn new(message_id: impl Into<String>, body: impl Into<String>) -> DlqMessage {
        DlqMessage {
            message_id: message_id.into(),
            body: body.into(),
        }
    }
}

impl From<sqs::types::Message> for DlqMessage {
    fn from(message: sqs::types::Message) -> DlqMessage {
        DlqMessage {
            message_id: message.message_id.unwrap_or_default(),
            body: message.body.unwrap_or_default(),
        }
    }
}

#[async_trait]
pub trait DeadLetterQueue: Send + Sync {
    /// Long-polls `queue_url` for at most `max_messages` messages.
    async fn receive(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<DlqMessage>>;
}

pub struct SqsQueue {
    sqs_client: sqs::Client,
}

impl SqsQueue {
    pub fn new(sqs_client: sqs::Client) -> SqsQueue {
        SqsQueue { sqs_client }
    }
}

#[async_trait]
impl DeadLetterQueue for SqsQueue {
    async fn receive(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<DlqMessage>> {
        let out = self
            .sqs_client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_time_seconds)
            .send()
            .await
            .map_err(|e| e.into_service_error())?;

        Ok(out
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(DlqMessage::from)
            .collect())
    }
}

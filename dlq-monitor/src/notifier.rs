use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_sns as sns;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic_arn: &str, subject: &str, message: &str) -> Result<()>;
}

pub struct SnsNotifier {
    sns_client: sns::Client,
}

impl SnsNotifier {
    pub fn new(sns_client: sns::Client) -> SnsNotifier {
        SnsNotifier { sns_client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic_arn: &str, subject: &str, message: &str) -> Result<()> {
        self.sns_client
            .publish()
            .topic_arn(topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| e.into_service_error())?;

        Ok(())
    }
}

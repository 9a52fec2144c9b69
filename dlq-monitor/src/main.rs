use std::sync::Arc;

use anyhow::Result;
use aws_config::{BehaviorVersion, SdkConfig, retry::RetryConfig};
use aws_sdk_sns as sns;
use aws_sdk_sqs as sqs;
use dlq_monitor::{Config, Monitor, SnsNotifier, SqsQueue};
use lambda_runtime::tracing;
use serde_json::Value;

type DlqMonitor = Monitor<SqsQueue, SnsNotifier>;

pub async fn get_aws_config() -> SdkConfig {
    let version = BehaviorVersion::v2025_01_17();
    let retry_config = RetryConfig::disabled();

    aws_config::defaults(version)
        .retry_config(retry_config)
        .load()
        .await
}

// The trigger payload is never read; scheduled and SQS triggers both land here.
async fn handle(monitor: &DlqMonitor, request: lambda_runtime::LambdaEvent<Value>) -> Result<()> {
    tracing::info!(
        "Polling DLQ {} for request {}",
        monitor.dlq_url(),
        request.context.request_id
    );

    monitor.run().await
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    lambda_runtime::tracing::init_default_subscriber();

    let config = Config::from_env()?;
    let aws_config = get_aws_config().await;
    let queue = SqsQueue::new(sqs::Client::new(&aws_config));
    let notifier = SnsNotifier::new(sns::Client::new(&aws_config));
    let monitor = Arc::new(Monitor::new(queue, notifier, config));

    let service_fn = lambda_runtime::service_fn(move |request| {
        let monitor = Arc::clone(&monitor);
        async move { handle(&monitor, request).await }
    });
    lambda_runtime::run(service_fn).await
}

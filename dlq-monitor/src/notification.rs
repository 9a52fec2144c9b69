//! Payloads published to the notification topic.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::queue::DlqMessage;

pub const ALERT_SUBJECT: &str = "🚨 Alerta: Mensagens na DLQ - FrameSnap";
pub const ERROR_SUBJECT: &str = "❌ Erro: Lambda DLQ Monitor - FrameSnap";

const ALERT_REASON: &str = "Mensagem encontrada na DLQ";
const ERROR_REASON: &str = "Erro ao processar DLQ";

/// Sent once per message found in the queue.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlertNotification<'a> {
    pub message_id: &'a str,
    pub body: &'a str,
    pub timestamp: DateTime<Utc>,
    pub error: &'static str,
    pub queue_url: &'a str,
}

impl<'a> AlertNotification<'a> {
    pub fn new(message: &'a DlqMessage, queue_url: &'a str) -> AlertNotification<'a> {
        AlertNotification {
            message_id: &message.message_id,
            body: &message.body,
            timestamp: Utc::now(),
            error: ALERT_REASON,
            queue_url,
        }
    }
}

/// Sent once when an invocation fails.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorNotification<'a> {
    pub error: &'static str,
    pub message: String,
    pub stack_trace: String,
    pub timestamp: DateTime<Utc>,
    pub queue_url: &'a str,
}

impl<'a> ErrorNotification<'a> {
    pub fn new(err: &anyhow::Error, queue_url: &'a str) -> ErrorNotification<'a> {
        ErrorNotification {
            error: ERROR_REASON,
            message: format!("{:#}", err),
            // Debug output carries the cause chain, plus the backtrace when captured
            stack_trace: format!("{:?}", err),
            timestamp: Utc::now(),
            queue_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use serde_json::Value;

    #[test]
    fn alert_uses_pascal_case_fields() {
        let message = DlqMessage::new("m1", "{\"order\":42}");
        let alert = AlertNotification::new(&message, "https://queue");

        let value: Value = serde_json::to_value(&alert).unwrap();

        assert_eq!(value["MessageId"], "m1");
        assert_eq!(value["Body"], "{\"order\":42}");
        assert_eq!(value["Error"], "Mensagem encontrada na DLQ");
        assert_eq!(value["QueueUrl"], "https://queue");
        assert!(value["Timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn error_message_keeps_cause_chain() {
        let err = Err::<(), _>(anyhow::anyhow!("timed out"))
            .context("receive failed")
            .unwrap_err();

        let notification = ErrorNotification::new(&err, "https://queue");
        let value: Value = serde_json::to_value(&notification).unwrap();

        assert_eq!(value["Error"], "Erro ao processar DLQ");
        assert_eq!(value["Message"], "receive failed: timed out");
        assert!(value["StackTrace"].as_str().unwrap().contains("timed out"));
        assert_eq!(value["QueueUrl"], "https://queue");
    }
}

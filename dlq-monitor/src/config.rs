use anyhow::{Context, Result};

pub const DLQ_URL_VAR: &str = "DLQ_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub dlq_url: String,
}

impl Config {
    pub fn new(dlq_url: Option<String>) -> Result<Config> {
        let dlq_url = dlq_url
            .filter(|url| !url.trim().is_empty())
            .with_context(|| format!("{} must be set", DLQ_URL_VAR))?;

        Ok(Config { dlq_url })
    }

    pub fn from_env() -> Result<Config> {
        Self::new(std::env::var(DLQ_URL_VAR).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_rejected() {
        let err = Config::new(None).unwrap_err();
        assert_eq!(err.to_string(), "DLQ_URL must be set");
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(Config::new(Some("  ".into())).is_err());
    }

    #[test]
    fn url_is_kept_verbatim() {
        let config = Config::new(Some("https://sqs.us-east-1.amazonaws.com/1/dlq".into())).unwrap();
        assert_eq!(config.dlq_url, "https://sqs.us-east-1.amazonaws.com/1/dlq");
    }
}

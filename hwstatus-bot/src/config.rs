//! Bot configuration
//!
//! Defines the credentials, endpoints and timing parameters of the bot.
//! Built once at startup and handed to the poll loop.

use hwstatus_core::{Error, Result};
use std::time::Duration;

/// Default homework statuses endpoint
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Lower bound used for every status request unless overridden
pub const DEFAULT_FROM_DATE: i64 = 1;

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint URL
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between the end of one poll cycle and the start of the next
    pub poll_interval: Duration,

    /// Upper bound on a single HTTP request
    pub request_timeout: Duration,

    /// `from_date` sent with every status request
    pub from_date: i64,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: Duration::from_secs(600), // 10 minutes
            request_timeout: Duration::from_secs(30),
            from_date: DEFAULT_FROM_DATE,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - FROM_DATE (optional, unix timestamp, default: 1)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    ///
    /// Blank values count as missing. All missing required variables are
    /// reported together.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| value(*key).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let required = |key: &str| value(key).unwrap_or_default();
        let mut config = Self::new(
            required("PRACTICUM_TOKEN"),
            required("TELEGRAM_TOKEN"),
            required("TELEGRAM_CHAT_ID"),
        );

        if let Some(endpoint) = value("PRACTICUM_ENDPOINT") {
            config.practicum_endpoint = endpoint;
        }

        if let Some(api_url) = value("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        if let Some(poll_interval) = value("POLL_INTERVAL")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
        {
            config.poll_interval = poll_interval;
        }

        if let Some(request_timeout) = value("REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
        {
            config.request_timeout = request_timeout;
        }

        if let Some(from_date) = value("FROM_DATE").and_then(|s| s.parse::<i64>().ok()) {
            config.from_date = from_date;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.practicum_token.trim().is_empty() {
            return Err(Error::Config("practicum_token cannot be empty".into()));
        }

        if self.telegram_token.trim().is_empty() {
            return Err(Error::Config("telegram_token cannot be empty".into()));
        }

        if self.telegram_chat_id.trim().is_empty() {
            return Err(Error::Config("telegram_chat_id cannot be empty".into()));
        }

        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::Config(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.poll_interval.is_zero() {
            return Err(Error::Config("poll_interval must be greater than 0".into()));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config(
                "request_timeout must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .field("from_date", &self.from_date)
            .finish()
    }
}

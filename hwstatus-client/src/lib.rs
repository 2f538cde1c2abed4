//! Homework status HTTP clients
//!
//! Thin, typed HTTP clients for the two remote services the notifier talks to:
//! - [`PracticumClient`]: the homework status API (one timestamped GET)
//! - [`TelegramClient`]: the Telegram Bot API (`sendMessage`)
//!
//! Both perform exactly one request per call and never retry; retrying is the
//! poll loop's business. Failures are classified into
//! [`hwstatus_core::Error`] variants.
//!
//! # Example
//!
//! ```no_run
//! use hwstatus_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!     );
//!     let raw = practicum.homework_statuses(1).await?;
//!
//!     let telegram = TelegramClient::new("https://api.telegram.org", "bot-token", "12345");
//!     telegram.send_message(&format!("Got: {}", raw)).await?;
//!     Ok(())
//! }
//! ```

mod practicum;
mod telegram;

pub use hwstatus_core::error::{Error, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client whose requests give up after `timeout`
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Describes a reqwest failure without echoing the request URL
///
/// The Bot API carries its token in the path, so URLs never reach logs.
pub(crate) fn describe(error: reqwest::Error) -> String {
    let prefix = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "request error"
    };
    format!("{}: {}", prefix, error.without_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_builds() {
        assert!(http_client(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_describe_connection_refused() {
        // Port 9 (discard) is almost never listening locally
        let err = Client::new()
            .get("http://127.0.0.1:9/secret-path")
            .send()
            .await
            .unwrap_err();

        let text = describe(err);
        assert!(!text.contains("secret-path"), "url leaked: {}", text);
    }
}

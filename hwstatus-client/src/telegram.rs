//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the notifier is fire-and-forget, the call's
//! success or failure is the whole delivery confirmation.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, describe};

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token, part of every request path
    token: String,
    /// Destination chat
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Bot API client with default HTTP settings
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self::with_client(api_url, token, chat_id, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send `text` to the configured chat
    ///
    /// # Errors
    /// - [`Error::Unauthorized`] when the Bot API rejects the token
    /// - [`Error::Delivery`] for every other failure, transport included
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        debug!("sendMessage to chat {}", self.chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| Error::Delivery(describe(e)))?;

        let status = response.status();
        let body = response
            .json::<BotApiResponse>()
            .await
            .unwrap_or_default();

        if status.is_success() && body.ok {
            return Ok(());
        }

        let description = body
            .description
            .unwrap_or_else(|| format!("status {}", status.as_u16()));

        if is_unauthorized(status, body.error_code) {
            return Err(Error::Unauthorized(description));
        }

        Err(Error::Delivery(description))
    }
}

fn is_unauthorized(status: StatusCode, error_code: Option<u16>) -> bool {
    let auth_codes = [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN];
    auth_codes.contains(&status)
        || error_code.is_some_and(|code| auth_codes.iter().any(|c| c.as_u16() == code))
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope of every Bot API answer
#[derive(Debug, Default, Deserialize)]
struct BotApiResponse {
    #[serde(default)]
    ok: bool,
    error_code: Option<u16>,
    description: Option<String>,
}

//! Homework status API client

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result, describe};

/// HTTP client for the homework status API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client with default HTTP settings
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// Use this to bound request time, see [`crate::http_client`].
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Fetch homework statuses changed since `from_date` (unix seconds)
    ///
    /// Returns the parsed JSON body; its shape is checked by
    /// [`hwstatus_core::validate`].
    ///
    /// # Errors
    /// - [`Error::Transport`] when no response arrives
    /// - [`Error::RemoteUnavailable`] for any status other than 200
    /// - [`Error::MalformedResponse`] when the body is not JSON
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("GET {} from_date={}", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| Error::Transport(describe(e)))?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::remote_unavailable(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(describe(e)))?;

        serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }
}

//! Homework statuses repository
//!
//! Fetches the raw status API answer for the poll loop.

use async_trait::async_trait;
use hwstatus_client::PracticumClient;
use hwstatus_core::Result;
use serde_json::Value;

/// Source of homework status answers
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    /// Performs one request for statuses changed since `since` (unix seconds)
    ///
    /// Returns the parsed body without checking its shape. Never retries.
    async fn fetch(&self, since: i64) -> Result<Value>;
}

#[async_trait]
impl StatusFetcher for PracticumClient {
    async fn fetch(&self, since: i64) -> Result<Value> {
        self.homework_statuses(since).await
    }
}

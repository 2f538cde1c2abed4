//! Messages repository
//!
//! Delivers notification text to the user.

use async_trait::async_trait;
use hwstatus_client::TelegramClient;
use hwstatus_core::Result;

/// Messaging channel the poll loop reports through
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` once
    ///
    /// Fails with `Unauthorized` when the channel rejects the credentials and
    /// with `Delivery` otherwise.
    async fn notify(&self, message: &str) -> Result<()>;
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, message: &str) -> Result<()> {
        self.send_message(message).await
    }
}

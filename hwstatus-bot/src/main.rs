//! Homework status bot
//!
//! A long-running worker that watches the review status of a homework and
//! reports every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and settings from the environment (or `.env`)
//! - Repositories: the status API and the messaging channel behind traits
//! - Scheduler: the poll loop and the state it carries between cycles
//!
//! Missing credentials abort startup before any request is made. After that
//! the loop runs until the process is terminated.

mod config;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{Notifier, StatusFetcher};
use crate::scheduler::HomeworkPoller;
use hwstatus_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwstatus_bot=info,hwstatus_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework status bot");

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    // Load configuration
    let config = load_config()?;
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.practicum_endpoint, config.telegram_chat_id
    );

    let http = hwstatus_client::http_client(config.request_timeout)
        .context("Failed to initialize HTTP client")?;

    let fetcher: Arc<dyn StatusFetcher> = Arc::new(PracticumClient::with_client(
        &config.practicum_endpoint,
        &config.practicum_token,
        http.clone(),
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramClient::with_client(
        &config.telegram_api_url,
        &config.telegram_token,
        &config.telegram_chat_id,
        http,
    ));

    info!("Clients initialized");

    let mut poller = HomeworkPoller::new(config, fetcher, notifier);
    poller.announce_start().await;
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration; any failure here is fatal
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

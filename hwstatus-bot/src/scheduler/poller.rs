//! Homework poller
//!
//! Polls the status API on a fixed interval and notifies the user when the
//! most recent homework changes status. Each cycle runs to completion before
//! the next one starts:
//!
//! fetch → validate → compare → interpret → notify → sleep
//!
//! Every error is handled at the cycle boundary; the loop itself never stops.

use chrono::Local;
use hwstatus_core::{Error, Homeworks, PollState, Result, interpret, validate};
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::repository::{Notifier, StatusFetcher};

/// Result of a cycle that finished without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API returned no homeworks
    NoUpdate,
    /// Latest homework matches what was last notified
    Unchanged,
    /// A status change was delivered
    Notified,
}

/// Poll loop that watches one homework and reports status changes
pub struct HomeworkPoller {
    config: Config,
    fetcher: Arc<dyn StatusFetcher>,
    notifier: Arc<dyn Notifier>,
    state: PollState,
}

impl HomeworkPoller {
    /// Creates a new poller with an empty state
    pub fn new(
        config: Config,
        fetcher: Arc<dyn StatusFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            fetcher,
            notifier,
            state: PollState::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Tells the user the bot is up
    ///
    /// A failed send is logged and otherwise ignored.
    pub async fn announce_start(&self) {
        let message = format!("Bot started: {}", Local::now().format("%d-%m-%Y %H:%M"));

        match self.notifier.notify(&message).await {
            Ok(()) => info!("Startup message sent"),
            Err(e) => warn!("Failed to send startup message: {}", e),
        }
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated.
    pub async fn run(&mut self) {
        info!(
            "Starting homework poller (interval: {:?}, from_date: {})",
            self.config.poll_interval, self.config.from_date
        );

        loop {
            self.run_cycle().await;

            debug!("Sleeping for {:?}", self.config.poll_interval);
            time::sleep(self.config.poll_interval).await;
        }
    }

    /// Performs one cycle and handles its outcome
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(outcome) => {
                match outcome {
                    CycleOutcome::NoUpdate => info!("No homework updates"),
                    CycleOutcome::Unchanged => info!("Homework status unchanged"),
                    CycleOutcome::Notified => {}
                }
                self.state.clear_error();
            }
            Err(e) => self.handle_error(e).await,
        }
    }

    /// Performs a single poll cycle
    async fn poll_once(&mut self) -> Result<CycleOutcome> {
        let raw = self.fetcher.fetch(self.config.from_date).await?;

        let response = match validate(&raw)? {
            Homeworks::Empty { poll_timestamp } => {
                debug!("Empty homework list (current_date: {:?})", poll_timestamp);
                return Ok(CycleOutcome::NoUpdate);
            }
            Homeworks::Items(response) => response,
        };

        let item = response.latest();
        debug!(
            "Latest homework {:?} is {} (polled at {:?})",
            item.name(),
            item.raw_status(),
            response.polled_at()
        );

        if !self.state.should_notify(item) {
            return Ok(CycleOutcome::Unchanged);
        }

        let message = interpret(item)?;
        self.notifier.notify(&message).await?;
        self.state.commit(item);

        info!(
            "Notified status change: {:?} is now {}",
            item.name(),
            item.status()
        );

        Ok(CycleOutcome::Notified)
    }

    /// Logs a cycle error and reports it to the user once per distinct text
    async fn handle_error(&mut self, err: Error) {
        match &err {
            Error::Unauthorized(_) => {
                error!(kind = %err.kind(), "Messaging channel rejected the bot token: {}", err);
                return;
            }
            e if e.is_delivery() => {
                warn!(kind = %e.kind(), "Notification not delivered, will retry next cycle: {}", e);
                return;
            }
            _ => {}
        }

        let message = format!("Program failure: {}", err);
        match &err {
            Error::RemoteUnavailable { body, .. } => {
                error!(kind = %err.kind(), body = %body, "{}", message)
            }
            _ => error!(kind = %err.kind(), "{}", message),
        }

        if !self.state.should_report_error(&message) {
            debug!("Failure already reported, not sending again");
            return;
        }

        match self.notifier.notify(&message).await {
            Ok(()) => self.state.record_error(message),
            Err(e) => warn!("Failed to report failure: {}", e),
        }
    }
}

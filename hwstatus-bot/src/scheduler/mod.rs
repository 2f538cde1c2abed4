//! Scheduler layer for the bot
//!
//! Drives the poll cycle on a fixed interval and owns the state carried
//! between cycles.

pub mod poller;

pub use poller::HomeworkPoller;

//! Repository layer
//!
//! The two narrow seams between the poll loop and the outside world:
//! fetching homework statuses and delivering messages. Both are trait-based
//! so the loop can be driven by in-memory fakes in tests.

mod messages;
mod statuses;

pub use messages::Notifier;
pub use statuses::StatusFetcher;

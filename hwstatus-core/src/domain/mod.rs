//! Core domain types
//!
//! The homework being tracked and the state the poll loop keeps between
//! cycles. Nothing here performs I/O.

pub mod homework;
pub mod state;

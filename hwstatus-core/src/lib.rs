//! Homework status core
//!
//! Core types and decision logic for the homework review notifier.
//!
//! This crate contains:
//! - Domain types: the tracked homework, its review status, the poll state
//! - DTOs: the status API wire format and its validation
//! - Errors: the single error enumeration shared by every stage

pub mod domain;
pub mod dto;
pub mod error;

pub use domain::homework::{ReviewStatus, TrackedItem, interpret};
pub use domain::state::PollState;
pub use dto::homework::{ApiResponse, Homeworks, validate};
pub use error::{Error, ErrorKind, Result};

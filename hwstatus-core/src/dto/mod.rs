//! Data Transfer Objects
//!
//! Wire formats exchanged with the homework status API, and their validation
//! into domain types.

pub mod homework;

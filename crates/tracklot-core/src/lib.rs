//! Tracklot Core — shared analytics domain types.
//!
//! This crate defines the event envelope, the stored record, the error
//! taxonomy, and the traits the client and server crates depend on. It
//! contains no infrastructure code.

pub mod clock;
pub mod envelope;
pub mod error;
pub mod store;

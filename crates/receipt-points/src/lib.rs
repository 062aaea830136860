//! Receipt validation and points scoring.
//!
//! The [`receipts`] module holds the receipt model, the validator, and the
//! seven-rule scorer, together with the service and router that expose them
//! over HTTP. Configuration, telemetry, and the top-level error type are shared
//! with the `receipt-points-api` binary.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;

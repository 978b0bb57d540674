//! Faucet integration.
//!
//! One JSON POST per request, success only on HTTP 200. Throttling is left
//! to the scheduler's spacing; nothing here retries.

pub mod client;

pub use client::{FaucetApi, FaucetClient, FaucetError, FaucetOutcome};

//! Testnet auto-sender library.
//!
//! Periodically asks a faucet to fund one account and periodically sends a
//! fixed transfer from that account.

pub mod blockchain;
pub mod config;
pub mod faucet;
pub mod lifecycle;
pub mod observability;
pub mod scheduler;

pub use config::AppConfig;
pub use lifecycle::Shutdown;
pub use scheduler::AutoSender;

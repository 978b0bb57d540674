//! Scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! every poll interval:
//!     timer.rs (which timers elapsed?)
//!     → TransactionSender::send   (send timer, 10s)
//!     → FaucetApi::request_funds  (faucet timer, 310s)
//!     → runner.rs logs outcomes, sleeps, repeats
//! ```
//!
//! # Design Decisions
//! - One loop, one clock reading per iteration
//! - Both timers are independent; both may fire in one iteration
//! - Actions return outcomes, never errors, so nothing can end the loop

pub mod runner;
pub mod timer;

pub use runner::{AutoSender, TickReport};
pub use timer::{Due, TimerState};

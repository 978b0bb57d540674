//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Check key vs sender → Connect RPC → Verify connectivity → Build loop
//!
//! Shutdown (shutdown.rs):
//!     Signal received → loop finishes its iteration → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast on configuration problems
//! - An unreachable node ends the process quietly (exit 0), before the loop
//! - Shutdown never interrupts an RPC or faucet call in flight

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{prepare, StartupError};

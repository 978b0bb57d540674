//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, dotenv)
//!     → process environment / CLI flags → cli.rs (clap)
//! settings file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, typed parsing)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Required values (RPC URL, addresses, amount) have no defaults
//! - Tunables all have defaults to allow a missing or minimal settings file
//! - The private key never passes through this module

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, FaucetConfig, NetworkConfig, ScheduleConfig, Settings};

//! Configuration schema definitions.
//!
//! [`Settings`] holds the optional tunables read from a TOML file; every
//! field has a default so an absent file or a partial one is fine.
//! [`AppConfig`] is the validated, typed result the rest of the crate uses.

use std::time::Duration;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use url::Url;

/// Faucet endpoint of the OneFinity testnet.
pub const DEFAULT_FAUCET_URL: &str = "https://testnet-api.onefinity.network/faucet";

/// Chain ID of the OneFinity testnet.
pub const DEFAULT_CHAIN_ID: u64 = 999_987;

/// Root of the tunables file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Transaction parameters and RPC behaviour.
    pub network: NetworkConfig,

    /// Faucet endpoint settings.
    pub faucet: FaucetConfig,

    /// Loop timing.
    pub schedule: ScheduleConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Network and transaction parameters.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Chain ID used for EIP-155 signing.
    pub chain_id: u64,

    /// Gas limit of every transfer.
    pub gas_limit: u64,

    /// Fixed gas price in gwei.
    pub gas_price_gwei: u64,

    /// Deadline for a single RPC call in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            gas_limit: 2_000_000,
            gas_price_gwei: 1,
            rpc_timeout_secs: 10,
        }
    }
}

impl NetworkConfig {
    /// Gas price in wei.
    pub fn gas_price_wei(&self) -> u128 {
        self.gas_price_gwei as u128 * 1_000_000_000
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }
}

/// Faucet endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FaucetConfig {
    /// URL the faucet request is POSTed to.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FAUCET_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Timer loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Minimum spacing between transfers in seconds.
    pub send_interval_secs: u64,

    /// Minimum spacing between faucet requests in seconds.
    pub faucet_interval_secs: u64,

    /// Sleep between loop iterations in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            send_interval_secs: 10,
            // 5 minutes and 10 seconds, just over the faucet's own throttle window
            faucet_interval_secs: 310,
            poll_interval_ms: 1000,
        }
    }
}

impl ScheduleConfig {
    pub fn send_interval(&self) -> Duration {
        Duration::from_secs(self.send_interval_secs)
    }

    pub fn faucet_interval(&self) -> Duration {
        Duration::from_secs(self.faucet_interval_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Validated configuration, immutable for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON-RPC endpoint.
    pub rpc_url: Url,

    /// Account funded by the faucet and debited by transfers.
    pub sender: Address,

    /// Recipient of every transfer.
    pub receiver: Address,

    /// Transfer value in wei.
    pub amount: U256,

    /// Faucet endpoint.
    pub faucet_url: Url,

    pub network: NetworkConfig,
    pub faucet: FaucetConfig,
    pub schedule: ScheduleConfig,
    pub observability: ObservabilityConfig,
}

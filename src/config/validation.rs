//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap and serde handle syntactic)
//! - Parse addresses, URLs and the decimal amount into typed values
//! - Validate value ranges (intervals > 0, gas > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: (Cli, Settings) → Result<AppConfig, Vec<ValidationError>>

use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, U256};
use thiserror::Error;
use url::Url;

use crate::config::cli::Cli;
use crate::config::schema::{AppConfig, Settings};

/// Maximum number of fractional digits the native unit supports.
const NATIVE_DECIMALS: usize = 18;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: invalid URL '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field}: invalid address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("amount: '{value}' {reason}")]
    InvalidAmount { value: String, reason: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Validate raw arguments and tunables, producing the typed configuration.
pub fn validate_config(cli: &Cli, settings: &Settings) -> Result<AppConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let rpc_url = check_url("rpc_url", &cli.rpc_url, &mut errors);
    let faucet_url = check_url("faucet.url", &settings.faucet.url, &mut errors);
    let sender = check_address("sender", &cli.sender_address, &mut errors);
    let receiver = check_address("receiver", &cli.receiver_address, &mut errors);

    let amount = match parse_amount(&cli.amount) {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let positive = [
        ("network.chain_id", settings.network.chain_id),
        ("network.gas_limit", settings.network.gas_limit),
        ("network.gas_price_gwei", settings.network.gas_price_gwei),
        ("network.rpc_timeout_secs", settings.network.rpc_timeout_secs),
        ("faucet.timeout_secs", settings.faucet.timeout_secs),
        ("schedule.send_interval_secs", settings.schedule.send_interval_secs),
        ("schedule.faucet_interval_secs", settings.schedule.faucet_interval_secs),
        ("schedule.poll_interval_ms", settings.schedule.poll_interval_ms),
    ];
    for (field, value) in positive {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }

    match (rpc_url, faucet_url, sender, receiver, amount) {
        (Some(rpc_url), Some(faucet_url), Some(sender), Some(receiver), Some(amount))
            if errors.is_empty() =>
        {
            Ok(AppConfig {
                rpc_url,
                sender,
                receiver,
                amount,
                faucet_url,
                network: settings.network.clone(),
                faucet: settings.faucet.clone(),
                schedule: settings.schedule.clone(),
                observability: settings.observability.clone(),
            })
        }
        _ => Err(errors),
    }
}

/// Parse a decimal amount of the native unit into wei.
///
/// Accepts plain decimals only ("5", "0.25"); signs, exponents and more than
/// 18 fractional digits are rejected, as is zero.
pub fn parse_amount(raw: &str) -> Result<U256, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidAmount {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = raw.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("is empty"));
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid("is not a plain decimal number"));
    }
    if fraction.len() > NATIVE_DECIMALS {
        return Err(invalid("has more than 18 fractional digits"));
    }

    let normalized = match (whole.is_empty(), fraction.is_empty()) {
        (_, true) => whole.to_string(),
        (true, false) => format!("0.{fraction}"),
        (false, false) => format!("{whole}.{fraction}"),
    };
    let wei = parse_ether(&normalized).map_err(|e| invalid(&e.to_string()))?;
    if wei.is_zero() {
        return Err(invalid("must be greater than zero"));
    }
    Ok(wei)
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) -> Option<Url> {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            errors.push(invalid(format!("unsupported scheme '{}'", url.scheme())));
            None
        }
        Err(e) => {
            errors.push(invalid(e.to_string()));
            None
        }
    }
}

fn check_address(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<Address> {
    match value.trim().parse::<Address>() {
        Ok(address) => Some(address),
        Err(_) => {
            errors.push(ValidationError::InvalidAddress {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

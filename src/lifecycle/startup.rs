//! Startup orchestration.
//!
//! # Responsibilities
//! - Make sure the private key controls the configured sender
//! - Connect to the node and verify it answers
//! - Wire the RPC client, wallet and faucet client into the loop
//!
//! # Design Decisions
//! - Fail fast: configuration problems are errors
//! - An unreachable node is not an error: it is reported and `None` returned

use std::time::Duration;

use thiserror::Error;

use crate::blockchain::{
    BlockchainClient, BlockchainError, ChainRpc, TransactionSender, TransferPlan, Wallet,
};
use crate::config::AppConfig;
use crate::faucet::{FaucetClient, FaucetError};
use crate::scheduler::AutoSender;

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Faucet(#[from] FaucetError),
}

/// The loop wired to live services.
pub type LiveAutoSender = AutoSender<BlockchainClient, FaucetClient>;

/// Prepare the loop, or `Ok(None)` if the node cannot be reached.
pub async fn prepare(config: &AppConfig, wallet: Wallet) -> Result<Option<LiveAutoSender>, StartupError> {
    wallet.ensure_controls(config.sender)?;

    let client = BlockchainClient::new(config.rpc_url.clone(), config.network.rpc_timeout());
    match client.chain_id().await {
        Err(e) => {
            tracing::error!(rpc_url = %config.rpc_url, error = %e, "Failed to connect to the RPC node");
            return Ok(None);
        }
        Ok(actual) if actual != config.network.chain_id => {
            let mismatch = BlockchainError::ChainMismatch {
                expected: config.network.chain_id,
                actual,
            };
            tracing::warn!(error = %mismatch, "Connected, but chain verification failed");
        }
        Ok(_) => {}
    }

    tracing::info!(address = %config.sender, "Sender's address");

    let faucet = FaucetClient::new(
        config.faucet_url.clone(),
        Duration::from_secs(config.faucet.timeout_secs),
    )?;
    let sender = TransactionSender::new(client, wallet, config.sender, TransferPlan::from_config(config));

    Ok(Some(AutoSender::new(sender, faucet, config.schedule.clone())))
}

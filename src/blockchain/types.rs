//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash, U256};
use alloy::primitives::utils::format_ether;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or missing key.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The transaction could not be assembled or signed locally.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The node refused the signed transaction.
    #[error("Broadcast rejected: {0}")]
    Broadcast(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// The private key does not control the configured sender account.
    #[error("Private key controls {derived}, but the configured sender is {configured}")]
    SenderMismatch { configured: Address, derived: Address },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// What happened during one send cycle.
#[derive(Debug)]
pub enum SendOutcome {
    /// The signed transfer was accepted by the node.
    Sent { tx_hash: TxHash },
    /// Balance was below the transfer amount; nothing was signed.
    InsufficientFunds { balance: U256, required: U256 },
    /// An RPC call, signing or the broadcast failed.
    Failed(BlockchainError),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

impl std::fmt::Display for SendOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendOutcome::Sent { tx_hash } => write!(f, "Transaction sent! Transaction hash: {}", tx_hash),
            SendOutcome::InsufficientFunds { balance, required } => write!(
                f,
                "Insufficient funds to make this transaction (balance {}, need {})",
                format_ether(*balance),
                format_ether(*required)
            ),
            SendOutcome::Failed(e) => write!(f, "Error sending transaction: {}", e),
        }
    }
}

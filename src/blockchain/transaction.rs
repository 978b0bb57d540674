//! Transfer building, signing and broadcasting.
//!
//! # Responsibilities
//! - Check the sender can afford the transfer before touching the nonce
//! - Build a legacy transfer with fixed gas parameters
//! - Sign locally and broadcast the raw payload
//! - Turn every failure into a [`SendOutcome`] instead of an error

use alloy::eips::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::ChainRpc;
use crate::blockchain::types::{BlockchainResult, SendOutcome};
use crate::blockchain::wallet::Wallet;
use crate::config::AppConfig;

/// The fixed part of every transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub receiver: Address,
    /// Value in wei.
    pub value: U256,
    pub gas_limit: u64,
    /// Gas price in wei.
    pub gas_price: u128,
    pub chain_id: u64,
}

impl TransferPlan {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            receiver: config.receiver,
            value: config.amount,
            gas_limit: config.network.gas_limit,
            gas_price: config.network.gas_price_wei(),
            chain_id: config.network.chain_id,
        }
    }

    /// The transfer for a freshly fetched nonce.
    pub fn request(&self, nonce: u64) -> TransferRequest {
        TransferRequest {
            to: self.receiver,
            value: self.value,
            gas_limit: self.gas_limit,
            gas_price: self.gas_price,
            nonce,
            chain_id: self.chain_id,
        }
    }
}

/// A single native value transfer, ready to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: u128,
    pub nonce: u64,
    pub chain_id: u64,
}

impl From<&TransferRequest> for TransactionRequest {
    fn from(transfer: &TransferRequest) -> Self {
        TransactionRequest::default()
            .with_to(transfer.to)
            .with_value(transfer.value)
            .with_nonce(transfer.nonce)
            .with_gas_limit(transfer.gas_limit)
            .with_gas_price(transfer.gas_price)
            .with_chain_id(transfer.chain_id)
    }
}

/// Sends the configured transfer from the sender account.
pub struct TransactionSender<C> {
    rpc: C,
    wallet: Wallet,
    sender: Address,
    plan: TransferPlan,
}

impl<C: ChainRpc> TransactionSender<C> {
    pub fn new(rpc: C, wallet: Wallet, sender: Address, plan: TransferPlan) -> Self {
        Self {
            rpc,
            wallet,
            sender,
            plan,
        }
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn plan(&self) -> &TransferPlan {
        &self.plan
    }

    /// Run one send cycle. Never fails; the outcome says what happened.
    pub async fn send(&self) -> SendOutcome {
        match self.try_send().await {
            Ok(outcome) => outcome,
            Err(e) => SendOutcome::Failed(e),
        }
    }

    async fn try_send(&self) -> BlockchainResult<SendOutcome> {
        let balance = self.rpc.balance(self.sender).await?;
        tracing::info!(
            balance = %format_ether(balance),
            "Current balance of the sender"
        );

        if balance < self.plan.value {
            return Ok(SendOutcome::InsufficientFunds {
                balance,
                required: self.plan.value,
            });
        }

        tracing::info!(
            amount = %format_ether(self.plan.value),
            from = %self.sender,
            to = %self.plan.receiver,
            "Sending transfer"
        );

        let nonce = self.rpc.transaction_count(self.sender).await?;
        let transfer = self.plan.request(nonce);
        let envelope = self.wallet.sign((&transfer).into()).await?;

        tracing::debug!(nonce, local_hash = %envelope.tx_hash(), "Transfer signed");

        let tx_hash = self
            .rpc
            .send_raw_transaction(&envelope.encoded_2718())
            .await?;

        Ok(SendOutcome::Sent { tx_hash })
    }
}

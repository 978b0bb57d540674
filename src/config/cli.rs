//! Command line and environment arguments.
//!
//! Every required value can come from the process environment (or a `.env`
//! file loaded before parsing) and may be overridden by a flag. The private
//! key is deliberately absent: it is read straight from the environment by
//! [`Wallet::from_env`](crate::blockchain::Wallet::from_env).

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "auto-send")]
#[command(about = "Periodically drips testnet funds from the faucet and sends a fixed transfer", long_about = None)]
pub struct Cli {
    /// JSON-RPC endpoint of the network node.
    #[arg(long, env = "WEB3_PROVIDER_URI")]
    pub rpc_url: String,

    /// Address that receives faucet funds and signs transfers.
    #[arg(long = "sender", env = "CHECKSUM_ADDRESS")]
    pub sender_address: String,

    /// Amount of the native unit sent per transfer (decimal, e.g. "0.5").
    #[arg(long, env = "AMOUNT")]
    pub amount: String,

    /// Recipient of every transfer.
    #[arg(long = "receiver", env = "RECEIVER_ADDRESS")]
    pub receiver_address: String,

    /// Optional TOML file with network, faucet and schedule tunables.
    #[arg(long, env = "AUTO_SEND_SETTINGS")]
    pub settings: Option<PathBuf>,
}

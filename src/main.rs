//! Testnet auto-sender.
//!
//! ```text
//!   ┌─────────────────────── timer loop (1s) ───────────────────────┐
//!   │                                                                │
//!   │  every 10s   ┌──────────────────┐   balance → nonce → sign    │
//!   │ ───────────▶ │ TransactionSender │ ─────────────────────────▶ │ ──▶ JSON-RPC node
//!   │              └──────────────────┘          → broadcast        │
//!   │                                                                │
//!   │  every 310s  ┌──────────────────┐   POST {"address": ...}     │
//!   │ ───────────▶ │   FaucetClient   │ ─────────────────────────▶ │ ──▶ faucet API
//!   │              └──────────────────┘                              │
//!   └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from the environment (optionally a `.env` file):
//! `WEB3_PROVIDER_URI`, `CHECKSUM_ADDRESS`, `PRIVATE_KEY`, `AMOUNT`,
//! `RECEIVER_ADDRESS`.

use clap::Parser;

use auto_send::blockchain::Wallet;
use auto_send::config::{load_config, Cli};
use auto_send::lifecycle::{self, signals, Shutdown};
use auto_send::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the variables may already be exported.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    logging::init(&config.observability.log_level);
    tracing::info!("auto-send v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        rpc_url = %config.rpc_url,
        faucet_url = %config.faucet_url,
        chain_id = config.network.chain_id,
        receiver = %config.receiver,
        "Configuration loaded"
    );

    let wallet = Wallet::from_env()?;

    let Some(mut auto_sender) = lifecycle::prepare(&config, wallet).await? else {
        return Ok(());
    };

    let shutdown = Shutdown::new();
    signals::spawn_listener(shutdown.clone());

    auto_sender.run(shutdown.subscribe()).await;

    tracing::info!("Shutdown complete");
    Ok(())
}

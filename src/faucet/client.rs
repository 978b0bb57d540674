//! HTTP client for the testnet faucet.

use std::time::Duration;

use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Errors that prevent a faucet response from being received at all.
#[derive(Debug, Error)]
pub enum FaucetError {
    #[error("Faucet request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result of one faucet request.
#[derive(Debug)]
pub enum FaucetOutcome {
    /// The faucet answered 200.
    Credited,
    /// The faucet answered with any other status.
    Rejected { status: StatusCode, body: String },
    /// No response (connection error, timeout).
    Failed(FaucetError),
}

impl FaucetOutcome {
    pub fn is_credited(&self) -> bool {
        matches!(self, FaucetOutcome::Credited)
    }
}

impl std::fmt::Display for FaucetOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaucetOutcome::Credited => write!(f, "Faucet successfully retrieved!"),
            FaucetOutcome::Rejected { status, body } => write!(
                f,
                "Error retrieving faucet: {} - {}",
                status.as_u16(),
                body
            ),
            FaucetOutcome::Failed(e) => write!(f, "Error retrieving faucet: {}", e),
        }
    }
}

/// Anything that can ask a faucet to credit an address.
#[async_trait]
pub trait FaucetApi: Send + Sync {
    async fn request_funds(&self, address: Address) -> FaucetOutcome;
}

#[derive(Serialize)]
struct FaucetRequest {
    address: String,
}

/// Faucet client over reqwest.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    http: reqwest::Client,
    url: Url,
}

impl FaucetClient {
    /// Create a client posting to `url`. Redirects are not followed.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FaucetError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FaucetApi for FaucetClient {
    async fn request_funds(&self, address: Address) -> FaucetOutcome {
        let body = FaucetRequest {
            address: address.to_string(),
        };

        let response = match self.http.post(self.url.clone()).json(&body).send().await {
            Ok(response) => response,
            Err(e) => return FaucetOutcome::Failed(e.into()),
        };

        let status = response.status();
        if status == StatusCode::OK {
            return FaucetOutcome::Credited;
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        FaucetOutcome::Rejected { status, body }
    }
}

//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use auto_send::blockchain::{BlockchainError, BlockchainResult, ChainRpc};
use auto_send::faucet::{FaucetApi, FaucetOutcome};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_RECEIVER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

/// Start a mock HTTP backend that answers every request with `status` and `body`.
///
/// Returns the bound address and a receiver yielding each request's body.
pub async fn start_status_backend(
    status: u16,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let request_body = read_request_body(&mut socket).await;
                let _ = tx.send(request_body);

                let mut response = format!(
                    "HTTP/1.1 {} Mock\r\nContent-Length: {}\r\nConnection: close\r\n",
                    status,
                    body.len()
                );
                if (300..400).contains(&status) {
                    response.push_str("Location: http://127.0.0.1:1/elsewhere\r\n");
                }
                response.push_str("\r\n");
                response.push_str(body);

                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, rx)
}

/// Start a mock HTTP backend that promises a longer body than it sends.
pub async fn start_truncated_backend(status: u16) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                read_request_body(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 {} Mock\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
                    status
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start a mock JSON-RPC node whose `eth_chainId` answers `chain_id`.
///
/// Any other method gets a JSON-RPC "method not found" error. Returns the
/// bound address and a receiver yielding each requested method name.
pub async fn start_json_rpc_backend(chain_id: u64) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let request: serde_json::Value =
                    serde_json::from_str(&read_request_body(&mut socket).await)
                        .unwrap_or(serde_json::Value::Null);
                let method = request["method"].as_str().unwrap_or_default().to_string();
                let _ = tx.send(method.clone());

                let reply = if method == "eth_chainId" {
                    serde_json::json!({
                        "jsonrpc": "2.0",
                        "id": request["id"],
                        "result": format!("0x{:x}", chain_id),
                    })
                } else {
                    serde_json::json!({
                        "jsonrpc": "2.0",
                        "id": request["id"],
                        "error": { "code": -32601, "message": "method not found" },
                    })
                };
                let body = reply.to_string();

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, rx)
}

async fn read_request_body(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let head_end = buf.windows(4).position(|w| w == b"\r\n\r\n");
        if let Some(end) = head_end {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            let body_start = end + 4;
            if buf.len() >= body_start + content_length {
                return String::from_utf8_lossy(&buf[body_start..body_start + content_length])
                    .into_owned();
            }
        }

        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return String::new(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

/// Call counters shared between a mock and the test body.
#[derive(Debug, Default)]
pub struct Calls {
    pub balance: AtomicUsize,
    pub nonce: AtomicUsize,
    pub broadcast: AtomicUsize,
    pub faucet: AtomicUsize,
}

impl Calls {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// In-memory chain: fixed balance, incrementing nonce, optional broadcast failure.
#[derive(Clone)]
pub struct MockChain {
    pub balance: U256,
    pub reject_broadcast: bool,
    pub fail_balance: bool,
    pub calls: Arc<Calls>,
    pub raw: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockChain {
    pub fn new(balance_ether: u128, reject_broadcast: bool) -> Self {
        Self {
            balance: U256::from(balance_ether * ONE_ETHER),
            reject_broadcast,
            fail_balance: false,
            calls: Arc::new(Calls::default()),
            raw: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ChainRpc for MockChain {
    async fn chain_id(&self) -> BlockchainResult<u64> {
        Ok(999_987)
    }

    async fn balance(&self, _address: Address) -> BlockchainResult<U256> {
        self.calls.balance.fetch_add(1, Ordering::SeqCst);
        if self.fail_balance {
            return Err(BlockchainError::Rpc("eth_getBalance: node unavailable".into()));
        }
        Ok(self.balance)
    }

    async fn transaction_count(&self, _address: Address) -> BlockchainResult<u64> {
        Ok(self.calls.nonce.fetch_add(1, Ordering::SeqCst) as u64)
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> BlockchainResult<TxHash> {
        self.calls.broadcast.fetch_add(1, Ordering::SeqCst);
        self.raw.lock().unwrap().push(raw.to_vec());
        if self.reject_broadcast {
            return Err(BlockchainError::Broadcast("replacement transaction underpriced".into()));
        }
        Ok(TxHash::repeat_byte(0x11))
    }
}

/// Faucet that always throttles, counting requests.
#[derive(Clone)]
pub struct MockFaucet {
    pub calls: Arc<Calls>,
}

#[async_trait]
impl FaucetApi for MockFaucet {
    async fn request_funds(&self, _address: Address) -> FaucetOutcome {
        self.calls.faucet.fetch_add(1, Ordering::SeqCst);
        FaucetOutcome::Rejected {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "rate limited".to_string(),
        }
    }
}

//! Faucet client against a real HTTP listener.

use std::time::Duration;

use alloy::primitives::Address;
use auto_send::faucet::{FaucetApi, FaucetClient, FaucetOutcome};

mod common;

fn client_for(addr: std::net::SocketAddr) -> FaucetClient {
    FaucetClient::new(
        format!("http://{}/faucet", addr).parse().unwrap(),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn sender() -> Address {
    "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap()
}

#[tokio::test]
async fn test_200_is_credited_and_body_carries_address() {
    let (addr, mut bodies) = common::start_status_backend(200, "{\"ok\":true}").await;

    let outcome = client_for(addr).request_funds(sender()).await;
    assert!(outcome.is_credited(), "unexpected outcome: {outcome}");

    let body: serde_json::Value = serde_json::from_str(&bodies.recv().await.unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "address": "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266" })
    );
}

#[tokio::test]
async fn test_any_other_status_is_rejected() {
    for status in [201u16, 204, 301, 429, 500] {
        let body = if status == 204 { "" } else { "nope" };
        let (addr, _bodies) = common::start_status_backend(status, body).await;

        match client_for(addr).request_funds(sender()).await {
            FaucetOutcome::Rejected { status: got, body: text } => {
                assert_eq!(got.as_u16(), status);
                assert_eq!(text, body);
            }
            other => panic!("status {status}: expected Rejected, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unreadable_body_is_reported() {
    let addr = common::start_truncated_backend(500).await;

    match client_for(addr).request_funds(sender()).await {
        FaucetOutcome::Rejected { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.starts_with("<unreadable body: "), "body was {body:?}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

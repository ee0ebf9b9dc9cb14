//! Full executor paths against a node: simulate then send, estimate then
//! send, and reads through the same transport.

mod common;

use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::{SolCall, SolValue};
use serde_json::Value;

use common::{FakeNode, LENDER, TX_HASH, client, setup_log};
use illuminate_sdk::CallOptions;
use illuminate_sdk::contracts::LendDirectCall;
use illuminate_sdk::dispatch::{DirectLend, LendRequest};

fn notional_lend() -> LendRequest {
    LendRequest::Notional(DirectLend {
        underlying: Address::repeat_byte(0xaa),
        maturity: "1654638431".into(),
        amount: "2500".into(),
    })
}

fn tx_input(tx: &Value) -> Vec<u8> {
    let hex = tx["input"].as_str().or_else(|| tx["data"].as_str()).unwrap();
    hex::decode(hex.trim_start_matches("0x")).unwrap()
}

#[tokio::test]
async fn test_explicit_gas_simulates_then_sends() {
    setup_log();
    let node = FakeNode::new();
    let server = node.serve().await;

    let handle = client(&server)
        .lender()
        .lend(&notional_lend(), CallOptions::default().with_gas_limit(80_000))
        .await
        .unwrap();

    assert_eq!(handle.tx_hash, TX_HASH.parse::<B256>().unwrap());
    assert_eq!(node.methods(), vec!["eth_call", "eth_sendTransaction"]);

    let simulated = node.last_tx("eth_call").unwrap();
    let sent = node.last_tx("eth_sendTransaction").unwrap();
    assert_eq!(simulated["gas"], "0x13880");
    assert_eq!(sent["gas"], "0x13880");
    assert_eq!(tx_input(&simulated), tx_input(&sent));

    let to: Address = sent["to"].as_str().unwrap().parse().unwrap();
    assert_eq!(to, LENDER);
    let decoded = LendDirectCall::abi_decode(&tx_input(&sent)).unwrap();
    assert_eq!(decoded.p, 8);
    assert_eq!(decoded.amount, U256::from(2500u64));
}

#[tokio::test]
async fn test_estimate_is_padded_before_send() {
    setup_log();
    let node = FakeNode::new();
    let server = node.serve().await;

    client(&server)
        .lender()
        .lend(&notional_lend(), CallOptions::default())
        .await
        .unwrap();

    assert_eq!(node.methods(), vec!["eth_estimateGas", "eth_sendTransaction"]);
    let sent = node.last_tx("eth_sendTransaction").unwrap();
    // 200000 estimated, 220000 sent
    assert_eq!(sent["gas"], "0x35b60");
}

#[tokio::test]
async fn test_read_through_transport() {
    setup_log();
    let node = FakeNode::new()
        .call_result(format!("0x{}", hex::encode(U256::from(12_345u64).abi_encode())));
    let server = node.serve().await;

    let holdings = client(&server)
        .redeemer()
        .holdings(Address::repeat_byte(0xaa), "1654638431")
        .await
        .unwrap();

    assert_eq!(holdings, U256::from(12_345u64));
    assert_eq!(node.methods(), vec!["eth_call"]);
}

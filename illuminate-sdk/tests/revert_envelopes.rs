//! Custom-error reverts surfaced by gas estimation and simulation, in both
//! envelopes nodes use for revert data.

mod common;

use alloy::primitives::Address;
use serde_json::json;

use common::{FakeNode, client, config, exception_revert, setup_log};
use illuminate_sdk::IlluminateClient;
use illuminate_sdk::dispatch::{LendRequest, PoolLend};
use illuminate_sdk::exception;
use illuminate_sdk::{CallOptions, SdkError};

fn illuminate_lend() -> LendRequest {
    LendRequest::Illuminate(PoolLend {
        underlying: Address::repeat_byte(0xaa),
        maturity: "1654638431".into(),
        amount: "100e18".into(),
        pool: Address::repeat_byte(0xbb),
    })
}

#[tokio::test]
async fn test_estimate_revert_flat_envelope() {
    setup_log();
    let node = FakeNode::new().estimate_error(json!({
        "code": 3,
        "message": "execution reverted",
        "data": exception_revert(6, 90, 100),
    }));
    let server = node.serve().await;

    let err = client(&server)
        .lender()
        .lend(&illuminate_lend(), CallOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::UnpredictableGas(_)));
    assert_eq!(exception::parse(&err).unwrap().code, 6);
    match err.into_structured() {
        SdkError::Exception(e) => {
            assert_eq!(e.name, Some("SlippageExceeded"));
            assert_eq!(e.amount, "90");
            assert_eq!(e.amount_expected, "100");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(node.methods(), vec!["eth_estimateGas"]);
}

#[tokio::test]
async fn test_estimate_revert_nested_envelope() {
    setup_log();
    let node = FakeNode::new().estimate_error(json!({
        "code": -32603,
        "message": "Internal error",
        "data": {
            "message": "execution reverted",
            "data": exception_revert(3, 0, 1654638431),
        },
    }));
    let server = node.serve().await;

    let err = client(&server)
        .lender()
        .lend(&illuminate_lend(), CallOptions::default())
        .await
        .unwrap_err();

    let structured = err.exception().unwrap();
    assert_eq!(structured.name, Some("MaturityReached"));
    assert_eq!(
        structured.message.as_deref(),
        Some("Market matured at 1654638431")
    );
    assert!(!node.methods().contains(&"eth_sendTransaction".to_string()));
}

#[tokio::test]
async fn test_simulation_revert_blocks_send() {
    setup_log();
    let node = FakeNode::new().call_error(json!({
        "code": 3,
        "message": "execution reverted",
        "data": exception_revert(1, 4, 0),
    }));
    let server = node.serve().await;

    let err = client(&server)
        .lender()
        .lend(&illuminate_lend(), CallOptions::default().with_gas_limit(500_000))
        .await
        .unwrap_err();

    match &err {
        SdkError::CallException { exception, .. } => {
            assert_eq!(exception.as_ref().unwrap().code, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.exception().unwrap().message.as_deref(),
        Some("Pendle is paused")
    );
    assert_eq!(node.methods(), vec!["eth_call"]);
}

#[tokio::test]
async fn test_plain_node_error_has_no_exception() {
    setup_log();
    let node = FakeNode::new().estimate_error(json!({
        "code": -32000,
        "message": "insufficient funds for gas * price + value",
    }));
    let server = node.serve().await;

    let err = client(&server)
        .lender()
        .lend(&illuminate_lend(), CallOptions::default())
        .await
        .unwrap_err();

    assert!(exception::parse(&err).is_none());
    assert!(matches!(err.into_structured(), SdkError::UnpredictableGas(_)));
}

#[tokio::test]
async fn test_send_revert_without_gas_optimization() {
    setup_log();
    let node = FakeNode::new().send_error(json!({
        "code": 3,
        "message": "execution reverted",
        "data": exception_revert(6, 90, 100),
    }));
    let server = node.serve().await;

    let mut config = config(&server);
    config.optimize_gas = false;
    let err = IlluminateClient::connect(&config)
        .unwrap()
        .lender()
        .lend(&illuminate_lend(), CallOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Rpc(_)));
    assert_eq!(exception::parse(&err).unwrap().code, 6);
    match err.into_structured() {
        SdkError::Exception(e) => assert_eq!(e.name, Some("SlippageExceeded")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(node.methods(), vec!["eth_sendTransaction"]);
}

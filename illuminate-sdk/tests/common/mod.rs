//! A scripted JSON-RPC node served by wiremock.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolError;
use serde_json::{Value, json};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use illuminate_sdk::contracts::Exception;
use illuminate_sdk::{IlluminateClient, SdkConfig};

pub const TX_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";
pub const MARKET_PLACE: Address = Address::repeat_byte(0x01);
pub const LENDER: Address = Address::repeat_byte(0x02);
pub const REDEEMER: Address = Address::repeat_byte(0x03);

static LOG_INIT: Once = Once::new();

pub fn setup_log() {
    LOG_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Answers `eth_estimateGas`, `eth_call` and `eth_sendTransaction` from a
/// fixed script and records every request it sees.
#[derive(Clone)]
pub struct FakeNode {
    estimate: Result<u64, Value>,
    call: Result<String, Value>,
    send: Result<String, Value>,
    seen: Arc<Mutex<Vec<(String, Value)>>>,
}

impl FakeNode {
    pub fn new() -> Self {
        Self {
            estimate: Ok(200_000),
            call: Ok(format!("0x{}", "00".repeat(32))),
            send: Ok(TX_HASH.to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn estimate_error(mut self, error: Value) -> Self {
        self.estimate = Err(error);
        self
    }

    pub fn call_result(mut self, data: String) -> Self {
        self.call = Ok(data);
        self
    }

    pub fn call_error(mut self, error: Value) -> Self {
        self.call = Err(error);
        self
    }

    pub fn send_error(mut self, error: Value) -> Self {
        self.send = Err(error);
        self
    }

    pub fn methods(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    /// First parameter of the last request for `name`.
    pub fn last_tx(&self, name: &str) -> Option<Value> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(m, _)| m == name)
            .map(|(_, params)| params[0].clone())
    }

    pub async fn serve(&self) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(self.clone())
            .mount(&server)
            .await;
        server
    }
}

impl Respond for FakeNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let id = body["id"].clone();
        let name = body["method"].as_str().unwrap_or_default().to_string();
        self.seen
            .lock()
            .unwrap()
            .push((name.clone(), body["params"].clone()));

        let outcome = match name.as_str() {
            "eth_estimateGas" => self.estimate.clone().map(|gas| json!(format!("{gas:#x}"))),
            "eth_call" => self.call.clone().map(|data| json!(data)),
            "eth_sendTransaction" => self.send.clone().map(|hash| json!(hash)),
            other => Err(json!({ "code": -32601, "message": format!("{other} not supported") })),
        };
        let payload = match outcome {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(error) => json!({ "jsonrpc": "2.0", "id": id, "error": error }),
        };
        ResponseTemplate::new(200).set_body_json(payload)
    }
}

/// Hex revert data for `Exception(code, amount, expected, 0, 0)`.
pub fn exception_revert(code: u8, amount: u64, expected: u64) -> String {
    let exception = Exception {
        code,
        amount: U256::from(amount),
        amountExpected: U256::from(expected),
        addr: Address::ZERO,
        addrExpected: Address::ZERO,
    };
    format!("0x{}", hex::encode(exception.abi_encode()))
}

pub fn config(server: &MockServer) -> SdkConfig {
    let mut config = SdkConfig::new(MARKET_PLACE, LENDER, REDEEMER);
    config.rpc_url = server.uri();
    config
}

/// Read-only client pointed at the fake node.
pub fn client(server: &MockServer) -> IlluminateClient {
    IlluminateClient::connect(&config(server)).unwrap()
}

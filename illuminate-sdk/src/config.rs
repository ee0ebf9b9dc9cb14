//! SDK configuration: node endpoint, signer and deployed contract addresses.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::gas::DEFAULT_GAS_MARGIN_PERCENT;

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";
pub const DEFAULT_CHAIN_ID: u64 = 1;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Hex private key. Without one the SDK can read but not send.
    #[serde(default)]
    pub private_key: Option<String>,
    pub market_place: Address,
    pub lender: Address,
    pub redeemer: Address,
    #[serde(default)]
    pub strategy_router: Option<Address>,
    #[serde(default)]
    pub eth_strategy_router: Option<Address>,
    #[serde(default = "default_gas_margin")]
    pub gas_margin_percent: u64,
    /// Estimate and pad gas for calls without an explicit limit.
    #[serde(default = "default_optimize")]
    pub optimize_gas: bool,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_gas_margin() -> u64 {
    DEFAULT_GAS_MARGIN_PERCENT
}

fn default_optimize() -> bool {
    true
}

impl SdkConfig {
    /// Config for the three core contracts with every other field defaulted.
    pub fn new(market_place: Address, lender: Address, redeemer: Address) -> Self {
        Self {
            rpc_url: default_rpc_url(),
            chain_id: DEFAULT_CHAIN_ID,
            private_key: None,
            market_place,
            lender,
            redeemer,
            strategy_router: None,
            eth_strategy_router: None,
            gas_margin_percent: DEFAULT_GAS_MARGIN_PERCENT,
            optimize_gas: true,
        }
    }

    /// Read `ILLUMINATE_*` environment variables.
    ///
    /// `ILLUMINATE_MARKET_PLACE`, `ILLUMINATE_LENDER` and
    /// `ILLUMINATE_REDEEMER` are required; everything else has a default.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SdkConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required_address = |key: &str| -> Result<Address, SdkError> {
            let value = get(key).ok_or_else(|| SdkError::ConfigError(format!("{key} is not set")))?;
            parse_address(key, &value)
        };
        let optional_address = |key: &str| -> Result<Option<Address>, SdkError> {
            get(key).map(|value| parse_address(key, &value)).transpose()
        };

        let chain_id = match get("ILLUMINATE_CHAIN_ID") {
            Some(v) => v.trim().parse().map_err(|e| {
                SdkError::ConfigError(format!("Invalid ILLUMINATE_CHAIN_ID '{v}': {e}"))
            })?,
            None => DEFAULT_CHAIN_ID,
        };
        let gas_margin_percent = match get("ILLUMINATE_GAS_MARGIN_PERCENT") {
            Some(v) => v.trim().parse().map_err(|e| {
                SdkError::ConfigError(format!("Invalid ILLUMINATE_GAS_MARGIN_PERCENT '{v}': {e}"))
            })?,
            None => DEFAULT_GAS_MARGIN_PERCENT,
        };
        let optimize_gas = match get("ILLUMINATE_OPTIMIZE_GAS") {
            Some(v) => parse_bool("ILLUMINATE_OPTIMIZE_GAS", &v)?,
            None => true,
        };

        Ok(Self {
            rpc_url: get("ILLUMINATE_RPC_URL").unwrap_or_else(default_rpc_url),
            chain_id,
            private_key: get("ILLUMINATE_PRIVATE_KEY"),
            market_place: required_address("ILLUMINATE_MARKET_PLACE")?,
            lender: required_address("ILLUMINATE_LENDER")?,
            redeemer: required_address("ILLUMINATE_REDEEMER")?,
            strategy_router: optional_address("ILLUMINATE_STRATEGY_ROUTER")?,
            eth_strategy_router: optional_address("ILLUMINATE_ETH_STRATEGY_ROUTER")?,
            gas_margin_percent,
            optimize_gas,
        })
    }
}

impl std::fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfig")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("market_place", &self.market_place)
            .field("lender", &self.lender)
            .field("redeemer", &self.redeemer)
            .field("strategy_router", &self.strategy_router)
            .field("eth_strategy_router", &self.eth_strategy_router)
            .field("gas_margin_percent", &self.gas_margin_percent)
            .field("optimize_gas", &self.optimize_gas)
            .finish()
    }
}

fn parse_address(key: &str, value: &str) -> Result<Address, SdkError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| SdkError::ConfigError(format!("Invalid {key} '{value}': {e}")))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SdkError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(SdkError::ConfigError(format!("Invalid {key} '{other}'"))),
    }
}

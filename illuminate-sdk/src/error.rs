use alloy::primitives::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contracts::Exception;
use crate::exception::ContractException;
use crate::types::Principal;

/// A JSON-RPC error response as returned by the node.
///
/// `data` is kept as raw JSON because nodes disagree on where revert bytes
/// live: some return them directly as a hex string, others nest them in an
/// object under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcFailure {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl std::fmt::Display for RpcFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

#[derive(Error, Debug)]
pub enum SdkError {
    /// Gas estimation was rejected by the node, usually because the call
    /// would revert.
    #[error("Cannot estimate gas: {0}")]
    UnpredictableGas(RpcFailure),

    /// A static call (simulation or read) reverted.
    #[error("Call exception: {message}")]
    CallException {
        message: String,
        exception: Option<Exception>,
        data: Option<Bytes>,
    },

    #[error("RPC error: {0}")]
    Rpc(RpcFailure),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Exception(ContractException),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No {operation} overload for principal {principal}")]
    UnsupportedPrincipal {
        principal: Principal,
        operation: &'static str,
    },

    #[error("{operation} is not supported for principal {principal}")]
    UnsupportedOperation {
        principal: Principal,
        operation: &'static str,
    },

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SdkError {
    /// Upgrade a raw failure into [`SdkError::Exception`] when it carries a
    /// decodable `Exception` revert; otherwise hand back the original error.
    pub fn into_structured(self) -> Self {
        match crate::exception::parse(&self) {
            Some(exception) => SdkError::Exception(crate::exception::map(&exception)),
            None => self,
        }
    }

    /// The decoded on-chain exception, if this error carries one.
    pub fn exception(&self) -> Option<ContractException> {
        match self {
            SdkError::Exception(e) => Some(e.clone()),
            other => crate::exception::parse(other).map(|e| crate::exception::map(&e)),
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::SerializationError(e.to_string())
    }
}

impl From<alloy::sol_types::Error> for SdkError {
    fn from(e: alloy::sol_types::Error) -> Self {
        SdkError::Abi(e.to_string())
    }
}

impl From<alloy::dyn_abi::Error> for SdkError {
    fn from(e: alloy::dyn_abi::Error) -> Self {
        SdkError::Abi(e.to_string())
    }
}

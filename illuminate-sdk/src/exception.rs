//! Decoding and description of the `Exception` custom error.
//!
//! Every Illuminate contract reverts with
//! `Exception(uint8 code, uint256 amount, uint256 amountExpected, address, address)`.
//! The code selects an entry of a fixed table which gives the failure a
//! name and a message; the remaining fields carry context.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolError;
use serde::Serialize;

use crate::contracts::Exception;
use crate::error::{RpcFailure, SdkError};
use crate::types::Principal;

/// A decoded `Exception` resolved against the code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractException {
    pub code: u8,
    /// `None` when the code is not in the table.
    pub name: Option<&'static str>,
    pub message: Option<String>,
    pub amount: String,
    pub amount_expected: String,
    pub address: Address,
    pub address_expected: Address,
}

impl ContractException {
    pub fn is_known(&self) -> bool {
        self.name.is_some()
    }
}

impl fmt::Display for ContractException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name, &self.message) {
            (Some(name), Some(message)) => write!(f, "{name}: {message}"),
            (Some(name), None) => f.write_str(name),
            _ => write!(
                f,
                "Unknown exception (code {}, amount {}, expected {})",
                self.code, self.amount, self.amount_expected
            ),
        }
    }
}

/// Decode raw revert bytes as an `Exception`. Anything else, including a
/// plain `Error(string)` revert, yields `None`.
pub fn decode_exception(data: &[u8]) -> Option<Exception> {
    Exception::abi_decode(data).ok()
}

/// Revert bytes carried by a node error.
///
/// Nodes either put the hex string straight into `error.data` or wrap it
/// as `error.data.data`; both are checked.
pub fn revert_bytes(failure: &RpcFailure) -> Option<Bytes> {
    let data = failure.data.as_ref()?;
    let hex = data
        .as_str()
        .or_else(|| data.get("data").and_then(|inner| inner.as_str()))?;
    Bytes::from_str(hex).ok()
}

/// Pull an `Exception` out of a failed call, if it carries one.
pub fn parse(error: &SdkError) -> Option<Exception> {
    match error {
        SdkError::UnpredictableGas(failure) | SdkError::Rpc(failure) => {
            revert_bytes(failure).and_then(|data| decode_exception(&data))
        }
        SdkError::CallException {
            exception: Some(exception),
            ..
        } => Some(exception.clone()),
        SdkError::CallException {
            data: Some(data), ..
        } => decode_exception(data),
        _ => None,
    }
}

/// Resolve a decoded `Exception` against the code table.
pub fn map(exception: &Exception) -> ContractException {
    let described = describe(exception);
    ContractException {
        code: exception.code,
        name: described.as_ref().map(|(name, _)| *name),
        message: described.map(|(_, message)| message),
        amount: exception.amount.to_string(),
        amount_expected: exception.amountExpected.to_string(),
        address: exception.addr,
        address_expected: exception.addrExpected,
    }
}

/// Render an amount that encodes a principal as that principal's name.
fn principal_name(amount: U256) -> String {
    u8::try_from(amount)
        .ok()
        .and_then(|p| Principal::try_from(p).ok())
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|| format!("principal {amount}"))
}

fn describe(e: &Exception) -> Option<(&'static str, String)> {
    let amount = e.amount;
    let expected = e.amountExpected;
    let address = e.addr;
    let address_expected = e.addrExpected;

    let entry = match e.code {
        0 => ("InvalidPrincipal", format!("{} is not a valid principal", principal_name(amount))),
        1 => ("PrincipalPaused", format!("{} is paused", principal_name(amount))),
        2 => ("MarketPaused", "This market is paused".to_string()),
        3 => ("MaturityReached", format!("Market matured at {expected}")),
        4 => ("MaturityNotReached", format!("Market does not mature until {expected}")),
        5 => (
            "Unauthorized",
            format!("{address} is not authorized, expected {address_expected}"),
        ),
        6 => (
            "SlippageExceeded",
            format!("Returned {amount}, expected at least {expected}"),
        ),
        7 => (
            "MarketExists",
            "A market already exists for this underlying and maturity".to_string(),
        ),
        8 => (
            "PrincipalNotSet",
            format!("No {} principal token is set for this market", principal_name(amount)),
        ),
        9 => ("PoolExists", format!("Pool {address} is already set")),
        10 => ("PoolNotSet", "No pool is set for this market".to_string()),
        11 => (
            "UnderlyingMismatch",
            format!("Underlying {address} does not match {address_expected}"),
        ),
        12 => (
            "MaturityMismatch",
            format!("Maturity {amount} does not match {expected}"),
        ),
        13 => (
            "LengthMismatch",
            format!("Received {amount} items, expected {expected}"),
        ),
        14 => ("DeadlineExpired", format!("Deadline {amount} has passed")),
        15 => (
            "InsufficientBalance",
            format!("Balance of {address} is {amount}, needs {expected}"),
        ),
        16 => (
            "InsufficientAllowance",
            format!("Allowance for {address} is {amount}, needs {expected}"),
        ),
        17 => ("FeeTooHigh", format!("Fee {amount} exceeds the maximum {expected}")),
        18 => (
            "WithdrawalNotScheduled",
            format!("No withdrawal is scheduled for {address}"),
        ),
        19 => (
            "WithdrawalOnHold",
            format!("Withdrawal for {address} is held until {expected}"),
        ),
        20 => ("TransferFailed", format!("Transfer of {amount} from {address} failed")),
        21 => ("RedemptionPaused", format!("Redemptions for {} are paused", principal_name(amount))),
        22 => (
            "RatioOutOfRange",
            format!("Pool ratio {amount} is outside the accepted range"),
        ),
        23 => ("ZeroAddress", "A required address was not set".to_string()),
        24 => (
            "OrderMismatch",
            format!("Order maker {address} does not match {address_expected}"),
        ),
        25 => (
            "UnsupportedPrincipal",
            format!("{} does not support this operation", principal_name(amount)),
        ),
        _ => return None,
    };
    Some(entry)
}

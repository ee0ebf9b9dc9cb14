use std::fmt;
use std::str::FromStr;

use alloy::primitives::{Address, B256, Bytes, FixedBytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use serde::{Deserialize, Serialize};

use crate::contracts::{Components, Order};
use crate::error::SdkError;

/// Lending markets supported by the Lender and Redeemer contracts.
///
/// The discriminant is the `uint8 p` argument the contracts expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Principal {
    Illuminate = 0,
    Swivel = 1,
    Yield = 2,
    Element = 3,
    Pendle = 4,
    Tempus = 5,
    Sense = 6,
    Apwine = 7,
    Notional = 8,
    Exactly = 9,
    Term = 10,
}

impl Principal {
    pub const ALL: [Principal; 11] = [
        Principal::Illuminate,
        Principal::Swivel,
        Principal::Yield,
        Principal::Element,
        Principal::Pendle,
        Principal::Tempus,
        Principal::Sense,
        Principal::Apwine,
        Principal::Notional,
        Principal::Exactly,
        Principal::Term,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Human readable protocol name, used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Principal::Illuminate => "Illuminate",
            Principal::Swivel => "Swivel",
            Principal::Yield => "Yield",
            Principal::Element => "Element",
            Principal::Pendle => "Pendle",
            Principal::Tempus => "Tempus",
            Principal::Sense => "Sense",
            Principal::Apwine => "APWine",
            Principal::Notional => "Notional",
            Principal::Exactly => "Exactly",
            Principal::Term => "Term",
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<u8> for Principal {
    type Error = SdkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Principal::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| SdkError::InvalidArgument(format!("Unknown principal {value}")))
    }
}

impl From<Principal> for u8 {
    fn from(p: Principal) -> Self {
        p as u8
    }
}

/// Per-call transport overrides. Every field is optional and copied
/// verbatim onto the outgoing transaction request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallOptions {
    pub from: Option<Address>,
    pub gas_limit: Option<u64>,
    pub nonce: Option<u64>,
    pub value: Option<U256>,
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
}

impl CallOptions {
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Copy the set fields onto `tx`, leaving the others untouched.
    pub fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(from) = self.from {
            tx.from = Some(from);
        }
        if let Some(gas) = self.gas_limit {
            tx.gas = Some(gas);
        }
        if let Some(nonce) = self.nonce {
            tx.nonce = Some(nonce);
        }
        if let Some(value) = self.value {
            tx.value = Some(value);
        }
        if let Some(price) = self.gas_price {
            tx.gas_price = Some(price);
        }
        if let Some(max_fee) = self.max_fee_per_gas {
            tx.max_fee_per_gas = Some(max_fee);
        }
        if let Some(tip) = self.max_priority_fee_per_gas {
            tx.max_priority_fee_per_gas = Some(tip);
        }
        tx
    }
}

/// A fully encoded contract call, ready to be simulated or sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub calldata: Bytes,
    /// Canonical signature of the entry point, e.g. `approve(address,uint256)`.
    pub signature: &'static str,
}

impl ContractCall {
    pub fn new(to: Address, calldata: impl Into<Bytes>, signature: &'static str) -> Self {
        Self {
            to,
            calldata: calldata.into(),
            signature,
        }
    }

    /// Build the transaction request for this call with `options` applied.
    pub fn to_request(&self, options: &CallOptions) -> TransactionRequest {
        let tx = TransactionRequest::default()
            .to(self.to)
            .input(self.calldata.clone().into());
        options.apply(tx)
    }
}

/// Handle to a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionHandle {
    pub tx_hash: TxHash,
}

/// Parse an external amount string into a `U256`.
///
/// Accepts plain decimal (`"1654638431"`), hex (`"0x10"`) and scientific
/// notation (`"100e18"`, `"1.5e6"`). Scientific values must resolve to a
/// whole number.
pub fn parse_amount(amount: &str) -> Result<U256, SdkError> {
    let s = amount.trim();
    let invalid = |reason: &str| SdkError::InvalidArgument(format!("Invalid amount '{amount}': {reason}"));

    if s.is_empty() {
        return Err(invalid("empty"));
    }

    let is_hex = s.starts_with("0x") || s.starts_with("0X");
    if !is_hex {
        if let Some((mantissa, exponent)) = s.split_once(['e', 'E']) {
            let exponent: u32 = exponent.parse().map_err(|_| invalid("bad exponent"))?;
            let (int_part, frac_part) = match mantissa.split_once('.') {
                Some((_, frac_part)) if !is_digits(frac_part) => return Err(invalid("bad fraction")),
                Some(parts) => parts,
                None => (mantissa, ""),
            };
            if !is_digits(int_part) {
                return Err(invalid("bad mantissa"));
            }
            let digits = format!("{int_part}{frac_part}");
            let base = U256::from_str_radix(&digits, 10).map_err(|e| invalid(&e.to_string()))?;
            if base.is_zero() {
                return Ok(U256::ZERO);
            }
            if exponent < frac_part.len() as u32 {
                return Err(invalid("not a whole number"));
            }
            let scale = U256::from(10u64)
                .checked_pow(U256::from(exponent - frac_part.len() as u32))
                .ok_or_else(|| invalid("overflow"))?;
            return base.checked_mul(scale).ok_or_else(|| invalid("overflow"));
        }
    }

    if is_hex && s.len() == 2 {
        return Err(invalid("no hex digits"));
    }
    U256::from_str(s).map_err(|e| invalid(&e.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an amount for a `uint128` argument.
pub fn parse_amount_u128(amount: &str) -> Result<u128, SdkError> {
    let value = parse_amount(amount)?;
    u128::try_from(value).map_err(|_| {
        SdkError::InvalidArgument(format!("Invalid amount '{amount}': does not fit in uint128"))
    })
}

/// A Swivel order as delivered by the off-chain order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    pub key: String,
    pub protocol: u8,
    pub maker: Address,
    pub underlying: Address,
    pub vault: bool,
    pub exit: bool,
    pub principal: String,
    pub premium: String,
    pub maturity: String,
    pub expiry: String,
}

/// Convert an order-book order into its on-chain form.
pub fn parse_order(raw: &RawOrder) -> Result<Order, SdkError> {
    Ok(Order {
        key: parse_bytes32(&raw.key)?,
        protocol: raw.protocol,
        maker: raw.maker,
        underlying: raw.underlying,
        vault: raw.vault,
        exit: raw.exit,
        principal: parse_amount(&raw.principal)?,
        premium: parse_amount(&raw.premium)?,
        maturity: parse_amount(&raw.maturity)?,
        expiry: parse_amount(&raw.expiry)?,
    })
}

/// Split a 65-byte `r || s || v` hex signature into its components.
///
/// Legacy `v` values of 0/1 are normalised to 27/28.
pub fn parse_signature(signature: &str) -> Result<Components, SdkError> {
    let stripped = signature.strip_prefix("0x").unwrap_or(signature);
    let bytes = hex::decode(stripped)
        .map_err(|e| SdkError::InvalidArgument(format!("Invalid signature hex: {e}")))?;
    if bytes.len() != 65 {
        return Err(SdkError::InvalidArgument(format!(
            "Signature must be 65 bytes, got {}",
            bytes.len()
        )));
    }
    let v = match bytes[64] {
        v @ 0..=1 => v + 27,
        v => v,
    };
    Ok(Components {
        v,
        r: B256::from_slice(&bytes[..32]),
        s: B256::from_slice(&bytes[32..64]),
    })
}

/// Parse a hex string into a fixed 32-byte value.
pub fn parse_bytes32(value: &str) -> Result<FixedBytes<32>, SdkError> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(stripped)
        .map_err(|e| SdkError::InvalidArgument(format!("Invalid bytes32 hex: {e}")))?;
    if bytes.len() != 32 {
        return Err(SdkError::InvalidArgument(format!(
            "bytes32 must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    Ok(FixedBytes::from_slice(&bytes))
}

/// Unix timestamp `secs` seconds from now, for deadline arguments.
pub fn deadline_in(secs: u64) -> U256 {
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    U256::from(now.saturating_add(secs))
}

//! Overload resolution for `Lender.lend` and `Redeemer.redeem`.
//!
//! Each principal reaches the Lender through a differently shaped `lend`
//! overload, and calling by name alone is ambiguous. A [`LendRequest`]
//! variant carries exactly the arguments its principal's overload takes,
//! and [`LendRequest::encode`] builds that overload's calldata. The
//! principal → signature registry is an exhaustive match, so adding a
//! principal without wiring its overload does not compile.

use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};

use crate::contracts::{
    Components, LendDirectCall, LendElementCall, LendPendleCall, LendPoolCall, LendSenseCall,
    LendSwapCall, LendSwivelCall, Order, RedeemIlluminateCall, RedeemPrincipalCall,
    RedeemSenseCall,
};
use crate::error::SdkError;
use crate::types::{
    Principal, RawOrder, deadline_in, parse_amount, parse_amount_u128, parse_order,
    parse_signature,
};

const DEFAULT_DEADLINE_SECS: u64 = 86_400;

impl Principal {
    /// Canonical signature of the `lend` overload used for this principal.
    pub fn lend_signature(self) -> Result<&'static str, SdkError> {
        match self {
            Principal::Illuminate | Principal::Yield => Ok(LendPoolCall::SIGNATURE),
            Principal::Swivel => Ok(LendSwivelCall::SIGNATURE),
            Principal::Element => Ok(LendElementCall::SIGNATURE),
            Principal::Pendle => Ok(LendPendleCall::SIGNATURE),
            Principal::Tempus | Principal::Apwine => Ok(LendSwapCall::SIGNATURE),
            Principal::Sense => Ok(LendSenseCall::SIGNATURE),
            Principal::Notional | Principal::Exactly => Ok(LendDirectCall::SIGNATURE),
            Principal::Term => Err(SdkError::UnsupportedPrincipal {
                principal: self,
                operation: "lend",
            }),
        }
    }

    /// Canonical signature of the `redeem` overload used for this principal.
    pub fn redeem_signature(self) -> &'static str {
        match self {
            Principal::Illuminate => RedeemIlluminateCall::SIGNATURE,
            Principal::Sense => RedeemSenseCall::SIGNATURE,
            Principal::Swivel
            | Principal::Yield
            | Principal::Element
            | Principal::Pendle
            | Principal::Tempus
            | Principal::Apwine
            | Principal::Notional
            | Principal::Exactly
            | Principal::Term => RedeemPrincipalCall::SIGNATURE,
        }
    }
}

/// Calldata for one resolved overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedCall {
    pub principal: Principal,
    pub signature: &'static str,
    pub calldata: Bytes,
}

/// Lend through a yieldspace pool: Illuminate and Yield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolLend {
    pub underlying: Address,
    pub maturity: String,
    pub amount: String,
    pub pool: Address,
}

/// Fill Swivel orders. `amounts`, `orders` and `signatures` are parallel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwivelLend {
    pub underlying: Address,
    pub maturity: String,
    pub amounts: Vec<String>,
    pub pool: Address,
    pub orders: Vec<RawOrder>,
    pub signatures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementLend {
    pub underlying: Address,
    pub maturity: String,
    pub amount: String,
    pub min_return: String,
    /// Unset deadlines default to one day from now.
    #[serde(default)]
    pub deadline: Option<String>,
    pub pool: Address,
    pub pool_id: B256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendleLend {
    pub underlying: Address,
    pub maturity: String,
    pub amount: String,
    pub min_return: String,
    /// Unset deadlines default to one day from now.
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Swap into principal tokens through an AMM pool: Tempus and APWine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapLend {
    pub underlying: Address,
    pub maturity: String,
    pub amount: String,
    pub min_return: String,
    /// Unset deadlines default to one day from now.
    #[serde(default)]
    pub deadline: Option<String>,
    pub pool: Address,
}

/// Sense takes a `uint128` amount; larger values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenseLend {
    pub underlying: Address,
    pub maturity: String,
    pub amount: String,
    pub min_return: String,
    pub periphery: Address,
    pub adapter: Address,
}

/// Lend with no routing arguments: Notional and Exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectLend {
    pub underlying: Address,
    pub maturity: String,
    pub amount: String,
}

/// A `lend` call for one principal. Term has no `lend` overload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "principal", rename_all = "snake_case")]
pub enum LendRequest {
    Illuminate(PoolLend),
    Yield(PoolLend),
    Swivel(SwivelLend),
    Element(ElementLend),
    Pendle(PendleLend),
    Tempus(SwapLend),
    Apwine(SwapLend),
    Sense(SenseLend),
    Notional(DirectLend),
    Exactly(DirectLend),
}

impl LendRequest {
    pub fn principal(&self) -> Principal {
        match self {
            LendRequest::Illuminate(_) => Principal::Illuminate,
            LendRequest::Yield(_) => Principal::Yield,
            LendRequest::Swivel(_) => Principal::Swivel,
            LendRequest::Element(_) => Principal::Element,
            LendRequest::Pendle(_) => Principal::Pendle,
            LendRequest::Tempus(_) => Principal::Tempus,
            LendRequest::Apwine(_) => Principal::Apwine,
            LendRequest::Sense(_) => Principal::Sense,
            LendRequest::Notional(_) => Principal::Notional,
            LendRequest::Exactly(_) => Principal::Exactly,
        }
    }

    pub fn underlying(&self) -> Address {
        match self {
            LendRequest::Illuminate(r) | LendRequest::Yield(r) => r.underlying,
            LendRequest::Swivel(r) => r.underlying,
            LendRequest::Element(r) => r.underlying,
            LendRequest::Pendle(r) => r.underlying,
            LendRequest::Tempus(r) | LendRequest::Apwine(r) => r.underlying,
            LendRequest::Sense(r) => r.underlying,
            LendRequest::Notional(r) | LendRequest::Exactly(r) => r.underlying,
        }
    }

    /// Convert the external arguments and encode the principal's overload.
    pub fn encode(&self) -> Result<DispatchedCall, SdkError> {
        let principal = self.principal();
        let p = principal.as_u8();

        let (signature, calldata) = match self {
            LendRequest::Illuminate(r) | LendRequest::Yield(r) => encode_call(LendPoolCall {
                p,
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                amount: parse_amount(&r.amount)?,
                pool: r.pool,
            }),
            LendRequest::Swivel(r) => {
                let (amounts, orders, signatures) = swivel_fills(r)?;
                encode_call(LendSwivelCall {
                    p,
                    underlying: r.underlying,
                    maturity: parse_amount(&r.maturity)?,
                    amounts,
                    pool: r.pool,
                    orders,
                    signatures,
                })
            }
            LendRequest::Element(r) => encode_call(LendElementCall {
                p,
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                amount: parse_amount(&r.amount)?,
                minReturn: parse_amount(&r.min_return)?,
                deadline: deadline(r.deadline.as_deref())?,
                pool: r.pool,
                poolId: r.pool_id,
            }),
            LendRequest::Pendle(r) => encode_call(LendPendleCall {
                p,
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                amount: parse_amount(&r.amount)?,
                minReturn: parse_amount(&r.min_return)?,
                deadline: deadline(r.deadline.as_deref())?,
            }),
            LendRequest::Tempus(r) | LendRequest::Apwine(r) => encode_call(LendSwapCall {
                p,
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                amount: parse_amount(&r.amount)?,
                minReturn: parse_amount(&r.min_return)?,
                deadline: deadline(r.deadline.as_deref())?,
                pool: r.pool,
            }),
            LendRequest::Sense(r) => encode_call(LendSenseCall {
                p,
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                amount: parse_amount_u128(&r.amount)?,
                minReturn: parse_amount(&r.min_return)?,
                periphery: r.periphery,
                adapter: r.adapter,
            }),
            LendRequest::Notional(r) | LendRequest::Exactly(r) => encode_call(LendDirectCall {
                p,
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                amount: parse_amount(&r.amount)?,
            }),
        };

        Ok(DispatchedCall {
            principal,
            signature,
            calldata,
        })
    }
}

/// The market a redemption targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub underlying: Address,
    pub maturity: String,
}

impl Market {
    pub fn new(underlying: Address, maturity: impl Into<String>) -> Self {
        Self {
            underlying,
            maturity: maturity.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenseRedeem {
    pub underlying: Address,
    pub maturity: String,
    /// Maturity of the Sense series, which can differ from the market's.
    pub series_maturity: String,
    pub amount: String,
    pub periphery: Address,
}

/// A `redeem` call for one principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "principal", rename_all = "snake_case")]
pub enum RedeemRequest {
    Illuminate(Market),
    Swivel(Market),
    Yield(Market),
    Element(Market),
    Pendle(Market),
    Tempus(Market),
    Apwine(Market),
    Notional(Market),
    Exactly(Market),
    Term(Market),
    Sense(SenseRedeem),
}

impl RedeemRequest {
    pub fn principal(&self) -> Principal {
        match self {
            RedeemRequest::Illuminate(_) => Principal::Illuminate,
            RedeemRequest::Swivel(_) => Principal::Swivel,
            RedeemRequest::Yield(_) => Principal::Yield,
            RedeemRequest::Element(_) => Principal::Element,
            RedeemRequest::Pendle(_) => Principal::Pendle,
            RedeemRequest::Tempus(_) => Principal::Tempus,
            RedeemRequest::Apwine(_) => Principal::Apwine,
            RedeemRequest::Notional(_) => Principal::Notional,
            RedeemRequest::Exactly(_) => Principal::Exactly,
            RedeemRequest::Term(_) => Principal::Term,
            RedeemRequest::Sense(_) => Principal::Sense,
        }
    }

    pub fn encode(&self) -> Result<DispatchedCall, SdkError> {
        let principal = self.principal();

        let (signature, calldata) = match self {
            RedeemRequest::Illuminate(m) => encode_call(RedeemIlluminateCall {
                underlying: m.underlying,
                maturity: parse_amount(&m.maturity)?,
            }),
            RedeemRequest::Sense(r) => encode_call(RedeemSenseCall {
                p: principal.as_u8(),
                underlying: r.underlying,
                maturity: parse_amount(&r.maturity)?,
                seriesMaturity: parse_amount(&r.series_maturity)?,
                amount: parse_amount(&r.amount)?,
                periphery: r.periphery,
            }),
            RedeemRequest::Swivel(m)
            | RedeemRequest::Yield(m)
            | RedeemRequest::Element(m)
            | RedeemRequest::Pendle(m)
            | RedeemRequest::Tempus(m)
            | RedeemRequest::Apwine(m)
            | RedeemRequest::Notional(m)
            | RedeemRequest::Exactly(m)
            | RedeemRequest::Term(m) => encode_call(RedeemPrincipalCall {
                p: principal.as_u8(),
                underlying: m.underlying,
                maturity: parse_amount(&m.maturity)?,
            }),
        };

        Ok(DispatchedCall {
            principal,
            signature,
            calldata,
        })
    }
}

fn deadline(value: Option<&str>) -> Result<U256, SdkError> {
    match value {
        Some(v) => parse_amount(v),
        None => Ok(deadline_in(DEFAULT_DEADLINE_SECS)),
    }
}

fn encode_call<C: SolCall>(call: C) -> (&'static str, Bytes) {
    (C::SIGNATURE, Bytes::from(call.abi_encode()))
}

type SwivelFills = (Vec<U256>, Vec<Order>, Vec<Components>);

fn swivel_fills(r: &SwivelLend) -> Result<SwivelFills, SdkError> {
    if r.amounts.len() != r.orders.len() || r.orders.len() != r.signatures.len() {
        return Err(SdkError::InvalidArgument(format!(
            "Swivel fills need parallel arrays, got {} amounts, {} orders, {} signatures",
            r.amounts.len(),
            r.orders.len(),
            r.signatures.len()
        )));
    }
    let amounts = r
        .amounts
        .iter()
        .map(|a| parse_amount(a))
        .collect::<Result<Vec<_>, _>>()?;
    let orders = r.orders.iter().map(parse_order).collect::<Result<Vec<_>, _>>()?;
    let signatures = r
        .signatures
        .iter()
        .map(|s| parse_signature(s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((amounts, orders, signatures))
}

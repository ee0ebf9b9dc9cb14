//! Lender client.
//!
//! `lend` routes a [`LendRequest`] to the principal's overload through the
//! dispatcher. `lend_with_payload` targets the adapter entry point with a
//! payload built by one of the [`crate::adapters`] encoders.

use alloy::primitives::{Address, Bytes, U256};
use tracing::debug;

use crate::binding::ContractBinding;
use crate::contracts::{ILender, LendPayloadCall};
use crate::dispatch::LendRequest;
use crate::error::SdkError;
use crate::types::{CallOptions, Principal, TransactionHandle, parse_amount};

#[derive(Debug, Clone)]
pub struct Lender {
    binding: ContractBinding,
}

impl Lender {
    pub fn new(binding: ContractBinding) -> Self {
        Self { binding }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    pub async fn admin(&self) -> Result<Address, SdkError> {
        self.binding.read(ILender::adminCall {}).await
    }

    pub async fn market_place(&self) -> Result<Address, SdkError> {
        self.binding.read(ILender::marketPlaceCall {}).await
    }

    pub async fn paused(&self, p: Principal) -> Result<bool, SdkError> {
        self.binding.read(ILender::pausedCall { p: p.as_u8() }).await
    }

    pub async fn feenominator(&self) -> Result<U256, SdkError> {
        self.binding.read(ILender::feenominatorCall {}).await
    }

    pub async fn fees(&self, underlying: Address) -> Result<U256, SdkError> {
        self.binding.read(ILender::feesCall { underlying }).await
    }

    /// Lend through the overload matching the request's principal.
    pub async fn lend(
        &self,
        request: &LendRequest,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let dispatched = request.encode()?;
        debug!(
            principal = %dispatched.principal,
            signature = dispatched.signature,
            "dispatching lend"
        );
        self.binding
            .send_raw(dispatched.calldata, dispatched.signature, options)
            .await
    }

    /// Lend through the principal's adapter with a pre-built payload.
    pub async fn lend_with_payload(
        &self,
        p: Principal,
        underlying: Address,
        maturity: &str,
        amounts: &[String],
        payload: Bytes,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = LendPayloadCall {
            p: p.as_u8(),
            underlying,
            maturity: parse_amount(maturity)?,
            amounts: amounts
                .iter()
                .map(|a| parse_amount(a))
                .collect::<Result<Vec<_>, _>>()?,
            payload,
        };
        self.binding.send(call, options).await
    }

    /// Mint Illuminate principal tokens by depositing `p` principal tokens.
    pub async fn mint(
        &self,
        p: Principal,
        underlying: Address,
        maturity: &str,
        amount: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = ILender::mintCall {
            p: p.as_u8(),
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount(amount)?,
        };
        self.binding.send(call, options).await
    }
}

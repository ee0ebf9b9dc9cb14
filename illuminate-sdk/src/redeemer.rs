//! Redeemer client. Redemption routes through the principal's `redeem`
//! overload in the same way lending does.

use alloy::primitives::{Address, Bytes, U256};
use tracing::debug;

use crate::binding::ContractBinding;
use crate::contracts::{IRedeemer, RedeemPayloadCall};
use crate::dispatch::RedeemRequest;
use crate::error::SdkError;
use crate::types::{CallOptions, Principal, TransactionHandle, parse_amount};

#[derive(Debug, Clone)]
pub struct Redeemer {
    binding: ContractBinding,
}

impl Redeemer {
    pub fn new(binding: ContractBinding) -> Self {
        Self { binding }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    pub async fn admin(&self) -> Result<Address, SdkError> {
        self.binding.read(IRedeemer::adminCall {}).await
    }

    pub async fn lender(&self) -> Result<Address, SdkError> {
        self.binding.read(IRedeemer::lenderCall {}).await
    }

    pub async fn market_place(&self) -> Result<Address, SdkError> {
        self.binding.read(IRedeemer::marketPlaceCall {}).await
    }

    /// Underlying held for the market after external redemptions.
    pub async fn holdings(&self, underlying: Address, maturity: &str) -> Result<U256, SdkError> {
        let call = IRedeemer::holdingsCall {
            underlying,
            maturity: parse_amount(maturity)?,
        };
        self.binding.read(call).await
    }

    pub async fn paused(&self, underlying: Address, maturity: &str) -> Result<bool, SdkError> {
        let call = IRedeemer::pausedCall {
            underlying,
            maturity: parse_amount(maturity)?,
        };
        self.binding.read(call).await
    }

    /// Redeem through the overload matching the request's principal.
    pub async fn redeem(
        &self,
        request: &RedeemRequest,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let dispatched = request.encode()?;
        debug!(
            principal = %dispatched.principal,
            signature = dispatched.signature,
            "dispatching redeem"
        );
        self.binding
            .send_raw(dispatched.calldata, dispatched.signature, options)
            .await
    }

    /// Redeem through the principal's adapter with a pre-built payload.
    pub async fn redeem_with_payload(
        &self,
        p: Principal,
        underlying: Address,
        maturity: &str,
        payload: Bytes,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = RedeemPayloadCall {
            p: p.as_u8(),
            underlying,
            maturity: parse_amount(maturity)?,
            payload,
        };
        self.binding.send(call, options).await
    }

    /// Redeem Illuminate principal tokens on behalf of `owners`.
    pub async fn auto_redeem(
        &self,
        underlying: Address,
        maturity: &str,
        owners: Vec<Address>,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IRedeemer::autoRedeemCall {
            underlying,
            maturity: parse_amount(maturity)?,
            owners,
        };
        self.binding.send(call, options).await
    }
}

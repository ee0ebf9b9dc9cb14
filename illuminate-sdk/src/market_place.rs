//! MarketPlace client: market registry, principal token lookups and the
//! yieldspace pool trades and liquidity operations.

use alloy::primitives::{Address, U256};

use crate::binding::ContractBinding;
use crate::contracts::IMarketPlace;
use crate::error::SdkError;
use crate::types::{CallOptions, Principal, TransactionHandle, parse_amount, parse_amount_u128};

/// Pool ratio bounds accepted by the liquidity operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioBounds {
    pub min_ratio: String,
    pub max_ratio: String,
}

impl RatioBounds {
    pub fn new(min_ratio: impl Into<String>, max_ratio: impl Into<String>) -> Self {
        Self {
            min_ratio: min_ratio.into(),
            max_ratio: max_ratio.into(),
        }
    }

    fn parse(&self) -> Result<(U256, U256), SdkError> {
        Ok((parse_amount(&self.min_ratio)?, parse_amount(&self.max_ratio)?))
    }
}

#[derive(Debug, Clone)]
pub struct MarketPlace {
    binding: ContractBinding,
}

impl MarketPlace {
    pub fn new(binding: ContractBinding) -> Self {
        Self { binding }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    pub async fn admin(&self) -> Result<Address, SdkError> {
        self.binding.read(IMarketPlace::adminCall {}).await
    }

    pub async fn lender(&self) -> Result<Address, SdkError> {
        self.binding.read(IMarketPlace::lenderCall {}).await
    }

    pub async fn redeemer(&self) -> Result<Address, SdkError> {
        self.binding.read(IMarketPlace::redeemerCall {}).await
    }

    /// Principal token registered for `p` in the market.
    pub async fn token(
        &self,
        underlying: Address,
        maturity: &str,
        p: Principal,
    ) -> Result<Address, SdkError> {
        let call = IMarketPlace::tokenCall {
            underlying,
            maturity: parse_amount(maturity)?,
            p: U256::from(p.as_u8()),
        };
        self.binding.read(call).await
    }

    pub async fn pools(&self, underlying: Address, maturity: &str) -> Result<Address, SdkError> {
        let call = IMarketPlace::poolsCall {
            underlying,
            maturity: parse_amount(maturity)?,
        };
        self.binding.read(call).await
    }

    /// Create a market. `tokens` holds one principal token per external
    /// principal, in discriminant order starting at Swivel.
    pub async fn create_market(
        &self,
        underlying: Address,
        maturity: &str,
        tokens: Vec<Address>,
        name: &str,
        symbol: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::createMarketCall {
            underlying,
            maturity: parse_amount(maturity)?,
            tokens,
            name: name.to_string(),
            symbol: symbol.to_string(),
        };
        self.binding.send(call, options).await
    }

    pub async fn set_principal(
        &self,
        p: Principal,
        underlying: Address,
        maturity: &str,
        principal_token: Address,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::setPrincipalCall {
            p: p.as_u8(),
            underlying,
            maturity: parse_amount(maturity)?,
            principalToken: principal_token,
        };
        self.binding.send(call, options).await
    }

    pub async fn set_pool(
        &self,
        underlying: Address,
        maturity: &str,
        pool: Address,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::setPoolCall {
            underlying,
            maturity: parse_amount(maturity)?,
            pool,
        };
        self.binding.send(call, options).await
    }

    pub async fn sell_principal_token(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        minimum: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::sellPrincipalTokenCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount_u128(amount)?,
            minimum: parse_amount_u128(minimum)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn buy_principal_token(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        maximum: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::buyPrincipalTokenCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount_u128(amount)?,
            maximum: parse_amount_u128(maximum)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn sell_underlying(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        minimum: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::sellUnderlyingCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount_u128(amount)?,
            minimum: parse_amount_u128(minimum)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn buy_underlying(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        maximum: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IMarketPlace::buyUnderlyingCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount_u128(amount)?,
            maximum: parse_amount_u128(maximum)?,
        };
        self.binding.send(call, options).await
    }

    /// Add liquidity with both underlying and principal tokens.
    pub async fn mint(
        &self,
        underlying: Address,
        maturity: &str,
        base_amount: &str,
        principal_amount: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let (min_ratio, max_ratio) = bounds.parse()?;
        let call = IMarketPlace::mintCall {
            underlying,
            maturity: parse_amount(maturity)?,
            baseAmount: parse_amount(base_amount)?,
            principalAmount: parse_amount(principal_amount)?,
            minRatio: min_ratio,
            maxRatio: max_ratio,
        };
        self.binding.send(call, options).await
    }

    /// Add liquidity from underlying only, buying `principal_amount` PTs
    /// from the pool first.
    pub async fn mint_with_underlying(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        principal_amount: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let (min_ratio, max_ratio) = bounds.parse()?;
        let call = IMarketPlace::mintWithUnderlyingCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount(amount)?,
            principalAmount: parse_amount(principal_amount)?,
            minRatio: min_ratio,
            maxRatio: max_ratio,
        };
        self.binding.send(call, options).await
    }

    pub async fn burn(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let (min_ratio, max_ratio) = bounds.parse()?;
        let call = IMarketPlace::burnCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount(amount)?,
            minRatio: min_ratio,
            maxRatio: max_ratio,
        };
        self.binding.send(call, options).await
    }

    pub async fn burn_for_underlying(
        &self,
        underlying: Address,
        maturity: &str,
        amount: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let (min_ratio, max_ratio) = bounds.parse()?;
        let call = IMarketPlace::burnForUnderlyingCall {
            underlying,
            maturity: parse_amount(maturity)?,
            amount: parse_amount(amount)?,
            minRatio: min_ratio,
            maxRatio: max_ratio,
        };
        self.binding.send(call, options).await
    }
}

//! Strategy vault client. A strategy is itself an ERC-20 share token that
//! provides liquidity to one market and can roll into the next maturity.

use alloy::primitives::{Address, U256};

use crate::binding::ContractBinding;
use crate::contracts::IStrategy;
use crate::erc20::Erc20;
use crate::error::SdkError;
use crate::market_place::RatioBounds;
use crate::types::{CallOptions, TransactionHandle, parse_amount};

#[derive(Debug, Clone)]
pub struct Strategy {
    binding: ContractBinding,
    token: Erc20,
}

impl Strategy {
    pub fn new(binding: ContractBinding) -> Self {
        let token = Erc20::new(binding.clone());
        Self { binding, token }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    /// The strategy's share token.
    pub fn token(&self) -> &Erc20 {
        &self.token
    }

    pub async fn underlying(&self) -> Result<Address, SdkError> {
        self.binding.read(IStrategy::underlyingCall {}).await
    }

    pub async fn maturity(&self) -> Result<U256, SdkError> {
        self.binding.read(IStrategy::maturityCall {}).await
    }

    pub async fn pool(&self) -> Result<Address, SdkError> {
        self.binding.read(IStrategy::poolCall {}).await
    }

    pub async fn total_assets(&self) -> Result<U256, SdkError> {
        self.binding.read(IStrategy::totalAssetsCall {}).await
    }

    pub async fn preview_deposit(&self, assets: &str) -> Result<U256, SdkError> {
        let call = IStrategy::previewDepositCall {
            assets: parse_amount(assets)?,
        };
        self.binding.read(call).await
    }

    pub async fn preview_withdraw(&self, shares: &str) -> Result<U256, SdkError> {
        let call = IStrategy::previewWithdrawCall {
            shares: parse_amount(shares)?,
        };
        self.binding.read(call).await
    }

    pub async fn deposit(
        &self,
        assets: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IStrategy::depositCall {
            assets: parse_amount(assets)?,
            minRatio: parse_amount(&bounds.min_ratio)?,
            maxRatio: parse_amount(&bounds.max_ratio)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn withdraw(
        &self,
        shares: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IStrategy::withdrawCall {
            shares: parse_amount(shares)?,
            minRatio: parse_amount(&bounds.min_ratio)?,
            maxRatio: parse_amount(&bounds.max_ratio)?,
        };
        self.binding.send(call, options).await
    }

    /// Move the strategy's liquidity into the market maturing at
    /// `next_maturity`.
    pub async fn rollover(
        &self,
        next_maturity: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IStrategy::rolloverCall {
            nextMaturity: parse_amount(next_maturity)?,
            minRatio: parse_amount(&bounds.min_ratio)?,
            maxRatio: parse_amount(&bounds.max_ratio)?,
        };
        self.binding.send(call, options).await
    }
}

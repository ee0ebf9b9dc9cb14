//! Routers that deposit into and withdraw from strategies in one call.
//!
//! [`EthStrategyRouter`] wraps ETH into WETH on the way in, so its deposit
//! carries the amount as transaction value instead of an argument.

use alloy::primitives::{Address, U256};

use crate::binding::ContractBinding;
use crate::contracts::{IETHStrategyRouter, IStrategyRouter};
use crate::error::SdkError;
use crate::market_place::RatioBounds;
use crate::types::{CallOptions, TransactionHandle, parse_amount};

#[derive(Debug, Clone)]
pub struct StrategyRouter {
    binding: ContractBinding,
}

impl StrategyRouter {
    pub fn new(binding: ContractBinding) -> Self {
        Self { binding }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    pub async fn deposit(
        &self,
        strategy: Address,
        assets: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IStrategyRouter::depositCall {
            strategy,
            assets: parse_amount(assets)?,
            minRatio: parse_amount(&bounds.min_ratio)?,
            maxRatio: parse_amount(&bounds.max_ratio)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn withdraw(
        &self,
        strategy: Address,
        shares: &str,
        minimum_out: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IStrategyRouter::withdrawCall {
            strategy,
            shares: parse_amount(shares)?,
            minimumOut: parse_amount(minimum_out)?,
        };
        self.binding.send(call, options).await
    }
}

#[derive(Debug, Clone)]
pub struct EthStrategyRouter {
    binding: ContractBinding,
}

impl EthStrategyRouter {
    pub fn new(binding: ContractBinding) -> Self {
        Self { binding }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    pub async fn weth(&self) -> Result<Address, SdkError> {
        self.binding.read(IETHStrategyRouter::wethCall {}).await
    }

    /// Deposit `amount` wei. Any `value` already set in `options` is
    /// replaced.
    pub async fn deposit(
        &self,
        strategy: Address,
        amount: &str,
        bounds: &RatioBounds,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let value: U256 = parse_amount(amount)?;
        let call = IETHStrategyRouter::depositCall {
            strategy,
            minRatio: parse_amount(&bounds.min_ratio)?,
            maxRatio: parse_amount(&bounds.max_ratio)?,
        };
        self.binding.send(call, options.with_value(value)).await
    }

    pub async fn withdraw(
        &self,
        strategy: Address,
        shares: &str,
        minimum_out: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IETHStrategyRouter::withdrawCall {
            strategy,
            shares: parse_amount(shares)?,
            minimumOut: parse_amount(minimum_out)?,
        };
        self.binding.send(call, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    use crate::binding::testing::binding;

    const STRATEGY: Address = Address::repeat_byte(0x60);

    #[tokio::test]
    async fn test_deposit() {
        let (binding, _, executor) = binding(Address::repeat_byte(0x70));
        let router = StrategyRouter::new(binding);
        router
            .deposit(
                STRATEGY,
                "2500",
                &RatioBounds::new("1", "2"),
                CallOptions::default(),
            )
            .await
            .unwrap();

        let recorded = executor.last().await.unwrap();
        let decoded = IStrategyRouter::depositCall::abi_decode(&recorded.call.calldata).unwrap();
        assert_eq!(decoded.strategy, STRATEGY);
        assert_eq!(decoded.assets, U256::from(2500u64));
        assert_eq!(recorded.options.value, None);
    }

    #[tokio::test]
    async fn test_eth_deposit_sends_value() {
        let (binding, _, executor) = binding(Address::repeat_byte(0x71));
        let router = EthStrategyRouter::new(binding);
        router
            .deposit(
                STRATEGY,
                "1e18",
                &RatioBounds::new("0", "1e18"),
                CallOptions::default().with_value(U256::from(1u64)),
            )
            .await
            .unwrap();

        let recorded = executor.last().await.unwrap();
        assert_eq!(
            recorded.call.signature,
            "deposit(address,uint256,uint256)"
        );
        assert_eq!(
            recorded.options.value,
            Some(U256::from(10u64).pow(U256::from(18u64)))
        );
    }

    #[tokio::test]
    async fn test_eth_withdraw() {
        let (binding, _, executor) = binding(Address::repeat_byte(0x71));
        let router = EthStrategyRouter::new(binding);
        router
            .withdraw(STRATEGY, "10", "9", CallOptions::default())
            .await
            .unwrap();

        let recorded = executor.last().await.unwrap();
        let decoded =
            IETHStrategyRouter::withdrawCall::abi_decode(&recorded.call.calldata).unwrap();
        assert_eq!(decoded.minimumOut, U256::from(9u64));
    }
}

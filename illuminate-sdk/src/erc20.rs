//! ERC-20 token client, used for principal tokens, strategy shares and
//! approvals ahead of lending.

use alloy::primitives::{Address, U256};

use crate::binding::ContractBinding;
use crate::contracts::IERC20;
use crate::error::SdkError;
use crate::types::{CallOptions, TransactionHandle, parse_amount};

#[derive(Debug, Clone)]
pub struct Erc20 {
    binding: ContractBinding,
}

impl Erc20 {
    pub fn new(binding: ContractBinding) -> Self {
        Self { binding }
    }

    pub fn address(&self) -> Address {
        self.binding.address()
    }

    pub fn binding(&self) -> &ContractBinding {
        &self.binding
    }

    pub async fn name(&self) -> Result<String, SdkError> {
        self.binding.read(IERC20::nameCall {}).await
    }

    pub async fn symbol(&self) -> Result<String, SdkError> {
        self.binding.read(IERC20::symbolCall {}).await
    }

    pub async fn decimals(&self) -> Result<u8, SdkError> {
        self.binding.read(IERC20::decimalsCall {}).await
    }

    pub async fn total_supply(&self) -> Result<U256, SdkError> {
        self.binding.read(IERC20::totalSupplyCall {}).await
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, SdkError> {
        self.binding.read(IERC20::balanceOfCall { account }).await
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, SdkError> {
        self.binding
            .read(IERC20::allowanceCall { owner, spender })
            .await
    }

    pub async fn approve(
        &self,
        spender: Address,
        amount: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IERC20::approveCall {
            spender,
            amount: parse_amount(amount)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn transfer(
        &self,
        to: Address,
        amount: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IERC20::transferCall {
            to,
            amount: parse_amount(amount)?,
        };
        self.binding.send(call, options).await
    }

    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        amount: &str,
        options: CallOptions,
    ) -> Result<TransactionHandle, SdkError> {
        let call = IERC20::transferFromCall {
            from,
            to,
            amount: parse_amount(amount)?,
        };
        self.binding.send(call, options).await
    }
}

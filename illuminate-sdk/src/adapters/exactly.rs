use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("market", "address"),
];

pub const REDEEM_ABI: &[AbiParam] = &[AbiParam::new("minimumAssets", "uint256")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactlyLendArgs {
    pub minimum: U256,
    pub market: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactlyRedeemArgs {
    pub minimum_assets: U256,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExactlyLendEncoder;

impl ParameterEncoder<ExactlyLendArgs> for ExactlyLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &ExactlyLendArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from((args.minimum, args.market).abi_encode_params()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExactlyRedeemEncoder;

impl ParameterEncoder<ExactlyRedeemArgs> for ExactlyRedeemEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        REDEEM_ABI
    }

    fn encode(&self, args: &ExactlyRedeemArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from((args.minimum_assets,).abi_encode_params()))
    }
}

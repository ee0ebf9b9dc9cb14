//! Sense series, addressed by periphery, adapter and series maturity.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("periphery", "address"),
    AbiParam::new("adapter", "address"),
    AbiParam::new("seriesMaturity", "uint256"),
];

pub const REDEEM_ABI: &[AbiParam] = &[
    AbiParam::new("seriesMaturity", "uint256"),
    AbiParam::new("adapter", "address"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseLendArgs {
    pub minimum: U256,
    pub periphery: Address,
    pub adapter: Address,
    pub series_maturity: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseRedeemArgs {
    pub series_maturity: U256,
    pub adapter: Address,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SenseLendEncoder;

impl ParameterEncoder<SenseLendArgs> for SenseLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &SenseLendArgs) -> Result<Bytes, SdkError> {
        let payload =
            (args.minimum, args.periphery, args.adapter, args.series_maturity).abi_encode_params();
        Ok(Bytes::from(payload))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SenseRedeemEncoder;

impl ParameterEncoder<SenseRedeemArgs> for SenseRedeemEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        REDEEM_ABI
    }

    fn encode(&self, args: &SenseRedeemArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from((args.series_maturity, args.adapter).abi_encode_params()))
    }
}

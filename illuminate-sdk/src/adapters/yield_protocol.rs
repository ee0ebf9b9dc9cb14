//! Yield Space pools.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("pool", "address"),
];

/// Arguments in call order. The adapter expects `(minimum, pool)` on the
/// wire, so the encoder swaps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldLendArgs {
    pub pool: Address,
    pub minimum: U256,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YieldLendEncoder;

impl ParameterEncoder<YieldLendArgs> for YieldLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &YieldLendArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from((args.minimum, args.pool).abi_encode_params()))
    }
}

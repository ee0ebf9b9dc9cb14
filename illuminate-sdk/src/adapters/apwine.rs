//! APWine AMM, where `index` selects the pair within the pool.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("pool", "address"),
    AbiParam::new("index", "uint256"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApwineLendArgs {
    pub minimum: U256,
    pub pool: Address,
    pub index: U256,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApwineLendEncoder;

impl ParameterEncoder<ApwineLendArgs> for ApwineLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &ApwineLendArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from(
            (args.minimum, args.pool, args.index).abi_encode_params(),
        ))
    }
}

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("pool", "address"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempusLendArgs {
    pub minimum: U256,
    pub pool: Address,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TempusLendEncoder;

impl ParameterEncoder<TempusLendArgs> for TempusLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &TempusLendArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from((args.minimum, args.pool).abi_encode_params()))
    }
}

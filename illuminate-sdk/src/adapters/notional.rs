use alloy::primitives::{Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[AbiParam::new("minimum", "uint256")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotionalLendArgs {
    pub minimum: U256,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotionalLendEncoder;

impl ParameterEncoder<NotionalLendArgs> for NotionalLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &NotionalLendArgs) -> Result<Bytes, SdkError> {
        Ok(Bytes::from((args.minimum,).abi_encode_params()))
    }
}

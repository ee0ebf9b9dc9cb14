//! Element Finance: swaps through a Balancer pool identified by `poolId`.

use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("deadline", "uint256"),
    AbiParam::new("pool", "address"),
    AbiParam::new("poolId", "bytes32"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLendArgs {
    pub minimum: U256,
    pub deadline: U256,
    pub pool: Address,
    pub pool_id: B256,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ElementLendEncoder;

impl ParameterEncoder<ElementLendArgs> for ElementLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &ElementLendArgs) -> Result<Bytes, SdkError> {
        let payload = (args.minimum, args.deadline, args.pool, args.pool_id).abi_encode_params();
        Ok(Bytes::from(payload))
    }
}

//! Swivel: fills signed order-book orders, optionally swapping the
//! remainder through the market's pool.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::contracts::{Components, Order};
use crate::error::SdkError;
use crate::types::{RawOrder, parse_amount, parse_order, parse_signature};

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new(
        "orders",
        "(bytes32,uint8,address,address,bool,bool,uint256,uint256,uint256,uint256)[]",
    ),
    AbiParam::new("signatures", "(uint8,bytes32,bytes32)[]"),
    AbiParam::new("pool", "address"),
    AbiParam::new("swapMinimum", "uint256"),
    AbiParam::new("swapFlag", "bool"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwivelLendArgs {
    pub orders: Vec<Order>,
    pub signatures: Vec<Components>,
    pub pool: Address,
    pub swap_minimum: U256,
    pub swap_flag: bool,
}

impl SwivelLendArgs {
    /// Normalise order-book orders and hex signatures into wire form.
    pub fn from_raw(
        orders: &[RawOrder],
        signatures: &[String],
        pool: Address,
        swap_minimum: &str,
        swap_flag: bool,
    ) -> Result<Self, SdkError> {
        if orders.len() != signatures.len() {
            return Err(SdkError::InvalidArgument(format!(
                "{} orders but {} signatures",
                orders.len(),
                signatures.len()
            )));
        }
        Ok(Self {
            orders: orders.iter().map(parse_order).collect::<Result<_, _>>()?,
            signatures: signatures
                .iter()
                .map(|s| parse_signature(s))
                .collect::<Result<_, _>>()?,
            pool,
            swap_minimum: parse_amount(swap_minimum)?,
            swap_flag,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwivelLendEncoder;

impl ParameterEncoder<SwivelLendArgs> for SwivelLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &SwivelLendArgs) -> Result<Bytes, SdkError> {
        let payload = (
            args.orders.clone(),
            args.signatures.clone(),
            args.pool,
            args.swap_minimum,
            args.swap_flag,
        )
            .abi_encode_params();
        Ok(Bytes::from(payload))
    }
}

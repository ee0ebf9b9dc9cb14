//! Pendle V2 router payloads.
//!
//! Lending swaps the underlying into PT through the router's approximation
//! search; redeeming swaps PT back out. Both carry the router's own structs.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolValue;

use super::{AbiParam, ParameterEncoder};
use crate::error::SdkError;

sol! {
    #![sol(all_derives)]

    /// Bounds for the router's PT price search.
    struct ApproxParams {
        uint256 guessMin;
        uint256 guessMax;
        uint256 guessOffchain;
        uint256 maxIteration;
        uint256 eps;
    }

    /// Aggregator swap performed before or after the Pendle leg.
    struct SwapData {
        uint8 swapType;
        address extRouter;
        bytes extCalldata;
        bool needScale;
    }

    struct TokenInput {
        address tokenIn;
        uint256 netTokenIn;
        address tokenMintSy;
        address bulk;
        address pendleSwap;
        SwapData swapData;
    }

    struct TokenOutput {
        address tokenOut;
        uint256 minTokenOut;
        address tokenRedeemSy;
        address bulk;
        address pendleSwap;
        SwapData swapData;
    }
}

pub const LEND_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("market", "address"),
    AbiParam::new("approxParams", "(uint256,uint256,uint256,uint256,uint256)"),
    AbiParam::new(
        "input",
        "(address,uint256,address,address,address,(uint8,address,bytes,bool))",
    ),
];

pub const REDEEM_ABI: &[AbiParam] = &[
    AbiParam::new("minimum", "uint256"),
    AbiParam::new("market", "address"),
    AbiParam::new(
        "output",
        "(address,uint256,address,address,address,(uint8,address,bytes,bool))",
    ),
];

impl ApproxParams {
    /// Let the router search the whole range with its default precision.
    pub fn unbounded() -> Self {
        Self {
            guessMin: U256::ZERO,
            guessMax: U256::MAX,
            guessOffchain: U256::ZERO,
            maxIteration: U256::from(256u64),
            eps: U256::from(10u64).pow(U256::from(15u64)),
        }
    }
}

impl SwapData {
    /// No aggregator leg.
    pub fn none() -> Self {
        Self {
            swapType: 0,
            extRouter: Address::ZERO,
            extCalldata: Bytes::new(),
            needScale: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendleLendArgs {
    pub minimum: U256,
    pub market: Address,
    pub approx_params: ApproxParams,
    pub input: TokenInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendleRedeemArgs {
    pub minimum: U256,
    pub market: Address,
    pub output: TokenOutput,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PendleLendEncoder;

impl ParameterEncoder<PendleLendArgs> for PendleLendEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        LEND_ABI
    }

    fn encode(&self, args: &PendleLendArgs) -> Result<Bytes, SdkError> {
        let payload = (
            args.minimum,
            args.market,
            args.approx_params.clone(),
            args.input.clone(),
        )
            .abi_encode_params();
        Ok(Bytes::from(payload))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PendleRedeemEncoder;

impl ParameterEncoder<PendleRedeemArgs> for PendleRedeemEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        REDEEM_ABI
    }

    fn encode(&self, args: &PendleRedeemArgs) -> Result<Bytes, SdkError> {
        let payload = (args.minimum, args.market, args.output.clone()).abi_encode_params();
        Ok(Bytes::from(payload))
    }
}

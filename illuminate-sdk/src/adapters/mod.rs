//! Payload encoders for the external lending-market adapters.
//!
//! The Lender and Redeemer accept an opaque `bytes payload` that the
//! principal's adapter contract decodes on-chain. Every encoder declares the
//! payload schema it produces ([`ParameterEncoder::abi`]) and encodes its
//! arguments in exactly that order, with no selector.

pub mod apwine;
pub mod element;
pub mod exactly;
pub mod notional;
pub mod pendle;
pub mod sense;
pub mod swivel;
pub mod tempus;
pub mod term;
pub mod yield_protocol;

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::Bytes;

use crate::error::SdkError;
use crate::types::Principal;

/// One named field of a payload schema. `ty` is the canonical Solidity
/// type, with structs written as tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiParam {
    pub name: &'static str,
    pub ty: &'static str,
}

impl AbiParam {
    pub const fn new(name: &'static str, ty: &'static str) -> Self {
        Self { name, ty }
    }
}

/// Canonical tuple type for a schema, e.g. `(uint256,address)`.
pub fn tuple_type(params: &[AbiParam]) -> String {
    let types: Vec<&str> = params.iter().map(|p| p.ty).collect();
    format!("({})", types.join(","))
}

/// Decode a payload against a schema. An empty schema accepts only an
/// empty payload.
pub fn decode_params(params: &[AbiParam], payload: &[u8]) -> Result<Vec<DynSolValue>, SdkError> {
    if params.is_empty() {
        if payload.is_empty() {
            return Ok(Vec::new());
        }
        return Err(SdkError::Abi(format!(
            "Expected empty payload, got {} bytes",
            payload.len()
        )));
    }
    let ty = DynSolType::parse(&tuple_type(params))?;
    match ty.abi_decode_params(payload)? {
        DynSolValue::Tuple(values) => Ok(values),
        value => Ok(vec![value]),
    }
}

/// Encodes typed arguments into an adapter payload.
pub trait ParameterEncoder<Args: ?Sized> {
    /// Schema of the produced payload, in wire order.
    fn abi(&self) -> &'static [AbiParam];

    fn encode(&self, args: &Args) -> Result<Bytes, SdkError>;

    fn decode(&self, payload: &[u8]) -> Result<Vec<DynSolValue>, SdkError> {
        decode_params(self.abi(), payload)
    }
}

/// Accepts anything and produces an empty payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEncoder;

impl<Args: ?Sized> ParameterEncoder<Args> for EmptyEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        EMPTY
    }

    fn encode(&self, _args: &Args) -> Result<Bytes, SdkError> {
        Ok(Bytes::new())
    }
}

/// Always fails: the principal's adapter has no such operation.
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedEncoder {
    pub principal: Principal,
    pub operation: &'static str,
}

impl<Args: ?Sized> ParameterEncoder<Args> for UnsupportedEncoder {
    fn abi(&self) -> &'static [AbiParam] {
        EMPTY
    }

    fn encode(&self, _args: &Args) -> Result<Bytes, SdkError> {
        Err(SdkError::UnsupportedOperation {
            principal: self.principal,
            operation: self.operation,
        })
    }
}

/// Lend and redeem payload schemas for one principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adapter {
    pub principal: Principal,
    /// `None` when the adapter cannot lend.
    pub lend: Option<&'static [AbiParam]>,
    pub redeem: &'static [AbiParam],
}

impl Adapter {
    /// Encode a lend payload from dynamic values given in schema order.
    pub fn encode_lend(&self, values: Vec<DynSolValue>) -> Result<Bytes, SdkError> {
        let schema = self.lend.ok_or(SdkError::UnsupportedOperation {
            principal: self.principal,
            operation: "lend",
        })?;
        encode_dynamic(schema, values)
    }

    /// Encode a redeem payload from dynamic values given in schema order.
    pub fn encode_redeem(&self, values: Vec<DynSolValue>) -> Result<Bytes, SdkError> {
        encode_dynamic(self.redeem, values)
    }
}

fn encode_dynamic(schema: &[AbiParam], values: Vec<DynSolValue>) -> Result<Bytes, SdkError> {
    if schema.is_empty() {
        return Ok(Bytes::new());
    }
    let ty = DynSolType::parse(&tuple_type(schema))?;
    let value = DynSolValue::Tuple(values);
    if !ty.matches(&value) {
        return Err(SdkError::InvalidArgument(format!(
            "Payload values do not match {}",
            tuple_type(schema)
        )));
    }
    Ok(Bytes::from(value.abi_encode_params()))
}

const EMPTY: &[AbiParam] = &[];

/// Payload schemas for `principal`.
pub fn adapter(principal: Principal) -> Adapter {
    let (lend, redeem) = match principal {
        Principal::Illuminate => (Some(EMPTY), EMPTY),
        Principal::Swivel => (Some(swivel::LEND_ABI), EMPTY),
        Principal::Yield => (Some(yield_protocol::LEND_ABI), EMPTY),
        Principal::Element => (Some(element::LEND_ABI), EMPTY),
        Principal::Pendle => (Some(pendle::LEND_ABI), pendle::REDEEM_ABI),
        Principal::Tempus => (Some(tempus::LEND_ABI), EMPTY),
        Principal::Sense => (Some(sense::LEND_ABI), sense::REDEEM_ABI),
        Principal::Apwine => (Some(apwine::LEND_ABI), EMPTY),
        Principal::Notional => (Some(notional::LEND_ABI), EMPTY),
        Principal::Exactly => (Some(exactly::LEND_ABI), exactly::REDEEM_ABI),
        Principal::Term => (None, EMPTY),
    };
    Adapter {
        principal,
        lend,
        redeem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    #[test]
    fn test_named_and_positional_schemas_encode_alike() {
        use alloy::dyn_abi::JsonAbiExt;
        use alloy::json_abi::Function;
        use alloy::primitives::B256;

        let cases = [
            (
                yield_protocol::LEND_ABI,
                vec![
                    DynSolValue::Uint(U256::from(990u64), 256),
                    DynSolValue::Address(Address::repeat_byte(0x0b)),
                ],
            ),
            (
                element::LEND_ABI,
                vec![
                    DynSolValue::Uint(U256::from(990u64), 256),
                    DynSolValue::Uint(U256::from(1_700_000_000u64), 256),
                    DynSolValue::Address(Address::repeat_byte(0x0b)),
                    DynSolValue::FixedBytes(B256::repeat_byte(0x09), 32),
                ],
            ),
        ];

        for (schema, values) in cases {
            let named: Vec<String> = schema.iter().map(|p| format!("{} {}", p.ty, p.name)).collect();
            let function = Function::parse(&format!("f({})", named.join(","))).unwrap();
            let names: Vec<&str> = function.inputs.iter().map(|p| p.name.as_str()).collect();
            let expected: Vec<&str> = schema.iter().map(|p| p.name).collect();
            assert_eq!(names, expected);

            let by_name = function.abi_encode_input(&values).unwrap();
            let by_position = DynSolValue::Tuple(values.clone()).abi_encode_params();
            assert_eq!(by_name[4..], by_position[..]);
            assert_eq!(encode_dynamic(schema, values).unwrap()[..], by_position[..]);
        }
    }

    #[test]
    fn test_every_principal_has_adapter() {
        for principal in Principal::ALL {
            let adapter = adapter(principal);
            assert_eq!(adapter.principal, principal);
            assert_eq!(adapter.lend.is_none(), principal == Principal::Term);
            for schema in adapter.lend.into_iter().chain([adapter.redeem]) {
                if !schema.is_empty() {
                    DynSolType::parse(&tuple_type(schema)).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_empty_encoder_ignores_args() {
        let payload = ParameterEncoder::<(U256, Address)>::encode(
            &EmptyEncoder,
            &(U256::from(1u64), Address::ZERO),
        )
        .unwrap();
        assert!(payload.is_empty());
        assert!(ParameterEncoder::<str>::encode(&EmptyEncoder, "anything").unwrap().is_empty());
        assert!(ParameterEncoder::<()>::decode(&EmptyEncoder, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_encoder_always_fails() {
        let encoder = UnsupportedEncoder {
            principal: Principal::Term,
            operation: "lend",
        };
        let err = ParameterEncoder::<()>::encode(&encoder, &()).unwrap_err();
        assert!(matches!(
            err,
            SdkError::UnsupportedOperation {
                principal: Principal::Term,
                operation: "lend"
            }
        ));
    }

    #[test]
    fn test_dynamic_encode_matches_typed() {
        use crate::adapters::notional::{NotionalLendArgs, NotionalLendEncoder};

        let typed = NotionalLendEncoder
            .encode(&NotionalLendArgs {
                minimum: U256::from(99u64),
            })
            .unwrap();
        let dynamic = adapter(Principal::Notional)
            .encode_lend(vec![DynSolValue::Uint(U256::from(99u64), 256)])
            .unwrap();
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn test_dynamic_encode_rejects_wrong_shape() {
        let err = adapter(Principal::Tempus)
            .encode_lend(vec![DynSolValue::Bool(true)])
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));

        let err = adapter(Principal::Term).encode_lend(vec![]).unwrap_err();
        assert!(matches!(err, SdkError::UnsupportedOperation { .. }));
        assert!(adapter(Principal::Term).encode_redeem(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_params_rejects_trailing_payload() {
        assert!(decode_params(&[], &[0u8; 32]).is_err());
    }
}

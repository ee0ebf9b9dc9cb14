//! Term Finance. Its adapter only redeems; lending through it is refused
//! before any payload is built.

use super::UnsupportedEncoder;
use crate::types::Principal;

pub const LEND: UnsupportedEncoder = UnsupportedEncoder {
    principal: Principal::Term,
    operation: "lend",
};

//! Shared value types.

use crate::constants::{PARAM_A, PARAM_B, PARAM_C};
use crate::precision::Decimal;

/// Parameter triple (A, B, C) of the corrected divisor
/// `L(x) = ln(x) - B + C / (ln(x) - A)`.
///
/// Immutable once built. The frozen triple was fitted offline against the
/// reference table; the evaluation API also accepts arbitrary triples so
/// alternative fits can be scored with the same machinery.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Pole location of the correction term.
    pub a: Decimal,
    /// Constant offset of the corrected divisor.
    pub b: Decimal,
    /// Strength of the correction term.
    pub c: Decimal,
}

impl Params {
    /// The frozen, pre-fitted triple.
    pub fn frozen() -> Self {
        Self {
            a: Decimal::from_str_native(PARAM_A).expect("frozen parameter literal"),
            b: Decimal::from_str_native(PARAM_B).expect("frozen parameter literal"),
            c: Decimal::from_str_native(PARAM_C).expect("frozen parameter literal"),
        }
    }

    /// Build a triple from explicit values.
    pub fn new(a: Decimal, b: Decimal, c: Decimal) -> Self {
        Self { a, b, c }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::frozen()
    }
}

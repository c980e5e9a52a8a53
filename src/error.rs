//! Error types.

use thiserror::Error;

use crate::reference::MAX_EXPONENT;

/// Errors surfaced by batch evaluation.
///
/// These are the only error conditions in the crate: both indicate a caller
/// asked for validation against ground truth that does not exist. All other
/// irregular numeric conditions (near-singular denominators, non-positive
/// corrected divisors, sub-floor precision requests) are absorbed by
/// deterministic fallback policies and never error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The requested range reaches past the end of the reference table.
    #[error("exponent {k} is beyond the reference table (last known value is pi(10^{limit}))")]
    ExponentOutOfRange {
        /// Requested exponent.
        k: u32,
        /// Largest exponent with a reference value.
        limit: u32,
    },

    /// The requested range contains no exponents.
    #[error("empty exponent range: k_min {k_min} > k_max {k_max}")]
    EmptyRange {
        /// Requested first exponent.
        k_min: u32,
        /// Requested last exponent.
        k_max: u32,
    },
}

impl EvalError {
    /// Out-of-range error for exponent `k` against the built-in table.
    pub(crate) fn out_of_range(k: u32) -> Self {
        Self::ExponentOutOfRange {
            k,
            limit: MAX_EXPONENT,
        }
    }
}

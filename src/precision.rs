//! Decimal arithmetic configuration.
//!
//! Every computation in this crate runs against a [`PrecisionContext`]: an
//! explicit, immutable value fixing the number of significant decimal digits
//! and the rounding rule (half-to-even). There is no process-global numeric
//! state; callers construct one context per run and pass it down.

use dashu::float::round::mode::HalfEven;
use dashu::float::FBig;
use dashu::integer::IBig;

use crate::constants::{LN_GUARD_DIGITS, MIN_PRECISION_DIGITS};

/// Arbitrary-precision decimal number.
///
/// Base-10 significand with per-value precision in decimal significant
/// digits, rounded half-to-even. Comparisons and equality are by numeric
/// value, independent of the stored precision.
pub type Decimal = FBig<HalfEven, 10>;

/// Immutable precision configuration for a run.
///
/// Construction clamps the requested precision to at least
/// [`MIN_PRECISION_DIGITS`]; under-provisioning is a lenient no-op rather
/// than an error, so no caller can starve the correction term of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionContext {
    digits: usize,
}

impl PrecisionContext {
    /// Create a context with `max(60, requested)` significant digits.
    pub fn new(requested: usize) -> Self {
        Self {
            digits: requested.max(MIN_PRECISION_DIGITS),
        }
    }

    /// Significant digits carried by results in this context.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Working precision for inner transcendental steps.
    ///
    /// Slightly wider than [`digits`](Self::digits) so that intermediate
    /// rounding never shows up in composed results.
    pub fn working_digits(&self) -> usize {
        self.digits + LN_GUARD_DIGITS
    }

    /// Round a value half-to-even to this context's precision.
    pub fn round(&self, x: Decimal) -> Decimal {
        x.with_precision(self.digits).value()
    }

    /// Exact power of ten `10^k`, carried at full context precision.
    pub fn pow10(&self, k: u32) -> Decimal {
        self.round(Decimal::from(IBig::from(10).pow(k as usize)))
    }
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_precision_is_clamped_to_floor() {
        assert_eq!(PrecisionContext::new(0).digits(), 60);
        assert_eq!(PrecisionContext::new(59).digits(), 60);
        assert_eq!(PrecisionContext::new(60).digits(), 60);
        assert_eq!(PrecisionContext::new(61).digits(), 61);
        assert_eq!(PrecisionContext::new(300).digits(), 300);
    }

    #[test]
    fn default_context_uses_default_precision() {
        assert_eq!(PrecisionContext::default().digits(), 300);
    }

    #[test]
    fn working_precision_is_wider() {
        let ctx = PrecisionContext::new(100);
        assert_eq!(ctx.working_digits(), 130);
    }

    #[test]
    fn pow10_is_exact() {
        let ctx = PrecisionContext::new(60);
        assert_eq!(ctx.pow10(0), Decimal::ONE);
        assert_eq!(ctx.pow10(3), Decimal::from(1000));
        assert_eq!(ctx.pow10(10), Decimal::from(10_000_000_000u64));
    }

    #[test]
    fn round_reduces_precision() {
        let ctx = PrecisionContext::new(60);
        let x = Decimal::from_str_native("0.333333333333333333333333333333333333333333333333333333333333333333333333")
            .unwrap();
        let rounded = ctx.round(x);
        assert_eq!(rounded.precision(), 60);
    }
}

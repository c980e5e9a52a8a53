//! Natural logarithm at configured precision.
//!
//! The estimator composes `ln(x)` into larger expressions, so the logarithm
//! must be accurate to the full configured precision. The provider trait is
//! the seam: the shipped implementation rides on dashu's native
//! arbitrary-precision decimal logarithm, evaluated at a widened working
//! precision and rounded back down. An alternative backend (for an
//! ecosystem without a native decimal log) would be a second impl of the
//! same trait, chosen at build time.

use dashu::float::round::mode::HalfEven;
use dashu::float::Context;

use crate::precision::{Decimal, PrecisionContext};

/// Natural logarithm of a positive decimal at context precision.
pub trait LogarithmProvider {
    /// Compute `ln(x)` accurate to `ctx.digits()` significant digits.
    ///
    /// Undefined for `x <= 0`; not a supported input.
    fn ln(&self, ctx: &PrecisionContext, x: &Decimal) -> Decimal;
}

/// Logarithm backed by dashu's native decimal `ln`.
///
/// Evaluates at `ctx.working_digits()` (the configured precision plus a
/// guard margin) so the final half-even rounding back to `ctx.digits()`
/// is the only rounding visible to callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalLn;

impl LogarithmProvider for DecimalLn {
    fn ln(&self, ctx: &PrecisionContext, x: &Decimal) -> Decimal {
        debug_assert!(*x > Decimal::ZERO, "ln is undefined for x <= 0");
        let wide = Context::<HalfEven>::new(ctx.working_digits());
        ctx.round(wide.ln(x.repr()).value())
    }
}

/// Build-time selection of the logarithm backend.
pub type DefaultLog = DecimalLn;

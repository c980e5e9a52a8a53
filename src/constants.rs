//! Numeric constants used throughout the crate.

/// Floor for the decimal precision, in significant digits.
///
/// Requests below this are clamped up, never rejected. The correction term
/// `C / (ln(x) - A)` must not lose meaningful digits at the top of the
/// reference table, and 60 digits keeps a wide margin over the 31-digit
/// table entries.
pub const MIN_PRECISION_DIGITS: usize = 60;

/// Extra working digits for inner transcendental steps.
///
/// The logarithm is evaluated at `digits + LN_GUARD_DIGITS` and rounded
/// back down, so composed expressions never see its rounding error.
pub const LN_GUARD_DIGITS: usize = 30;

/// Smallest magnitude allowed for the correction denominator `ln(x) - A`.
///
/// Denominators closer to zero are clamped to this magnitude with their
/// sign preserved.
pub const DENOMINATOR_FLOOR: &str = "1e-30";

// =============================================================================
// Frozen parameter triple (fitted against the reference table)
// =============================================================================

/// Pole location of the correction term.
pub const PARAM_A: &str = "4.576944500732421875";

/// Constant offset of the corrected divisor.
pub const PARAM_B: &str = "1.07654";

/// Strength of the correction term.
pub const PARAM_C: &str = "0.26067";

// =============================================================================
// Driver defaults
// =============================================================================

/// Default requested precision in significant digits.
pub const DEFAULT_PRECISION: usize = 300;

/// Default first exponent evaluated.
pub const DEFAULT_K_MIN: u32 = 3;

/// Default last exponent evaluated.
pub const DEFAULT_K_MAX: u32 = 29;

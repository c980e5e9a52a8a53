//! Run configuration.

use crate::constants::{DEFAULT_K_MAX, DEFAULT_K_MIN, DEFAULT_PRECISION};
use crate::reference::MAX_EXPONENT;

/// Configuration for one evaluation run.
///
/// `precision` is the *requested* number of significant digits; the
/// [`PrecisionContext`](crate::PrecisionContext) clamps it to the safety
/// floor at construction, so under-provisioning is not a validation error.
/// Range misuse is: a range past the reference table or an inverted range
/// is rejected by [`validate`](Self::validate) rather than silently fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Requested significant digits for decimal arithmetic.
    pub precision: usize,
    /// First exponent evaluated (x = 10^k).
    pub k_min: u32,
    /// Last exponent evaluated, inclusive.
    pub k_max: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            k_min: DEFAULT_K_MIN,
            k_max: DEFAULT_K_MAX,
        }
    }
}

impl RunConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested precision in significant digits.
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }

    /// Set the first exponent evaluated.
    pub fn k_min(mut self, k: u32) -> Self {
        self.k_min = k;
        self
    }

    /// Set the last exponent evaluated.
    pub fn k_max(mut self, k: u32) -> Self {
        self.k_max = k;
        self
    }

    /// Check that the configured range can be evaluated.
    ///
    /// Returns an error message if the range is inverted or reaches past
    /// the reference table.
    pub fn validate(&self) -> Result<(), String> {
        if self.k_min > self.k_max {
            return Err(format!(
                "k_min ({}) must not exceed k_max ({})",
                self.k_min, self.k_max
            ));
        }
        if self.k_max > MAX_EXPONENT {
            return Err(format!(
                "k_max ({}) exceeds the reference table bound ({})",
                self.k_max, MAX_EXPONENT
            ));
        }
        Ok(())
    }
}

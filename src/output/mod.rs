//! Output formatting for evaluation reports.
//!
//! Two formatters over the same per-decade records and aggregate metrics:
//! - Terminal: human-readable table with colors
//! - JSON: machine-readable serialization
//!
//! Both convert decimals to `f64` for display only; all arithmetic and all
//! comparisons upstream stay in full-precision decimal.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_report;

use crate::precision::Decimal;

/// Render an estimate in scientific notation with six fractional digits.
pub(crate) fn format_estimate(estimate: &Decimal) -> String {
    format!("{:.6e}", estimate.to_f64().value())
}

/// Relative error percent as a display float.
pub(crate) fn rel_err_display(rel_err_pct: &Decimal) -> f64 {
    rel_err_pct.to_f64().value()
}

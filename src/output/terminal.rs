//! Terminal output formatting with colors.

use std::fmt::Write;

use colored::Colorize;

use crate::output::{format_estimate, rel_err_display};
use crate::result::{EvaluationPoint, MetricsResult};
use crate::types::Params;

/// Separator line used in output.
const SEPARATOR: &str = "────────────────────────────────────────────────────────────";

/// Format an evaluation report for human-readable terminal output.
///
/// One row per decade (k, known π(10^k), estimate in scientific notation,
/// relative error percent to six decimal places), followed by the aggregate
/// mean/max summary.
pub fn format_report(
    params: &Params,
    points: &[EvaluationPoint],
    summary: &MetricsResult,
) -> String {
    let mut out = String::new();

    writeln!(out, "{}", "prime-density".bold()).unwrap();
    writeln!(out, "{SEPARATOR}").unwrap();
    writeln!(out, "A = {}", params.a).unwrap();
    writeln!(out, "B = {}", params.b).unwrap();
    writeln!(out, "C = {}", params.c).unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "{}",
        format!(
            "{:>3} {:>31} {:>15} {:>12}",
            "k", "pi(10^k)", "estimate", "rel err %"
        )
        .bold()
    )
    .unwrap();
    writeln!(out, "{SEPARATOR}").unwrap();

    for point in points {
        out.push_str(&format_row(point));
    }

    writeln!(out, "{SEPARATOR}").unwrap();
    writeln!(
        out,
        "{} {:.6} %",
        "mean |rel err| =".bold(),
        summary.mean_abs_rel_err.to_f64().value()
    )
    .unwrap();
    writeln!(
        out,
        "{} {:.6} %  (k = {})",
        "max  |rel err| =".bold(),
        summary.max_abs_rel_err.to_f64().value(),
        summary.k_of_max
    )
    .unwrap();

    out
}

fn format_row(point: &EvaluationPoint) -> String {
    let rel = rel_err_display(&point.rel_err_pct);
    let rel_str = format!("{rel:>+12.6}");
    let rel_colored = if rel.abs() < 0.1 {
        rel_str.green()
    } else if rel.abs() < 0.5 {
        rel_str.yellow()
    } else {
        rel_str.red()
    };
    format!(
        "{:>3} {:>31} {:>15} {}\n",
        point.k,
        point.true_count,
        format_estimate(&point.estimate),
        rel_colored
    )
}

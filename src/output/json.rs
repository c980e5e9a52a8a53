//! JSON serialization of evaluation reports.

use serde::Serialize;

use crate::output::{format_estimate, rel_err_display};
use crate::result::{EvaluationPoint, MetricsResult};

/// Machine-readable report.
///
/// Reference counts are serialized as strings: the larger table entries
/// exceed the integer range JSON consumers can be trusted with.
#[derive(Debug, Serialize)]
struct JsonReport {
    points: Vec<JsonPoint>,
    mean_abs_rel_err_pct: f64,
    max_abs_rel_err_pct: f64,
    k_of_max: u32,
}

#[derive(Debug, Serialize)]
struct JsonPoint {
    k: u32,
    true_count: String,
    estimate: String,
    rel_err_pct: f64,
}

fn build_report(points: &[EvaluationPoint], summary: &MetricsResult) -> JsonReport {
    JsonReport {
        points: points
            .iter()
            .map(|p| JsonPoint {
                k: p.k,
                true_count: p.true_count.to_string(),
                estimate: format_estimate(&p.estimate),
                rel_err_pct: rel_err_display(&p.rel_err_pct),
            })
            .collect(),
        mean_abs_rel_err_pct: summary.mean_abs_rel_err.to_f64().value(),
        max_abs_rel_err_pct: summary.max_abs_rel_err.to_f64().value(),
        k_of_max: summary.k_of_max,
    }
}

/// Serialize a report to compact JSON.
pub fn to_json(points: &[EvaluationPoint], summary: &MetricsResult) -> String {
    serde_json::to_string(&build_report(points, summary)).expect("report serializes")
}

/// Serialize a report to pretty-printed JSON.
pub fn to_json_pretty(points: &[EvaluationPoint], summary: &MetricsResult) -> String {
    serde_json::to_string_pretty(&build_report(points, summary)).expect("report serializes")
}

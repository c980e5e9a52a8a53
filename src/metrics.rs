//! Batch evaluation against the reference table and aggregate error metrics.

use dashu::integer::IBig;
use tracing::{debug, trace};

use crate::error::EvalError;
use crate::estimator::pi_hat;
use crate::logarithm::LogarithmProvider;
use crate::precision::{Decimal, PrecisionContext};
use crate::reference::{pi_power_of_ten, MAX_EXPONENT};
use crate::result::{EvaluationPoint, MetricsResult};
use crate::types::Params;

/// Evaluate every decade in `[k_min, k_max]` against the reference table.
///
/// For each exponent k the estimate at `x = 10^k` (computed at full context
/// precision, never through floating point) is compared against the known
/// π(10^k), producing a signed relative error percent.
///
/// # Errors
///
/// - [`EvalError::ExponentOutOfRange`] if `k_max` exceeds the table bound.
///   The range is never silently truncated: that would misreport coverage.
/// - [`EvalError::EmptyRange`] if `k_min > k_max`.
pub fn evaluate<L: LogarithmProvider>(
    ctx: &PrecisionContext,
    log: &L,
    params: &Params,
    k_min: u32,
    k_max: u32,
) -> Result<Vec<EvaluationPoint>, EvalError> {
    if k_max > MAX_EXPONENT {
        return Err(EvalError::out_of_range(k_max));
    }
    if k_min > k_max {
        return Err(EvalError::EmptyRange { k_min, k_max });
    }

    debug!(k_min, k_max, digits = ctx.digits(), "evaluating exponent range");

    let hundred = Decimal::from(100);
    let mut points = Vec::with_capacity((k_max - k_min + 1) as usize);
    for k in k_min..=k_max {
        // Bounds were checked above; every k in range has a table entry.
        let true_count = pi_power_of_ten(k).expect("exponent within table bounds");
        let x = ctx.pow10(k);
        let estimate = pi_hat(ctx, log, &x, params);
        let true_dec = Decimal::from(IBig::from(true_count));
        let rel_err_pct = (&estimate - &true_dec) / &true_dec * &hundred;
        trace!(k, "decade evaluated");
        points.push(EvaluationPoint {
            k,
            true_count,
            estimate,
            rel_err_pct,
        });
    }
    Ok(points)
}

/// Aggregate per-decade records into mean/max absolute relative error.
///
/// The maximum uses a strict comparison, so on ties the first exponent at
/// which the maximum occurred is kept.
///
/// # Panics
///
/// Panics if `points` is empty. [`evaluate`] never returns an empty set.
pub fn aggregate(points: &[EvaluationPoint]) -> MetricsResult {
    assert!(!points.is_empty(), "cannot aggregate an empty evaluation");

    let mut sum = Decimal::ZERO;
    let mut max_abs = Decimal::ZERO;
    let mut k_of_max = points[0].k;
    for point in points {
        let abs = if point.rel_err_pct < Decimal::ZERO {
            -point.rel_err_pct.clone()
        } else {
            point.rel_err_pct.clone()
        };
        sum += &abs;
        if abs > max_abs {
            max_abs = abs;
            k_of_max = point.k;
        }
    }
    let count = Decimal::from(IBig::from(points.len()));
    MetricsResult {
        mean_abs_rel_err: sum / count,
        max_abs_rel_err: max_abs,
        k_of_max,
    }
}

/// Evaluate a range and return only the aggregate metrics.
///
/// Equivalent to [`evaluate`] followed by [`aggregate`]; callers that want
/// the per-decade records for display use those two directly.
///
/// # Errors
///
/// Same conditions as [`evaluate`].
pub fn metrics<L: LogarithmProvider>(
    ctx: &PrecisionContext,
    log: &L,
    params: &Params,
    k_min: u32,
    k_max: u32,
) -> Result<MetricsResult, EvalError> {
    let points = evaluate(ctx, log, params, k_min, k_max)?;
    Ok(aggregate(&points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logarithm::DecimalLn;

    fn point(k: u32, rel: &str) -> EvaluationPoint {
        EvaluationPoint {
            k,
            true_count: 0,
            estimate: Decimal::ZERO,
            rel_err_pct: Decimal::from_str_native(rel).unwrap(),
        }
    }

    #[test]
    fn aggregate_takes_absolute_values() {
        let result = aggregate(&[point(3, "-0.4"), point(4, "0.2")]);
        assert_eq!(
            result.mean_abs_rel_err,
            Decimal::from_str_native("0.3").unwrap()
        );
        assert_eq!(
            result.max_abs_rel_err,
            Decimal::from_str_native("0.4").unwrap()
        );
        assert_eq!(result.k_of_max, 3);
    }

    #[test]
    fn aggregate_keeps_first_maximum_on_ties() {
        // Equal magnitudes with opposite signs: the later one must not win.
        let result = aggregate(&[point(7, "0.5"), point(8, "-0.5"), point(9, "0.1")]);
        assert_eq!(result.k_of_max, 7);
        assert_eq!(
            result.max_abs_rel_err,
            Decimal::from_str_native("0.5").unwrap()
        );
    }

    #[test]
    fn range_past_table_bound_errors() {
        let ctx = PrecisionContext::new(60);
        let err = evaluate(&ctx, &DecimalLn, &Params::frozen(), 3, 30).unwrap_err();
        assert_eq!(err, EvalError::ExponentOutOfRange { k: 30, limit: 29 });
    }

    #[test]
    fn inverted_range_errors() {
        let ctx = PrecisionContext::new(60);
        let err = evaluate(&ctx, &DecimalLn, &Params::frozen(), 5, 4).unwrap_err();
        assert_eq!(err, EvalError::EmptyRange { k_min: 5, k_max: 4 });
    }

    #[test]
    fn evaluate_returns_one_point_per_exponent() {
        let ctx = PrecisionContext::new(60);
        let points = evaluate(&ctx, &DecimalLn, &Params::frozen(), 3, 6).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].k, 3);
        assert_eq!(points[0].true_count, 168);
        assert_eq!(points[3].k, 6);
        assert_eq!(points[3].true_count, 78_498);
    }
}

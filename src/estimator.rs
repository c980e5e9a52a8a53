//! The corrected divisor and the prime-count estimate.

use crate::constants::DENOMINATOR_FLOOR;
use crate::logarithm::LogarithmProvider;
use crate::precision::{Decimal, PrecisionContext};
use crate::types::Params;

fn denominator_floor() -> Decimal {
    Decimal::from_str_native(DENOMINATOR_FLOOR).expect("floor literal")
}

/// Corrected logarithmic divisor `L(x) = ln(x) - B + C / (ln(x) - A)`.
///
/// When `ln(x) - A` comes within `1e-30` of zero, the denominator is clamped
/// to `±1e-30` with its sign preserved (a zero denominator counts as
/// positive). The clamp keeps the division finite near the pole; this
/// function never errors.
pub fn legendre_factor<L: LogarithmProvider>(
    ctx: &PrecisionContext,
    log: &L,
    x: &Decimal,
    params: &Params,
) -> Decimal {
    let ln_x = log.ln(ctx, x);
    let floor = denominator_floor();
    let mut d = &ln_x - &params.a;
    if d < floor && d > -floor.clone() {
        d = if d >= Decimal::ZERO { floor } else { -floor };
    }
    &ln_x - &params.b + &params.c / d
}

/// Estimated prime count `pi_hat(x) = x / L(x)`.
///
/// Policy, in order:
/// - `x < 2` returns exactly zero (below the domain of meaningful prime
///   density).
/// - `L(x) <= 0` returns `x / ln(x)`, the uncorrected logarithmic-integral
///   estimate. A non-positive corrected divisor would flip or blow up the
///   sign of the count, so the correction is treated as meaningless there.
/// - otherwise returns `x / L(x)`.
///
/// Together these guarantee a non-negative estimate for every `x >= 2`,
/// under any parameter triple.
pub fn pi_hat<L: LogarithmProvider>(
    ctx: &PrecisionContext,
    log: &L,
    x: &Decimal,
    params: &Params,
) -> Decimal {
    if *x < Decimal::from(2) {
        return Decimal::ZERO;
    }
    let ln_x = log.ln(ctx, x);
    let lx = legendre_factor(ctx, log, x, params);
    if lx <= Decimal::ZERO {
        x / &ln_x
    } else {
        x / &lx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logarithm::DecimalLn;

    fn ctx() -> PrecisionContext {
        PrecisionContext::new(80)
    }

    #[test]
    fn below_two_is_exactly_zero() {
        let params = Params::frozen();
        for s in ["0", "1", "1.9999999999"] {
            let x = Decimal::from_str_native(s).unwrap();
            assert_eq!(pi_hat(&ctx(), &DecimalLn, &x, &params), Decimal::ZERO);
        }
    }

    #[test]
    fn x_equals_two_uses_the_fallback_and_stays_positive() {
        // ln(2) - A is far from zero but L(2) is negative for the frozen
        // triple, so the estimate degrades to x / ln(x).
        let params = Params::frozen();
        let ctx = ctx();
        let two = Decimal::from(2);
        let lx = legendre_factor(&ctx, &DecimalLn, &two, &params);
        assert!(lx < Decimal::ZERO);
        let est = pi_hat(&ctx, &DecimalLn, &two, &params);
        let expected = &two / &DecimalLn.ln(&ctx, &two);
        assert_eq!(est, expected);
        assert!(est > Decimal::ZERO);
    }

    #[test]
    fn corrected_estimate_for_a_known_decade() {
        // pi_hat(10^6) lands within 0.3% of pi(10^6) = 78498.
        let params = Params::frozen();
        let ctx = ctx();
        let est = pi_hat(&ctx, &DecimalLn, &ctx.pow10(6), &params);
        assert!(est > Decimal::from(78_200));
        assert!(est < Decimal::from(78_600));
    }

    #[test]
    fn denominator_clamp_preserves_sign() {
        let ctx = ctx();
        let x = ctx.pow10(5);
        let ln_x = DecimalLn.ln(&ctx, &x);
        let tiny = Decimal::from_str_native("1e-40").unwrap();

        // A chosen so that ln(x) - A is exactly zero: clamps to +1e-30.
        let at_pole = Params::new(ln_x.clone(), Decimal::ONE, Decimal::ONE);
        let above = legendre_factor(&ctx, &DecimalLn, &x, &at_pole);
        assert!(above > Decimal::from_str_native("1e25").unwrap());

        // A slightly above ln(x): the denominator is -1e-40, clamped to -1e-30.
        let past_pole = Params::new(&ln_x + &tiny, Decimal::ONE, Decimal::ONE);
        let below = legendre_factor(&ctx, &DecimalLn, &x, &past_pole);
        assert!(below < Decimal::from_str_native("-1e25").unwrap());

        // Both sides share the ln(x) - B term, so the gap is exactly 2e30.
        let gap = above - below;
        assert_eq!(gap, Decimal::from_str_native("2e30").unwrap());
    }

    #[test]
    fn estimate_is_non_negative_under_hostile_triples() {
        let ctx = ctx();
        let hostile = [
            // B large enough to push L(x) negative everywhere in range.
            Params::new(
                Decimal::from(4),
                Decimal::from(1_000_000),
                Decimal::from(1),
            ),
            // Pole parked right on ln(10^8).
            Params::new(
                DecimalLn.ln(&ctx, &ctx.pow10(8)),
                Decimal::ONE,
                -Decimal::ONE,
            ),
            Params::new(-Decimal::from(50), Decimal::ZERO, Decimal::ZERO),
        ];
        for params in &hostile {
            for k in [1u32, 2, 8, 20] {
                let est = pi_hat(&ctx, &DecimalLn, &ctx.pow10(k), params);
                assert!(est >= Decimal::ZERO, "negative estimate at k={k}");
            }
        }
    }
}

//! # prime-density
//!
//! Closed-form numerical estimates of the prime-counting function π(x),
//! evaluated in arbitrary-precision decimal arithmetic and validated against
//! the known values of π(10^k).
//!
//! The model is a Legendre-style correction to the classical
//! logarithmic-integral approximation:
//!
//! ```text
//! L(x)      = ln(x) - B + C / (ln(x) - A)
//! pi_hat(x) ≈ x / L(x)
//! ```
//!
//! with a frozen, pre-fitted parameter triple (A, B, C). This crate performs
//! estimation and error reporting only: there is no sieving, no factorization,
//! and no parameter fitting. Its job is to answer "how far off is this triple,
//! per decade, and in aggregate?"
//!
//! ## Quick Start
//!
//! ```ignore
//! use prime_density::{evaluate, metrics, DefaultLog, Params, PrecisionContext};
//!
//! let ctx = PrecisionContext::new(300);
//! let log = DefaultLog::default();
//! let params = Params::frozen();
//!
//! // Aggregate error over x = 10^3 ..= 10^29.
//! let summary = metrics(&ctx, &log, &params, 3, 29)?;
//!
//! // Or keep the per-decade records for display.
//! let points = evaluate(&ctx, &log, &params, 3, 29)?;
//! # Ok::<(), prime_density::EvalError>(())
//! ```
//!
//! All arithmetic runs at an explicit [`PrecisionContext`] (at least 60
//! significant digits, round-half-to-even). Requests beyond the reference
//! table are surfaced as [`EvalError`]; near-singular denominators and
//! non-positive correction factors are absorbed by deterministic fallback
//! policies and never error.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod estimator;
mod logarithm;
mod metrics;
mod precision;
mod reference;
mod result;
mod types;

// Output formatting
pub mod output;

// Re-exports for public API
pub use config::RunConfig;
pub use constants::{
    DEFAULT_K_MAX, DEFAULT_K_MIN, DEFAULT_PRECISION, LN_GUARD_DIGITS, MIN_PRECISION_DIGITS,
};
pub use error::EvalError;
pub use estimator::{legendre_factor, pi_hat};
pub use logarithm::{DecimalLn, DefaultLog, LogarithmProvider};
pub use metrics::{aggregate, evaluate, metrics};
pub use precision::{Decimal, PrecisionContext};
pub use reference::{pi_power_of_ten, MAX_EXPONENT, PI_POWERS_OF_TEN};
pub use result::{EvaluationPoint, MetricsResult};
pub use types::Params;

//! Command-line driver for the prime-count estimator.
//!
//! Evaluates the frozen parameter triple over a range of decades and prints
//! a per-decade table plus aggregate error metrics.
//!
//! ## Quick start
//!
//! ```bash
//! # Full reference range at the default 300 digits
//! cargo run --release
//!
//! # A narrower range, machine-readable
//! cargo run --release -- --kmin 5 --kmax 15 --json
//!
//! # Trace per-decade progress
//! RUST_LOG=debug cargo run --release -- --prec 600
//! ```

use anyhow::Context as _;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prime_density::{
    aggregate, evaluate, output, DefaultLog, Params, PrecisionContext, RunConfig,
    DEFAULT_K_MAX, DEFAULT_K_MIN, DEFAULT_PRECISION,
};

#[derive(Parser, Debug)]
#[command(
    name = "prime-density",
    version,
    about = "Validate a Legendre-corrected prime-count estimate against known pi(10^k)"
)]
struct Cli {
    /// Requested significant digits for decimal arithmetic (floored to 60).
    #[arg(long = "prec", default_value_t = DEFAULT_PRECISION)]
    prec: usize,

    /// First exponent k evaluated (x = 10^k).
    #[arg(long = "kmin", default_value_t = DEFAULT_K_MIN)]
    kmin: u32,

    /// Last exponent k evaluated, inclusive (at most 29).
    #[arg(long = "kmax", default_value_t = DEFAULT_K_MAX)]
    kmax: u32,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = RunConfig::new()
        .precision(cli.prec)
        .k_min(cli.kmin)
        .k_max(cli.kmax);
    config.validate().map_err(anyhow::Error::msg)?;

    let ctx = PrecisionContext::new(config.precision);
    let log = DefaultLog::default();
    let params = Params::frozen();

    info!(
        digits = ctx.digits(),
        k_min = config.k_min,
        k_max = config.k_max,
        "evaluating frozen parameter triple"
    );

    let points = evaluate(&ctx, &log, &params, config.k_min, config.k_max)
        .context("batch evaluation failed")?;
    let summary = aggregate(&points);

    if cli.json {
        println!("{}", output::to_json_pretty(&points, &summary));
    } else {
        print!("{}", output::format_report(&params, &points, &summary));
    }

    Ok(())
}

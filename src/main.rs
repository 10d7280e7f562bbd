//! Percolation threshold estimator.
//!
//! Usage: `percolation-stats N T [SEED]`
//!
//! Runs `T` trials on an `N`-by-`N` grid and prints the mean, standard
//! deviation and 95% confidence interval of the threshold. Logging goes to
//! stderr and is controlled by `RUST_LOG`.

use std::env;
use std::process::ExitCode;

use percolation::{EstimatorConfig, PercolationError, ThresholdEstimator};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: percolation-stats N T [SEED]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match ThresholdEstimator::from_config(&config) {
        Ok(stats) => {
            let (lo, hi) = stats.confidence_interval();
            println!("mean                    = {}", stats.mean());
            println!("stddev                  = {}", stats.stddev());
            println!("95% confidence interval = {lo} , {hi}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// `None` on a usage error (missing or non-numeric arguments),
/// `Some(Err(..))` when a size is numeric but not positive.
fn parse_args(args: &[String]) -> Option<Result<EstimatorConfig, PercolationError>> {
    if !(2..=3).contains(&args.len()) {
        return None;
    }
    let n: i64 = args[0].parse().ok()?;
    let trials: i64 = args[1].parse().ok()?;
    let seed = match args.get(2) {
        Some(s) => Some(s.parse::<u64>().ok()?),
        None => None,
    };

    Some(positive("n", n).and_then(|n| {
        let trials = positive("trials", trials)?;
        let config = EstimatorConfig::new(n, trials);
        Ok(match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }))
}

fn positive(name: &'static str, value: i64) -> Result<usize, PercolationError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(PercolationError::InvalidArgument { name, value }),
    }
}

//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random blocked sites of a fresh
//! [`PercolationGrid`] until it percolates and records the fraction of
//! sites opened. The fractions are summarised by their sample mean,
//! sample standard deviation and a 95% normal-approximation confidence
//! interval.

use rand::Rng;
use tracing::{debug, info};

use crate::error::{PercolationError, Result};
use crate::grid::{site_count, PercolationGrid};
use crate::random::{create_rng, entropy_seed, uniform_int, SamplingPool};
use crate::stats::{self, WelfordAccumulator};

/// How each trial picks the next blocked site to open.
///
/// Both strategies open a uniformly random not-yet-open site at every
/// step, so they produce the same distribution of fractions; they differ
/// only in cost and in the exact random stream they consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteSelection {
    /// Draw from a shrinking pool of blocked sites. O(1) per open.
    #[default]
    Pool,
    /// Pick a row and column uniformly over the whole grid and retry when
    /// the site is already open.
    Rejection,
}

/// Parameters of an estimation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Side length `n` of each simulated grid.
    pub grid_size: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// How blocked sites are picked.
    pub selection: SiteSelection,
}

impl EstimatorConfig {
    /// Entropy-seeded config using the default [`SiteSelection`].
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            seed: None,
            selection: SiteSelection::default(),
        }
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the site-selection strategy.
    pub fn with_selection(mut self, selection: SiteSelection) -> Self {
        self.selection = selection;
        self
    }
}

/// Results of `trials` independent percolation experiments on an
/// `n`-by-`n` grid.
///
/// All trials run eagerly at construction; the statistics are read-only
/// afterwards.
///
/// # Single-trial boundary
///
/// The sample standard deviation divides by `trials − 1`, so with a single
/// trial [`stddev`](Self::stddev), [`confidence_lo`](Self::confidence_lo)
/// and [`confidence_hi`](Self::confidence_hi) return `f64::NAN`.
///
/// # Examples
/// ```
/// use percolation::ThresholdEstimator;
///
/// let est = ThresholdEstimator::with_seed(20, 30, 7).unwrap();
/// assert_eq!(est.fractions().len(), 30);
/// assert!(est.mean() > 0.0 && est.mean() < 1.0);
/// assert!(est.confidence_lo() <= est.mean() && est.mean() <= est.confidence_hi());
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdEstimator {
    grid_size: usize,
    fractions: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl ThresholdEstimator {
    /// Runs `trials` experiments on an `n`-by-`n` grid with an
    /// entropy-seeded RNG.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n == 0`, `trials == 0`, or
    /// `n²` does not fit in `usize`.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::from_config(&EstimatorConfig::new(n, trials))
    }

    /// Like [`new`](Self::new) but reproducible: the same seed always
    /// yields the same fractions.
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Result<Self> {
        Self::from_config(&EstimatorConfig::new(n, trials).with_seed(seed))
    }

    /// Runs the experiments described by `config`.
    pub fn from_config(config: &EstimatorConfig) -> Result<Self> {
        validate(config.grid_size, config.trials)?;
        let seed = config.seed.unwrap_or_else(entropy_seed);
        info!(
            n = config.grid_size,
            trials = config.trials,
            seed,
            selection = ?config.selection,
            "starting percolation trials"
        );
        let mut rng = create_rng(seed);
        Self::with_rng(config.grid_size, config.trials, config.selection, &mut rng)
    }

    /// Runs the experiments drawing every random choice from `rng`.
    pub fn with_rng<R: Rng>(
        n: usize,
        trials: usize,
        selection: SiteSelection,
        rng: &mut R,
    ) -> Result<Self> {
        let sites = validate(n, trials)? as f64;

        let mut fractions = Vec::with_capacity(trials);
        let mut spread = WelfordAccumulator::new();
        for trial in 0..trials {
            let opened = run_trial(n, selection, rng)?;
            let fraction = opened as f64 / sites;
            debug!(trial, opened, fraction, "trial percolated");
            spread.update(fraction);
            fractions.push(fraction);
        }

        let mean = stats::mean(&fractions).unwrap_or(f64::NAN);
        let stddev = spread.sample_std_dev().unwrap_or(f64::NAN);
        info!(n, trials, mean, stddev, "percolation trials complete");

        Ok(Self {
            grid_size: n,
            fractions,
            mean,
            stddev,
        })
    }

    /// Side length of the simulated grids.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials run.
    pub fn trials(&self) -> usize {
        self.fractions.len()
    }

    /// Fraction of sites open at the moment each trial percolated, in
    /// trial order. Every value lies in `(0, 1]`.
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the percolation threshold; `NaN` when
    /// only one trial was run.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    ///
    /// Assumes enough trials (≥ 30) for the normal approximation to hold.
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_interval().0
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_interval().1
    }

    /// `(confidence_lo, confidence_hi)`.
    pub fn confidence_interval(&self) -> (f64, f64) {
        stats::confidence_interval(self.mean, self.stddev, self.trials(), stats::Z_95)
    }
}

/// Checks the run parameters and returns the number of sites per grid.
fn validate(n: usize, trials: usize) -> Result<usize> {
    let sites = site_count(n)?;
    if trials == 0 {
        return Err(PercolationError::InvalidArgument {
            name: "trials",
            value: 0,
        });
    }
    Ok(sites)
}

/// Opens random blocked sites until the grid percolates; returns how many
/// sites were opened.
fn run_trial<R: Rng>(n: usize, selection: SiteSelection, rng: &mut R) -> Result<usize> {
    let mut grid = PercolationGrid::new(n)?;
    match selection {
        SiteSelection::Pool => {
            let mut blocked = SamplingPool::new(grid.sites());
            while !grid.percolates() {
                // A fully open grid always percolates, so the pool cannot
                // run dry first.
                let Some(site) = blocked.draw(rng) else {
                    break;
                };
                grid.open(site / n, site % n)?;
            }
        }
        SiteSelection::Rejection => {
            while !grid.percolates() {
                let row = uniform_int(rng, 0, n);
                let col = uniform_int(rng, 0, n);
                if !grid.is_open(row, col)? {
                    grid.open(row, col)?;
                }
            }
        }
    }
    Ok(grid.open_count())
}

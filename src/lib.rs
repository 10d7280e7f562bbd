//! # percolation
//!
//! Monte Carlo estimation of the site-percolation threshold p* on an
//! N×N square grid.
//!
//! ## Modules
//!
//! - [`collections`] — Weighted quick-union with path halving
//! - [`grid`] — The percolation model with virtual top/bottom nodes
//! - [`estimator`] — Repeated trials and their summary statistics
//! - [`random`] — Seeded RNGs and sampling without replacement
//! - [`stats`] — Numerically stable mean, variance and confidence intervals
//!
//! ## Example
//!
//! ```
//! use percolation::{EstimatorConfig, ThresholdEstimator};
//!
//! let config = EstimatorConfig::new(10, 30).with_seed(42);
//! let est = ThresholdEstimator::from_config(&config).unwrap();
//! let (lo, hi) = est.confidence_interval();
//! assert!(lo <= est.mean() && est.mean() <= hi);
//! ```

pub mod collections;
pub mod error;
pub mod estimator;
pub mod grid;
pub mod random;
pub mod stats;

pub use error::{PercolationError, Result};
pub use estimator::{EstimatorConfig, SiteSelection, ThresholdEstimator};
pub use grid::PercolationGrid;

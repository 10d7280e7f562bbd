//! Descriptive statistics for trial outcomes.
//!
//! All functions in this module handle edge cases explicitly and use
//! numerically stable algorithms to avoid catastrophic cancellation.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier (improved Kahan) compensated summation for O(ε)
//!   error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Confidence interval**: normal approximation `x̄ ± z·s/√n`.

/// z-score of the two-sided 95% normal confidence interval.
pub const Z_95: f64 = 1.96;

/// Computes the arithmetic mean using Neumaier compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use percolation::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(neumaier_sum(data) / data.len() as f64)
}

/// Computes the sample variance using Welford's online algorithm.
///
/// Returns the **sample** (unbiased) variance with Bessel's correction
/// (denominator `n − 1`).
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use percolation::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.sample_variance()
}

/// Computes the sample standard deviation.
///
/// Equivalent to `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use percolation::stats::std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let sd = std_dev(&v).unwrap();
/// assert!((sd - 2.138089935299395).abs() < 1e-10);
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Normal-approximation confidence interval for a mean.
///
/// Returns `(mean − z·s/√n, mean + z·s/√n)`. Only meaningful when `n` is
/// large enough for the central limit theorem to apply (≥ 30 is the usual
/// rule of thumb); this is not checked. NaN inputs propagate.
///
/// # Examples
/// ```
/// use percolation::stats::{confidence_interval, Z_95};
/// let (lo, hi) = confidence_interval(0.5, 0.1, 100, Z_95);
/// assert!((lo - 0.4804).abs() < 1e-12);
/// assert!((hi - 0.5196).abs() < 1e-12);
/// ```
pub fn confidence_interval(mean: f64, std_dev: f64, n: usize, z: f64) -> (f64, f64) {
    let half_width = z * std_dev / (n as f64).sqrt();
    (mean - half_width, mean + half_width)
}

// ---------------------------------------------------------------------------
// Neumaier compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn neumaier_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for the sample variance.
///
/// # Examples
/// ```
/// use percolation::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.sample_std_dev().unwrap() - 2.138089935299395).abs() < 1e-10);
/// assert!((acc.sample_variance().unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Returns the sample variance (n − 1 denominator), or `None` if fewer
    /// than 2 samples have been added.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }

    /// Returns the sample standard deviation, or `None` if fewer than 2
    /// samples have been added.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_nan() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
    }

    #[test]
    fn test_mean_of_ones_is_exact() {
        let ones = vec![1.0; 1000];
        assert_eq!(mean(&ones), Some(1.0));
    }

    #[test]
    fn test_variance_single_is_none() {
        assert_eq!(variance(&[42.0]), None);
        assert_eq!(std_dev(&[42.0]), None);
    }

    #[test]
    fn test_variance_constant_is_zero() {
        assert_eq!(variance(&[0.25; 10]), Some(0.0));
        assert_eq!(std_dev(&[1.0; 10]), Some(0.0));
    }

    #[test]
    fn test_variance_inf() {
        assert_eq!(variance(&[1.0, f64::INFINITY]), None);
    }

    #[test]
    fn test_neumaier_sum_precision() {
        let data: Vec<f64> = std::iter::once(1.0)
            .chain(std::iter::repeat(1e-16).take(10_000))
            .collect();
        let result = neumaier_sum(&data);
        let expected = 1.0 + 1e-12;
        assert!(
            (result - expected).abs() < 1e-15,
            "neumaier_sum: {result}, expected: {expected}"
        );
    }

    #[test]
    fn test_neumaier_sum_large_addend() {
        // Plain Kahan summation returns 0.0 here.
        assert_eq!(neumaier_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
    }

    #[test]
    fn test_welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.sample_variance(), None);
    }

    #[test]
    fn test_welford_single() {
        let mut acc = WelfordAccumulator::new();
        acc.update(0.6);
        assert_eq!(acc.sample_variance(), None);
        assert_eq!(acc.sample_std_dev(), None);
        acc.update(0.6);
        assert_eq!(acc.sample_std_dev(), Some(0.0));
    }

    #[test]
    fn test_confidence_interval_zero_spread() {
        assert_eq!(confidence_interval(1.0, 0.0, 30, Z_95), (1.0, 1.0));
    }

    #[test]
    fn test_confidence_interval_nan_propagates() {
        let (lo, hi) = confidence_interval(1.0, f64::NAN, 1, Z_95);
        assert!(lo.is_nan() && hi.is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn welford_matches_two_pass(
            data in proptest::collection::vec(0.0_f64..1.0, 2..=100)
        ) {
            let m = mean(&data).unwrap();
            let two_pass: f64 = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>()
                / (data.len() - 1) as f64;
            let welford = variance(&data).unwrap();
            prop_assert!((welford - two_pass).abs() < 1e-12);
        }

        #[test]
        fn mean_within_bounds(
            data in proptest::collection::vec(0.0_f64..=1.0, 1..=100)
        ) {
            let m = mean(&data).unwrap();
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo - 1e-12 && m <= hi + 1e-12);
        }

        #[test]
        fn confidence_interval_brackets_mean(
            m in 0.0_f64..1.0,
            s in 0.0_f64..1.0,
            n in 1_usize..1000,
        ) {
            let (lo, hi) = confidence_interval(m, s, n, Z_95);
            prop_assert!(lo <= m && m <= hi);
            prop_assert!((hi - lo - 2.0 * Z_95 * s / (n as f64).sqrt()).abs() < 1e-12);
        }
    }
}

//! Random number generation and sampling without replacement.
//!
//! Provides seeded RNG construction, a uniform integer draw on a
//! half-open range, and a shrinking pool that hands out each element of
//! `0..n` exactly once in uniformly random order.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use percolation::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws a fresh seed from operating-system entropy.
pub fn entropy_seed() -> u64 {
    rand::rng().random()
}

/// Returns an integer drawn uniformly from the **half-open** range
/// `[low, high)`.
///
/// # Panics
/// Panics if `low >= high`.
///
/// # Examples
/// ```
/// use percolation::random::{create_rng, uniform_int};
/// let mut rng = create_rng(7);
/// for _ in 0..100 {
///     let x = uniform_int(&mut rng, 3, 6);
///     assert!((3..6).contains(&x));
/// }
/// ```
pub fn uniform_int<R: Rng>(rng: &mut R, low: usize, high: usize) -> usize {
    rng.random_range(low..high)
}

/// Sampling pool over `0..n` without replacement.
///
/// Each [`draw`](SamplingPool::draw) picks uniformly among the elements
/// not yet drawn, so the sequence of draws is a uniformly random
/// permutation of `0..n` that can be stopped at any point.
///
/// # Algorithm
/// Lazy Fisher-Yates (Durstenfeld): the undrawn elements occupy the
/// prefix `[0, remaining)`; a draw swaps a uniformly chosen prefix slot
/// to the end of the prefix and shrinks it by one.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Construction O(n), each draw O(1).
///
/// # Examples
/// ```
/// use percolation::random::{create_rng, SamplingPool};
/// let mut rng = create_rng(42);
/// let mut pool = SamplingPool::new(5);
/// let mut seen: Vec<usize> = std::iter::from_fn(|| pool.draw(&mut rng)).collect();
/// seen.sort();
/// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
/// assert!(pool.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SamplingPool {
    items: Vec<usize>,
    remaining: usize,
}

impl SamplingPool {
    /// Creates a pool holding every element of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            items: (0..n).collect(),
            remaining: n,
        }
    }

    /// Removes and returns a uniformly random undrawn element, or `None`
    /// once the pool is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let j = uniform_int(rng, 0, self.remaining);
        self.remaining -= 1;
        self.items.swap(j, self.remaining);
        Some(self.items[self.remaining])
    }

    /// Number of elements not yet drawn.
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Returns true once every element has been drawn.
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

// ============================================================================
// Tests
// ============================================================================

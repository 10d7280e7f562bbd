//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a collection of disjoint sets over node identifiers `0..n`
//! with near-constant-time union and connectivity queries.
//!
//! # Algorithm
//!
//! Weighted quick-union: the root of the smaller tree is attached under
//! the root of the larger one (**union by size**), and `find` applies
//! **path halving**, pointing every other node on the search path at its
//! grandparent. Together these give amortized O(α(n)) per operation,
//! where α is the inverse Ackermann function.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use crate::error::{PercolationError, Result};

/// Disjoint-set forest with path halving and union by size.
///
/// Every public query checks its node identifiers and reports
/// [`PercolationError::OutOfRange`] instead of panicking.
///
/// # Examples
/// ```
/// use percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1).unwrap();
/// uf.union(2, 3).unwrap();
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1).unwrap());
/// assert!(!uf.connected(0, 2).unwrap());
///
/// uf.union(1, 3).unwrap();
/// assert!(uf.connected(0, 2).unwrap()); // transitivity
/// assert!(uf.connected(0, 9).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates a new Union-Find with `n` singleton sets `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Errors
    /// [`PercolationError::OutOfRange`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// # Returns
    /// `Ok(true)` if `x` and `y` were in different sets (and are now merged),
    /// `Ok(false)` if they were already in the same set.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Errors
    /// [`PercolationError::OutOfRange`] if either node is `>= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return Ok(false);
        }

        // Smaller tree goes under the larger; ties keep `root_x` on top.
        let (big, small) = if self.size[root_x] < self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];

        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are in the same set.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Errors
    /// [`PercolationError::OutOfRange`] if either node is `>= len()`.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.root(x) == self.root(y))
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    ///
    /// # Errors
    /// [`PercolationError::OutOfRange`] if `x >= len()`.
    pub fn component_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(PercolationError::OutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    /// Path halving; `x` must already be in range.
    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn union_find_transitivity(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y).unwrap();
                }
            }

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y).unwrap() && uf.connected(y, z).unwrap() {
                            prop_assert!(
                                uf.connected(x, z).unwrap(),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn matches_naive_labelling(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            // Reference model: relabel whole components on every union.
            let mut labels: Vec<usize> = (0..n).collect();
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    let merged = uf.union(x, y).unwrap();
                    let (from, to) = (labels[y], labels[x]);
                    prop_assert_eq!(merged, from != to);
                    for label in labels.iter_mut() {
                        if *label == from {
                            *label = to;
                        }
                    }
                }
            }
            for x in 0..n {
                for y in 0..n {
                    prop_assert_eq!(uf.connected(x, y).unwrap(), labels[x] == labels[y]);
                }
            }
        }

        #[test]
        fn component_sizes_sum_to_n(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y).unwrap();
                }
            }

            let mut total = 0;
            let mut roots = 0;
            for i in 0..n {
                if uf.find(i).unwrap() == i {
                    total += uf.component_size(i).unwrap();
                    roots += 1;
                }
            }
            prop_assert_eq!(total, n, "component sizes should sum to n");
            prop_assert_eq!(roots, uf.component_count());
        }
    }
}

//! The N×N site-percolation model.
//!
//! Sites are either open or blocked. An open site is **full** when a chain
//! of 4-adjacent open sites links it to the top row, and the grid
//! **percolates** when some bottom-row site is full.
//!
//! # Encoding
//!
//! The N² sites and two virtual nodes share one flat index space of size
//! N² + 2 in a [`UnionFind`]:
//!
//! | node | index |
//! |---|---|
//! | TOP (whole top row) | `0` |
//! | site `(i, j)` | `i * N + j + 1` |
//! | BOTTOM (whole bottom row) | `N² + 1` |
//!
//! Opening a top-row site joins it to TOP and opening a bottom-row site
//! joins it to BOTTOM, so "is there a top-to-bottom path" is the single
//! query `connected(TOP, BOTTOM)`.

use crate::collections::UnionFind;
use crate::error::{PercolationError, Result};

const TOP: usize = 0;

/// Number of real sites in an `n`-by-`n` grid.
///
/// # Errors
/// [`PercolationError::InvalidArgument`] if `n == 0` or `n² + 2` does not
/// fit in `usize`.
pub(crate) fn site_count(n: usize) -> Result<usize> {
    let invalid = || PercolationError::InvalidArgument {
        name: "n",
        value: i64::try_from(n).unwrap_or(i64::MAX),
    };
    if n == 0 {
        return Err(invalid());
    }
    n.checked_mul(n)
        .filter(|sites| sites.checked_add(2).is_some())
        .ok_or_else(invalid)
}

/// An N×N percolation system backed by a weighted quick-union forest.
///
/// # Examples
/// ```
/// use percolation::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(2).unwrap();
/// grid.open(0, 0).unwrap();
/// assert!(!grid.percolates());
/// grid.open(1, 0).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(1, 0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    sites: usize,
    open: Vec<bool>,
    open_count: usize,
    uf: UnionFind,
}

impl PercolationGrid {
    /// Creates an `n`-by-`n` grid with every site blocked.
    ///
    /// # Complexity
    /// O(n²)
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n == 0` or `n² + 2`
    /// overflows `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let sites = site_count(n)?;
        Ok(Self {
            n,
            sites,
            open: vec![false; sites],
            open_count: 0,
            uf: UnionFind::new(sites + 2),
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of sites, `n²`.
    pub fn sites(&self) -> usize {
        self.sites
    }

    /// Number of open sites.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Opens site `(row, col)` and joins it to its open neighbours.
    ///
    /// Opening an already-open site is a no-op.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` is not in
    /// `[0, n - 1]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.site_index(row, col)?;
        if self.open[index - 1] {
            return Ok(());
        }
        self.open[index - 1] = true;
        self.open_count += 1;

        let last = self.n - 1;
        if row > 0 {
            self.join_if_open(index, row - 1, col)?;
        }
        if row < last {
            self.join_if_open(index, row + 1, col)?;
        }
        if col > 0 {
            self.join_if_open(index, row, col - 1)?;
        }
        if col < last {
            self.join_if_open(index, row, col + 1)?;
        }
        // A 1x1 grid hits both branches.
        if row == 0 {
            self.uf.union(index, TOP)?;
        }
        if row == last {
            let bottom = self.bottom();
            self.uf.union(index, bottom)?;
        }
        Ok(())
    }

    /// Returns `true` if site `(row, col)` is open.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] on invalid coordinates.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.site_index(row, col)?;
        Ok(self.open[index - 1])
    }

    /// Returns `true` if site `(row, col)` is open and connected to the top
    /// row.
    ///
    /// Fullness is recomputed on every call: a later open anywhere in the
    /// grid can make a site full.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] on invalid coordinates.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let index = self.site_index(row, col)?;
        if !self.open[index - 1] {
            return Ok(false);
        }
        self.uf.connected(TOP, index)
    }

    /// Returns `true` if the top and bottom rows are connected.
    pub fn percolates(&mut self) -> bool {
        let bottom = self.bottom();
        self.uf
            .connected(TOP, bottom)
            .expect("virtual nodes are always in range")
    }

    /// Draws the grid one row per line: `#` blocked, `o` open, `*` full.
    ///
    /// # Examples
    /// ```
    /// use percolation::PercolationGrid;
    ///
    /// let mut grid = PercolationGrid::new(2).unwrap();
    /// grid.open(0, 1).unwrap();
    /// grid.open(1, 0).unwrap();
    /// assert_eq!(grid.render(), "#*\no#\n");
    /// ```
    pub fn render(&mut self) -> String {
        let mut out = String::with_capacity(self.n * (self.n + 1));
        for row in 0..self.n {
            for col in 0..self.n {
                let index = row * self.n + col + 1;
                let glyph = if !self.open[index - 1] {
                    '#'
                } else if self
                    .uf
                    .connected(TOP, index)
                    .expect("in-range site index")
                {
                    '*'
                } else {
                    'o'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    fn bottom(&self) -> usize {
        self.sites + 1
    }

    fn site_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.n || col >= self.n {
            return Err(PercolationError::IndexOutOfRange {
                row,
                col,
                size: self.n,
            });
        }
        Ok(row * self.n + col + 1)
    }

    fn join_if_open(&mut self, index: usize, row: usize, col: usize) -> Result<()> {
        let neighbour = self.site_index(row, col)?;
        if self.open[neighbour - 1] {
            self.uf.union(index, neighbour)?;
        }
        Ok(())
    }
}

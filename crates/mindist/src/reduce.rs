//! Parity-patterned density reduction of square point sets.
//!
//! Both reduction patterns come from one stride selector over the
//! flattened row-major n×n index space: keep the flat positions whose
//! parity matches the current row's kept parity. With row alternation
//! off the kept parity never changes (vertical stripes on a mesh);
//! with it on the parity flips at every row boundary (checkerboard).
//!
//! Which pattern a [`ReductionMode`] maps to depends on the parity of
//! `n`. An odd row length already flips the visual phase between
//! consecutive rows, so the plain stride reads as a checkerboard and
//! the alternating stride as stripes; the dispatch swaps strategies
//! accordingly to keep `Mesh` checkerboard-like and `Vertical`
//! striped for every `n`.

use crate::grid::Grid;
use mindist_core::{check_points_2d, GridError, Point};

/// Requested visual pattern for density reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReductionMode {
    /// Checkerboard-patterned retention.
    Mesh,
    /// Vertical-stripe retention.
    Vertical,
}

/// Whether the stride selector must alternate row parity to realize
/// `mode` on an n×n set.
fn row_alternation(n: usize, mode: ReductionMode) -> bool {
    match mode {
        ReductionMode::Mesh => n % 2 == 0,
        ReductionMode::Vertical => n % 2 != 0,
    }
}

/// Select flat indices by parity, optionally flipping the kept parity
/// at every row boundary.
fn stride_selection(count: usize, row_len: usize, alternate_rows: bool) -> Vec<usize> {
    let mut keep_even = true;
    let mut out = Vec::with_capacity(count / 2 + 1);
    for i in 0..count {
        if (i % 2 == 0) == keep_even {
            out.push(i);
        }
        if alternate_rows && (i + 1) % row_len == 0 {
            keep_even = !keep_even;
        }
    }
    out
}

/// The flat indices `reduce_density` would retain from a square point
/// set of `count` points.
///
/// Exposed for render layers that address the original set by index.
/// Fails with `NonSquareInput` if `count` has no integer square root.
pub fn reduce_density_indices(
    count: usize,
    mode: ReductionMode,
) -> Result<Vec<usize>, GridError> {
    let n = count.isqrt();
    if n * n != count {
        return Err(GridError::NonSquareInput { count });
    }
    Ok(stride_selection(count, n, row_alternation(n, mode)))
}

/// Reduce a square point set to roughly half density, preserving
/// spatial order.
///
/// `points` must hold `n²` points in row-major order for some integer
/// `n`. For even `n` exactly `n²/2` points are retained; for odd `n`
/// the count is within one of `n²/2` (last-row asymmetry). Pure: the
/// input is never mutated.
///
/// # Examples
///
/// ```
/// use mindist::{reduce_density, Grid, ReductionMode};
///
/// let grid = Grid::new(4, 1.0, 1.0).unwrap();
/// let reduced = reduce_density(grid.domain_points(), ReductionMode::Mesh).unwrap();
/// assert_eq!(reduced.len(), 8);
/// ```
pub fn reduce_density(points: &[Point], mode: ReductionMode) -> Result<Vec<Point>, GridError> {
    check_points_2d(points)?;
    let indices = reduce_density_indices(points.len(), mode)?;
    Ok(indices.into_iter().map(|i| points[i].clone()).collect())
}

impl Grid {
    /// Reduce the domain point set to roughly half density.
    ///
    /// The domain is always `grid_size²` points, so this cannot fail.
    pub fn reduce_density(&self, mode: ReductionMode) -> Vec<Point> {
        let n = self.grid_size;
        stride_selection(n * n, n, row_alternation(n, mode))
            .into_iter()
            .map(|i| self.domain[i].clone())
            .collect()
    }
}

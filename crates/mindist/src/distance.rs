//! Brute-force pairwise distance and nearest-neighbor queries.
//!
//! The engine is exposed as free functions over explicit point slices;
//! [`Grid`] carries thin convenience wrappers over its (domain, stored
//! target) pair. Nothing here mutates its inputs.
//!
//! Brute force is deliberate: at the scale this crate targets (grids
//! of a few thousand cells) the full N×M matrix is cheap and the
//! matrix itself is part of the output contract.

use crate::grid::Grid;
use mindist_core::{check_points_2d, DistanceMatrix, GridError, Point};
use smallvec::SmallVec;

/// Target indices tied for a single source point's minimum distance.
///
/// Ties are exact floating-point equality; near-duplicate targets
/// produce near-ties that do not match. Two inline slots cover the
/// common no-tie and single-tie cases without allocation.
pub type TiedIndices = SmallVec<[usize; 2]>;

fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

fn check_non_empty(points: &[Point], what: &'static str) -> Result<(), GridError> {
    if points.is_empty() {
        return Err(GridError::EmptyPointSet { what });
    }
    Ok(())
}

/// Full N×M Euclidean distance matrix between two point sets.
///
/// Entry `(i, j)` is `sqrt(dx² + dy²)` from `sources[i]` to
/// `targets[j]`. Either side may be empty, producing a degenerate
/// matrix. Fails with `ShapeMismatch` if any point is not 2D.
///
/// # Examples
///
/// ```
/// use mindist::pairwise_distances;
/// use smallvec::smallvec;
///
/// let sources = vec![smallvec![0.0, 0.0], smallvec![3.0, 4.0]];
/// let targets = vec![smallvec![0.0, 0.0]];
/// let m = pairwise_distances(&sources, &targets).unwrap();
/// assert_eq!(m.get(0, 0), 0.0);
/// assert_eq!(m.get(1, 0), 5.0);
/// ```
pub fn pairwise_distances(
    sources: &[Point],
    targets: &[Point],
) -> Result<DistanceMatrix, GridError> {
    check_points_2d(sources)?;
    check_points_2d(targets)?;
    Ok(DistanceMatrix::from_fn(
        sources.len(),
        targets.len(),
        |i, j| euclidean(&sources[i], &targets[j]),
    ))
}

/// Minimum distance from each source point to the target set.
///
/// Fails with `EmptyPointSet` if either side is empty: a row minimum
/// over zero targets is undefined, and zero sources almost always
/// indicate a caller bug.
pub fn nearest_distances(sources: &[Point], targets: &[Point]) -> Result<Vec<f64>, GridError> {
    check_non_empty(sources, "source")?;
    check_non_empty(targets, "target")?;
    let matrix = pairwise_distances(sources, targets)?;
    Ok((0..matrix.rows).map(|i| row_min(&matrix, i)).collect())
}

/// For each source point, the set of target indices attaining its
/// minimum distance.
///
/// Each entry holds at least one index; on exact ties it holds every
/// tied index in ascending order. All indices lie in
/// `[0, targets.len())`. Fails with `EmptyPointSet` as
/// [`nearest_distances`] does.
pub fn nearest_indices(
    sources: &[Point],
    targets: &[Point],
) -> Result<Vec<TiedIndices>, GridError> {
    check_non_empty(sources, "source")?;
    check_non_empty(targets, "target")?;
    let matrix = pairwise_distances(sources, targets)?;
    let mut out = Vec::with_capacity(matrix.rows);
    for i in 0..matrix.rows {
        let min = row_min(&matrix, i);
        let ties: TiedIndices = matrix
            .row(i)
            .iter()
            .enumerate()
            .filter(|&(_, d)| *d == min)
            .map(|(j, _)| j)
            .collect();
        out.push(ties);
    }
    Ok(out)
}

fn row_min(matrix: &DistanceMatrix, i: usize) -> f64 {
    matrix.row(i).iter().copied().fold(f64::INFINITY, f64::min)
}

impl Grid {
    /// Distance matrix from the domain point set to the stored target
    /// set.
    ///
    /// Fails with `MissingTargetSet` if no target has been supplied.
    pub fn pairwise_to_target(&self) -> Result<DistanceMatrix, GridError> {
        pairwise_distances(&self.domain, self.require_target()?)
    }

    /// Minimum distance from each domain point to the stored target
    /// set.
    pub fn nearest_to_target(&self) -> Result<Vec<f64>, GridError> {
        nearest_distances(&self.domain, self.require_target()?)
    }

    /// Tied nearest target indices for each domain point.
    pub fn nearest_target_indices(&self) -> Result<Vec<TiedIndices>, GridError> {
        nearest_indices(&self.domain, self.require_target()?)
    }
}

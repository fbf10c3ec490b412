//! Contract assertion helpers shared across test modules.
//!
//! These functions verify the distance-engine invariants from first
//! principles (independent formula evaluation, exhaustive tie scans)
//! and are reused by the distance and correspondence test modules.

use crate::distance::{nearest_distances, nearest_indices};
use mindist_core::{DistanceMatrix, Point};

/// Assert the pairwise matrix contract: N×M shape, non-negative
/// entries, and agreement with an independently computed
/// `sqrt(dx² + dy²)` for every pair.
pub(crate) fn assert_matrix_contract(
    sources: &[Point],
    targets: &[Point],
    matrix: &DistanceMatrix,
) {
    assert_eq!(matrix.rows, sources.len());
    assert_eq!(matrix.cols, targets.len());
    for (i, s) in sources.iter().enumerate() {
        for (j, t) in targets.iter().enumerate() {
            let expected = ((s[0] - t[0]).powi(2) + (s[1] - t[1]).powi(2)).sqrt();
            let got = matrix.get(i, j);
            assert!(got >= 0.0, "entry ({i}, {j}) = {got} is negative");
            assert!(
                (got - expected).abs() < 1e-12,
                "entry ({i}, {j}) = {got}, independent formula gives {expected}"
            );
        }
    }
}

/// Assert that nearest distances equal row minima and that the tie
/// sets contain exactly the in-range, ascending indices attaining
/// each minimum.
pub(crate) fn assert_nearest_consistent(sources: &[Point], targets: &[Point]) {
    let matrix = crate::distance::pairwise_distances(sources, targets).unwrap();
    let mins = nearest_distances(sources, targets).unwrap();
    let ties = nearest_indices(sources, targets).unwrap();
    assert_eq!(mins.len(), sources.len());
    assert_eq!(ties.len(), sources.len());

    for i in 0..sources.len() {
        let row = matrix.row(i);
        let row_min = row.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(mins[i], row_min, "nearest_distances[{i}] != row minimum");

        assert!(!ties[i].is_empty(), "tie set {i} is empty");
        for w in ties[i].windows(2) {
            assert!(w[0] < w[1], "tie set {i} not strictly ascending");
        }
        for &j in &ties[i] {
            assert!(j < targets.len(), "tie index {j} out of range");
            assert_eq!(matrix.get(i, j), row_min, "tie ({i}, {j}) misses minimum");
        }
        let expected_count = row.iter().filter(|&&d| d == row_min).count();
        assert_eq!(
            ties[i].len(),
            expected_count,
            "tie set {i} misses tied indices"
        );
    }
}

//! Nearest-neighbor correspondence data for render layers.
//!
//! The crate draws nothing. A plotting collaborator needs, for each
//! source point, the segment to its nearest target and the one
//! "worst-case" segment whose minimum distance is largest; this
//! module computes exactly that data and hands it over.

use crate::distance::pairwise_distances;
use crate::grid::Grid;
use mindist_core::{GridError, Point};

/// One source point paired with its nearest target.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The source point.
    pub source: Point,
    /// Its nearest target point (first tied target on exact ties).
    pub target: Point,
    /// Index of `target` in the target set.
    pub target_index: usize,
}

/// Full nearest-neighbor correspondence between a source and a target
/// set.
#[derive(Clone, Debug, PartialEq)]
pub struct Correspondence {
    /// One segment per source point, in source order.
    pub segments: Vec<Segment>,
    /// Minimum distance per source point, aligned with `segments`.
    pub min_distances: Vec<f64>,
    /// Index of the source point whose minimum distance is largest
    /// (first such point on ties) — the worst-covered location.
    pub worst: usize,
}

impl Correspondence {
    /// The segment of the worst-covered source point.
    pub fn worst_segment(&self) -> &Segment {
        &self.segments[self.worst]
    }

    /// The largest of the per-source minimum distances.
    pub fn worst_distance(&self) -> f64 {
        self.min_distances[self.worst]
    }
}

/// Compute the nearest-neighbor correspondence between two point sets.
///
/// Fails with `EmptyPointSet` if either side is empty (the worst pair
/// would be undefined) and `ShapeMismatch` on malformed points.
pub fn correspondence(
    sources: &[Point],
    targets: &[Point],
) -> Result<Correspondence, GridError> {
    if sources.is_empty() {
        return Err(GridError::EmptyPointSet { what: "source" });
    }
    if targets.is_empty() {
        return Err(GridError::EmptyPointSet { what: "target" });
    }
    let matrix = pairwise_distances(sources, targets)?;

    let mut segments = Vec::with_capacity(sources.len());
    let mut min_distances = Vec::with_capacity(sources.len());
    let mut worst = 0usize;
    for (i, source) in sources.iter().enumerate() {
        let row = matrix.row(i);
        let mut best = 0usize;
        for (j, &d) in row.iter().enumerate() {
            if d < row[best] {
                best = j;
            }
        }
        segments.push(Segment {
            source: source.clone(),
            target: targets[best].clone(),
            target_index: best,
        });
        min_distances.push(row[best]);
        if row[best] > min_distances[worst] {
            worst = i;
        }
    }

    Ok(Correspondence {
        segments,
        min_distances,
        worst,
    })
}

impl Grid {
    /// Correspondence from the domain point set to the stored target
    /// set.
    ///
    /// Fails with `MissingTargetSet` if no target has been supplied.
    pub fn target_correspondence(&self) -> Result<Correspondence, GridError> {
        correspondence(&self.domain, self.require_target()?)
    }
}

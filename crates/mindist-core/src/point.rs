//! The [`Point`] type alias and its shape contract.

use crate::error::GridError;
use smallvec::SmallVec;

/// A point in the analysis plane.
///
/// Uses `SmallVec<[f64; 2]>` so the common 2D case never allocates.
/// The length is a runtime contract, not a type-level one: every
/// public operation validates that each input point carries exactly
/// two coordinates and returns [`GridError::ShapeMismatch`] otherwise,
/// so malformed caller data is rejected at the API boundary rather
/// than producing a garbage distance.
pub type Point = SmallVec<[f64; 2]>;

/// Check that a point is 2D and return its `(x, y)` coordinates.
///
/// `index` is the point's position within the caller's batch and is
/// reported in the error for diagnosis.
pub fn check_point_2d(point: &Point, index: usize) -> Result<(f64, f64), GridError> {
    if point.len() != 2 {
        return Err(GridError::ShapeMismatch {
            index,
            len: point.len(),
        });
    }
    Ok((point[0], point[1]))
}

/// Check that every point in a batch is 2D.
///
/// Returns the first violation; points after it are not inspected.
pub fn check_points_2d(points: &[Point]) -> Result<(), GridError> {
    for (index, point) in points.iter().enumerate() {
        check_point_2d(point, index)?;
    }
    Ok(())
}

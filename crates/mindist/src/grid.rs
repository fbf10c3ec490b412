//! Grid construction from bounds and resolution.

use mindist_core::{check_points_2d, GridError, Point};
use smallvec::smallvec;

/// A discretized 2D analysis domain.
///
/// The domain is the centered rectangle `[-x_limit, x_limit] x
/// [-y_limit, y_limit]`, sampled at `grid_size` evenly spaced
/// coordinates per axis (bounds inclusive). Each axis sample sits at
/// the center of its cell: the `grid_size + 1` cell edges per axis are
/// offset outward by exactly half a step, so `edge[i] <= sample[i] <=
/// edge[i + 1]` for every `i`.
///
/// Bounds and resolution are immutable once the grid is built. The
/// only mutable state is the current target set, replaced by
/// [`set_target`](Self::set_target) or
/// [`discretize`](Self::discretize). A grid is owned by one caller at
/// a time; callers needing shared access must synchronize externally.
///
/// # Examples
///
/// ```
/// use mindist::Grid;
///
/// let grid = Grid::new(3, 1.0, 1.0).unwrap();
/// assert_eq!(grid.x_axis(), &[-1.0, 0.0, 1.0]);
/// assert_eq!(grid.x_edges(), &[-1.5, -0.5, 0.5, 1.5]);
/// assert_eq!(grid.domain_points().len(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) grid_size: usize,
    x_limit: f64,
    y_limit: f64,
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    pub(crate) x_edges: Vec<f64>,
    pub(crate) y_edges: Vec<f64>,
    half_step_x: f64,
    half_step_y: f64,
    pub(crate) domain: Vec<Point>,
    pub(crate) target: Option<Vec<Point>>,
}

/// Evenly spaced samples over `[start, stop]`, both ends inclusive.
///
/// The endpoint is written exactly rather than accumulated, so
/// `linspace(a, b, n).last() == b` regardless of rounding.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = (stop - start) / (count - 1) as f64;
    let mut out: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    if let Some(last) = out.last_mut() {
        *last = stop;
    }
    out
}

fn check_limit(axis: &'static str, value: f64) -> Result<(), GridError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GridError::NonPositiveLimit { axis, value });
    }
    Ok(())
}

impl Grid {
    /// Default half-width for both axes when none is given.
    pub const DEFAULT_LIMIT: f64 = 1.2;

    /// Create a grid over `[-x_limit, x_limit] x [-y_limit, y_limit]`
    /// with `grid_size` samples per axis.
    ///
    /// Returns `Err(GridError::InvalidResolution)` if `grid_size < 2`
    /// (a step size requires two samples), or
    /// `Err(GridError::NonPositiveLimit)` if either half-width is not
    /// a positive finite number.
    pub fn new(grid_size: usize, x_limit: f64, y_limit: f64) -> Result<Self, GridError> {
        if grid_size < 2 {
            return Err(GridError::InvalidResolution { grid_size });
        }
        check_limit("x", x_limit)?;
        check_limit("y", y_limit)?;

        let x_axis = linspace(-x_limit, x_limit, grid_size);
        let y_axis = linspace(-y_limit, y_limit, grid_size);
        let half_step_x = (x_axis[1] - x_axis[0]) / 2.0;
        let half_step_y = (y_axis[1] - y_axis[0]) / 2.0;
        let x_edges = linspace(-x_limit - half_step_x, x_limit + half_step_x, grid_size + 1);
        let y_edges = linspace(-y_limit - half_step_y, y_limit + half_step_y, grid_size + 1);

        // Row-major domain enumeration: x varies fastest, so the flat
        // index of cell (ix, iy) is iy * grid_size + ix.
        let mut domain = Vec::with_capacity(grid_size * grid_size);
        for &y in &y_axis {
            for &x in &x_axis {
                domain.push(smallvec![x, y]);
            }
        }

        Ok(Self {
            grid_size,
            x_limit,
            y_limit,
            x_axis,
            y_axis,
            x_edges,
            y_edges,
            half_step_x,
            half_step_y,
            domain,
            target: None,
        })
    }

    /// Create a grid with the default half-width
    /// ([`DEFAULT_LIMIT`](Self::DEFAULT_LIMIT)) on both axes.
    pub fn with_default_limits(grid_size: usize) -> Result<Self, GridError> {
        Self::new(grid_size, Self::DEFAULT_LIMIT, Self::DEFAULT_LIMIT)
    }

    /// Samples per axis.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Half-width of the domain on the x axis.
    pub fn x_limit(&self) -> f64 {
        self.x_limit
    }

    /// Half-width of the domain on the y axis.
    pub fn y_limit(&self) -> f64 {
        self.y_limit
    }

    /// Axis samples along x, ascending, bounds inclusive.
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    /// Axis samples along y, ascending, bounds inclusive.
    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Cell edges along x: `grid_size + 1` boundaries, half a step
    /// outside the bounds at either end.
    pub fn x_edges(&self) -> &[f64] {
        &self.x_edges
    }

    /// Cell edges along y.
    pub fn y_edges(&self) -> &[f64] {
        &self.y_edges
    }

    /// Half the x-axis sample spacing.
    pub fn half_step_x(&self) -> f64 {
        self.half_step_x
    }

    /// Half the y-axis sample spacing.
    pub fn half_step_y(&self) -> f64 {
        self.half_step_y
    }

    /// The flattened domain point set, `grid_size²` points in
    /// row-major order (x varies fastest).
    pub fn domain_points(&self) -> &[Point] {
        &self.domain
    }

    /// The current target set, if one has been supplied.
    pub fn target(&self) -> Option<&[Point]> {
        self.target.as_deref()
    }

    /// Replace the current target set.
    ///
    /// Every point must have exactly 2 coordinates; otherwise the
    /// call fails with `GridError::ShapeMismatch` and the previous
    /// target set is left in place.
    pub fn set_target(&mut self, points: &[Point]) -> Result<(), GridError> {
        check_points_2d(points)?;
        self.target = Some(points.to_vec());
        Ok(())
    }

    /// The current target set, or `MissingTargetSet` if none has ever
    /// been supplied.
    pub(crate) fn require_target(&self) -> Result<&[Point], GridError> {
        self.target.as_deref().ok_or(GridError::MissingTargetSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn worked_example_grid3() {
        let grid = Grid::new(3, 1.0, 1.0).unwrap();
        assert_eq!(grid.x_axis(), &[-1.0, 0.0, 1.0]);
        assert_eq!(grid.y_axis(), &[-1.0, 0.0, 1.0]);
        assert_eq!(grid.x_edges(), &[-1.5, -0.5, 0.5, 1.5]);
        assert_eq!(grid.y_edges(), &[-1.5, -0.5, 0.5, 1.5]);
        assert_eq!(grid.half_step_x(), 0.5);
        assert_eq!(grid.domain_points().len(), 9);
    }

    #[test]
    fn domain_is_row_major_x_fastest() {
        let grid = Grid::new(2, 1.0, 2.0).unwrap();
        let pts: Vec<(f64, f64)> = grid
            .domain_points()
            .iter()
            .map(|p| (p[0], p[1]))
            .collect();
        assert_eq!(
            pts,
            vec![(-1.0, -2.0), (1.0, -2.0), (-1.0, 2.0), (1.0, 2.0)]
        );
    }

    #[test]
    fn samples_sit_inside_their_cells() {
        for grid_size in [2usize, 3, 5, 8, 13] {
            let grid = Grid::new(grid_size, 1.2, 0.7).unwrap();
            for i in 0..grid_size {
                assert!(grid.x_edges()[i] <= grid.x_axis()[i]);
                assert!(grid.x_axis()[i] <= grid.x_edges()[i + 1]);
                assert!(grid.y_edges()[i] <= grid.y_axis()[i]);
                assert!(grid.y_axis()[i] <= grid.y_edges()[i + 1]);
            }
        }
    }

    #[test]
    fn axis_spacing_is_uniform() {
        let grid = Grid::new(7, 1.2, 1.2).unwrap();
        let xs = grid.x_axis();
        let step = xs[1] - xs[0];
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
        assert_eq!(*xs.first().unwrap(), -1.2);
        assert_eq!(*xs.last().unwrap(), 1.2);
    }

    #[test]
    fn default_limits() {
        let grid = Grid::with_default_limits(4).unwrap();
        assert_eq!(grid.x_limit(), Grid::DEFAULT_LIMIT);
        assert_eq!(grid.y_limit(), Grid::DEFAULT_LIMIT);
    }

    #[test]
    fn rejects_resolution_below_two() {
        assert!(matches!(
            Grid::new(0, 1.0, 1.0),
            Err(GridError::InvalidResolution { grid_size: 0 })
        ));
        assert!(matches!(
            Grid::new(1, 1.0, 1.0),
            Err(GridError::InvalidResolution { grid_size: 1 })
        ));
        assert!(Grid::new(2, 1.0, 1.0).is_ok());
    }

    #[test]
    fn rejects_bad_limits() {
        assert!(matches!(
            Grid::new(3, 0.0, 1.0),
            Err(GridError::NonPositiveLimit { axis: "x", .. })
        ));
        assert!(matches!(
            Grid::new(3, 1.0, -2.0),
            Err(GridError::NonPositiveLimit { axis: "y", .. })
        ));
        assert!(Grid::new(3, 1.0, f64::NAN).is_err());
        assert!(Grid::new(3, f64::INFINITY, 1.0).is_err());
    }

    // ── Target set ──────────────────────────────────────────────

    #[test]
    fn target_starts_unset() {
        let grid = Grid::new(3, 1.0, 1.0).unwrap();
        assert!(grid.target().is_none());
        assert_eq!(grid.require_target(), Err(GridError::MissingTargetSet));
    }

    #[test]
    fn set_target_stores_points() {
        let mut grid = Grid::new(3, 1.0, 1.0).unwrap();
        let pts: Vec<Point> = vec![smallvec![0.1, 0.2], smallvec![-0.3, 0.4]];
        grid.set_target(&pts).unwrap();
        assert_eq!(grid.target().unwrap(), pts.as_slice());
    }

    #[test]
    fn set_target_rejects_bad_shape_and_keeps_previous() {
        let mut grid = Grid::new(3, 1.0, 1.0).unwrap();
        let good: Vec<Point> = vec![smallvec![0.1, 0.2]];
        grid.set_target(&good).unwrap();

        let bad: Vec<Point> = vec![smallvec![0.1, 0.2], smallvec![1.0]];
        assert!(matches!(
            grid.set_target(&bad),
            Err(GridError::ShapeMismatch { index: 1, len: 1 })
        ));
        assert_eq!(grid.target().unwrap(), good.as_slice());
    }
}

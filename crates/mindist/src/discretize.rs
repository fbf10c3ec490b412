//! Snapping arbitrary points onto the grid.

use crate::grid::Grid;
use indexmap::IndexSet;
use mindist_core::{check_point_2d, GridError, Point};

/// Index of the edge interval containing `value`, scanning from the
/// low end with early exit.
///
/// Intervals are inclusive on both ends, so a point exactly on a
/// shared interior edge resolves to the lower interval. Returns
/// `None` when `value` lies outside `[edges[0], edges[last]]`.
fn locate_interval(value: f64, edges: &[f64]) -> Option<usize> {
    for i in 0..edges.len() - 1 {
        if value >= edges[i] && value <= edges[i + 1] {
            return Some(i);
        }
    }
    None
}

fn axis_extent(edges: &[f64]) -> String {
    format!("[{}, {}]", edges[0], edges[edges.len() - 1])
}

impl Grid {
    /// Snap a single point to the grid sample at the center of its
    /// cell, without touching the stored target set.
    ///
    /// Fails with `OutOfDomain` if the point lies outside the covered
    /// extent on either axis, and `ShapeMismatch` if it is not 2D.
    pub fn snap(&self, point: &Point) -> Result<Point, GridError> {
        let (ix, iy) = self.snap_cell(point, 0)?;
        Ok(self.domain[iy * self.grid_size + ix].clone())
    }

    /// Snap `points` onto the grid, deduplicate, store the result as
    /// the current target set, and return it.
    ///
    /// The batch is all-or-nothing: a single out-of-domain or
    /// malformed point fails the whole call and leaves the previous
    /// target set in place. The returned set is sorted in canonical
    /// domain order (row-major flat index ascending) and is always a
    /// subset of the domain point set.
    pub fn discretize(&mut self, points: &[Point]) -> Result<Vec<Point>, GridError> {
        let mut cells: IndexSet<(usize, usize)> = IndexSet::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            cells.insert(self.snap_cell(point, index)?);
        }

        let mut cells: Vec<(usize, usize)> = cells.into_iter().collect();
        cells.sort_by_key(|&(ix, iy)| iy * self.grid_size + ix);

        let snapped: Vec<Point> = cells
            .iter()
            .map(|&(ix, iy)| self.domain[iy * self.grid_size + ix].clone())
            .collect();
        self.target = Some(snapped.clone());
        Ok(snapped)
    }

    /// Resolve a point to its `(ix, iy)` cell indices.
    fn snap_cell(&self, point: &Point, index: usize) -> Result<(usize, usize), GridError> {
        let (x, y) = check_point_2d(point, index)?;
        let ix = locate_interval(x, &self.x_edges).ok_or_else(|| GridError::OutOfDomain {
            point: point.clone(),
            axis: "x",
            bounds: axis_extent(&self.x_edges),
        })?;
        let iy = locate_interval(y, &self.y_edges).ok_or_else(|| GridError::OutOfDomain {
            point: point.clone(),
            axis: "y",
            bounds: axis_extent(&self.y_edges),
        })?;
        Ok((ix, iy))
    }
}

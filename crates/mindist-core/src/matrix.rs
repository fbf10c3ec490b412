//! Row-major distance matrix carrier.

/// A dense N×M matrix of non-negative distances.
///
/// Entry `(i, j)` is the distance from source point `i` to target
/// point `j`. Storage is row-major; the representation is part of the
/// contract so render layers can address it directly.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    /// Number of source points (rows).
    pub rows: usize,
    /// Number of target points (columns).
    pub cols: usize,
    /// Row-major entries, length `rows * cols`.
    pub data: Vec<f64>,
}

impl DistanceMatrix {
    /// Build a matrix by evaluating `f(i, j)` for every entry in
    /// row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Entry `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        self.data[i * self.cols + j]
    }

    /// Row `i` as a slice of length `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of range");
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Minimum entry of row `i`, or `None` when the matrix has no
    /// columns.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row_min(&self, i: usize) -> Option<f64> {
        self.row(i).iter().copied().reduce(f64::min)
    }
}

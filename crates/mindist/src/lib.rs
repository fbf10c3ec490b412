//! Nearest-neighbor distance analysis over a discretized 2D grid.
//!
//! The central type is [`Grid`]: a centered rectangular domain sampled
//! at `grid_size` evenly spaced coordinates per axis, with cell edges
//! half a step either side of each sample. On top of it sit four
//! capabilities:
//!
//! - **Distance engine**: brute-force N×M Euclidean
//!   [`pairwise_distances`], per-source [`nearest_distances`], and
//!   exact-tie [`nearest_indices`] between any two point sets.
//! - **Discretizer**: [`Grid::discretize`] snaps arbitrary points onto
//!   the grid, deduplicates, and stores the result as the current
//!   target set.
//! - **Density reducer**: [`reduce_density`] selects a
//!   parity-alternating half of a square point set, checkerboard
//!   ([`ReductionMode::Mesh`]) or striped ([`ReductionMode::Vertical`]).
//! - **Correspondence export**: [`correspondence`] produces the
//!   segment and worst-pair data a render layer consumes; this crate
//!   draws nothing itself.
//!
//! Everything is synchronous, in-memory, and single-caller; all
//! failures are deterministic [`GridError`] values.
//!
//! # Examples
//!
//! ```
//! use mindist::{Grid, ReductionMode};
//! use smallvec::smallvec;
//!
//! let mut grid = Grid::with_default_limits(5).unwrap();
//! let snapped = grid.discretize(&[smallvec![0.13, -0.48]]).unwrap();
//! assert_eq!(snapped.len(), 1);
//!
//! let mins = grid.nearest_to_target().unwrap();
//! assert_eq!(mins.len(), 25);
//!
//! let sparse = grid.reduce_density(ReductionMode::Mesh);
//! assert_eq!(sparse.len(), 13);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod correspondence;
pub mod discretize;
pub mod distance;
pub mod grid;
pub mod reduce;

#[cfg(test)]
pub(crate) mod checks;

pub use correspondence::{correspondence, Correspondence, Segment};
pub use distance::{nearest_distances, nearest_indices, pairwise_distances, TiedIndices};
pub use grid::Grid;
pub use mindist_core::{DistanceMatrix, GridError, Point};
pub use reduce::{reduce_density, reduce_density_indices, ReductionMode};

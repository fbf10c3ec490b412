//! Error types for grid construction and analysis.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, distance queries,
/// discretization, or density reduction.
///
/// All failures are deterministic and raised synchronously at the call
/// that detects them; no operation returns a partial result on error.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Grid resolution is too small to define a step size.
    ///
    /// Axis samples span `[-limit, limit]` inclusive, so at least two
    /// samples per axis are required.
    InvalidResolution {
        /// The rejected samples-per-axis count.
        grid_size: usize,
    },
    /// A domain half-width is not a positive finite number.
    NonPositiveLimit {
        /// Which axis the limit applies to (`"x"` or `"y"`).
        axis: &'static str,
        /// The rejected half-width.
        value: f64,
    },
    /// An input point does not have exactly 2 coordinates.
    ShapeMismatch {
        /// Position of the offending point in the input batch.
        index: usize,
        /// Its actual coordinate count.
        len: usize,
    },
    /// A grid-level distance query was issued with no target set
    /// supplied, by `set_target` or by a prior `discretize`.
    MissingTargetSet,
    /// A discretization input lies outside the grid's covered extent.
    OutOfDomain {
        /// The offending point.
        point: Point,
        /// The axis on which it falls outside the edges (`"x"` or `"y"`).
        axis: &'static str,
        /// Human-readable description of the covered extent.
        bounds: String,
    },
    /// Density reduction was given a point count with no integer
    /// square root.
    NonSquareInput {
        /// The rejected point count.
        count: usize,
    },
    /// A nearest-neighbor query was issued over an empty point set,
    /// where a row minimum is undefined.
    EmptyPointSet {
        /// Which side was empty (`"source"` or `"target"`).
        what: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { grid_size } => {
                write!(f, "grid resolution {grid_size} too small, need at least 2 samples per axis")
            }
            Self::NonPositiveLimit { axis, value } => {
                write!(f, "{axis}-limit {value} must be a positive finite half-width")
            }
            Self::ShapeMismatch { index, len } => {
                write!(f, "point {index} has {len} coordinates, expected 2")
            }
            Self::MissingTargetSet => write!(f, "no target set has been supplied"),
            Self::OutOfDomain {
                point,
                axis,
                bounds,
            } => {
                write!(f, "point {point:?} outside {axis}-extent {bounds}")
            }
            Self::NonSquareInput { count } => {
                write!(f, "point count {count} is not a perfect square")
            }
            Self::EmptyPointSet { what } => {
                write!(f, "nearest-neighbor query over empty {what} set")
            }
        }
    }
}

impl Error for GridError {}

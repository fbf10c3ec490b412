//! Core types for mindist grid analysis.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the mindist workspace:
//! the [`Point`] type and its shape contract, the [`GridError`]
//! taxonomy, and the [`DistanceMatrix`] carrier.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod point;

pub use error::GridError;
pub use matrix::DistanceMatrix;
pub use point::{check_point_2d, check_points_2d, Point};

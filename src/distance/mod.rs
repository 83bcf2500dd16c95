//! Planar geometry and precomputed distances.
//!
//! Provides the Euclidean distance between any two located entities and a
//! dense matrix caching those distances for a problem instance.

mod euclidean;
mod matrix;

pub use euclidean::{euclidean, Point};
pub use matrix::DistanceMatrix;

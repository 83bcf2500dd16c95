//! Learned edge desirability.
//!
//! A square matrix over customer ids that candidate solutions reinforce and
//! that decays once per iteration.

mod matrix;

pub use matrix::PheromoneMatrix;

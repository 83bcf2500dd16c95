//! Solution scoring and ranking.
//!
//! Computes the travelled distance of routes and fleets and orders candidate
//! solutions by vehicles used first, then total distance.

mod evaluator;

pub use evaluator::{evaluate, route_distance, Evaluation};

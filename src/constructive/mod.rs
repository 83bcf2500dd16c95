//! Constructive procedure run by each ant.
//!
//! - [`AntConstructor`] — builds one fleet of closed routes, vehicle by
//!   vehicle, from a private pool of unvisited customers
//! - [`SelectionRule`] — how the next customer is picked: greedy nearest
//!   feasible neighbor, or pheromone-weighted roulette selection

mod ant;

pub use ant::{AntConstructor, SelectionRule};

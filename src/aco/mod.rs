//! Pheromone-guided fleet search (ant colony optimization).
//!
//! Repeatedly lets a population of ants construct candidate fleets, keeps the
//! best one under the ranking rule (fewer vehicles, then shorter distance),
//! and feeds every candidate back into the pheromone matrix before it
//! evaporates.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Gambardella, Taillard & Agazzi (1999), "MACS-VRPTW: A Multiple Ant
//!   Colony System for Vehicle Routing Problems with Time Windows"

mod config;
mod runner;

pub use config::{AcoConfig, SelectionMode};
pub use runner::{AcoResult, AcoRunner, BestFound};

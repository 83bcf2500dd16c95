//! # u-antroute
//!
//! Pheromone-guided fleet optimizer for the vehicle routing problem with time
//! windows (VRPTW). A population of ants builds capacity-feasible fleets of
//! depot-to-depot routes; the best fleet is the one using the fewest
//! vehicles, then the shortest total distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Customer, Depot, Vehicle, Stop, Solution, Instance)
//! - [`distance`] — Euclidean distance and the precomputed distance matrix
//! - [`evaluation`] — Route length, fleet evaluation, and the ranking rule
//! - [`constructive`] — Per-ant fleet construction (greedy or pheromone-weighted)
//! - [`pheromone`] — Pheromone matrix with reinforcement and evaporation
//! - [`aco`] — Search loop, configuration, and run result
//! - [`report`] — Serializable run summary for reporting and plotting
//!
//! ## Example
//!
//! ```
//! use u_antroute::aco::{AcoConfig, AcoRunner};
//! use u_antroute::models::{Customer, Depot, Instance, TimeWindow};
//!
//! let depot = Depot::new(40.0, 50.0);
//! let customers = vec![
//!     Customer::new(0, 45.0, 68.0, 10.0, 90.0)
//!         .with_time_window(TimeWindow::new(912.0, 967.0).unwrap()),
//!     Customer::new(1, 45.0, 70.0, 30.0, 90.0)
//!         .with_time_window(TimeWindow::new(825.0, 870.0).unwrap()),
//!     Customer::new(2, 42.0, 66.0, 10.0, 90.0)
//!         .with_time_window(TimeWindow::new(65.0, 146.0).unwrap()),
//! ];
//! let instance = Instance::new(depot, customers).unwrap();
//!
//! let config = AcoConfig::default()
//!     .with_max_iterations(10)
//!     .with_num_ants(5)
//!     .with_fleet_size(3)
//!     .with_capacity(200.0)
//!     .with_seed(1);
//! let result = AcoRunner::run(&instance, &config).unwrap();
//!
//! let best = result.best_solution().unwrap();
//! assert_eq!(best.num_served(), 3);
//! for vehicle in best.vehicles().iter().filter(|v| v.is_used()) {
//!     println!("{vehicle}");
//! }
//! ```

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod models;
pub mod pheromone;
pub mod report;

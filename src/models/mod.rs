//! Domain model types for the fleet optimizer.
//!
//! Customers with demands and time windows, the shared depot, vehicles that
//! accumulate routes of [`Stop`]s, candidate solutions, and the validated
//! problem instance that ties them together.

mod customer;
mod instance;
mod route;
mod solution;
mod vehicle;

pub use customer::{Customer, Depot, TimeWindow};
pub use instance::Instance;
pub use route::Stop;
pub use solution::Solution;
pub use vehicle::Vehicle;

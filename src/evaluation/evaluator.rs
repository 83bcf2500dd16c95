//! Route length, fleet evaluation, and the ranking rule.

use serde::{Deserialize, Serialize};

use crate::distance::euclidean;
use crate::models::{Customer, Depot, Solution, Stop};

/// Score of one candidate solution.
///
/// # Examples
///
/// ```
/// use u_antroute::evaluation::Evaluation;
///
/// let fewer = Evaluation { total_distance: 120.0, vehicles_used: 2 };
/// let shorter = Evaluation { total_distance: 90.0, vehicles_used: 3 };
/// assert!(fewer.is_better_than(&shorter));
/// assert!(!shorter.is_better_than(&fewer));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of route lengths over the fleet.
    pub total_distance: f64,
    /// Vehicles serving at least one customer.
    pub vehicles_used: usize,
}

impl Evaluation {
    /// Lexicographic comparison: fewer vehicles, then shorter distance.
    ///
    /// Ties return `false`, so an incumbent is never replaced by an equal.
    pub fn is_better_than(&self, other: &Evaluation) -> bool {
        self.vehicles_used < other.vehicles_used
            || (self.vehicles_used == other.vehicles_used
                && self.total_distance < other.total_distance)
    }
}

/// Length of a route that starts at `depot`.
///
/// Depot markers before the last element are skipped. The return leg runs
/// from the last element of `stops` to the depot, so it is zero for a route
/// closed with [`Stop::Depot`] and only a route ending on a customer pays
/// for it. A route without customers has length zero.
pub fn route_distance(depot: &Depot, stops: &[Stop]) -> f64 {
    let mut total = 0.0;
    let mut prev: Option<&Customer> = None;
    for customer in stops.iter().filter_map(Stop::customer) {
        total += match prev {
            Some(p) => euclidean(p, customer),
            None => euclidean(depot, customer),
        };
        prev = Some(customer);
    }
    if let Some(Stop::Customer(last)) = stops.last() {
        total += euclidean(last, depot);
    }
    total
}

/// Total distance and number of used vehicles for a solution.
pub fn evaluate(depot: &Depot, solution: &Solution) -> Evaluation {
    let mut total_distance = 0.0;
    let mut vehicles_used = 0;
    for vehicle in solution.vehicles() {
        total_distance += route_distance(depot, vehicle.route());
        if vehicle.is_used() {
            vehicles_used += 1;
        }
    }
    Evaluation {
        total_distance,
        vehicles_used,
    }
}

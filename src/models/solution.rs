//! Candidate fleet assignment.

use serde::{Deserialize, Serialize};

use super::Vehicle;

/// One candidate fleet: every vehicle produced by a single constructive pass.
///
/// Vehicles with no customers stay in the fleet but are not counted as used.
///
/// # Examples
///
/// ```
/// use u_antroute::models::{Customer, Solution, Vehicle};
///
/// let mut used = Vehicle::new(10.0);
/// used.serve(Customer::new(0, 1.0, 0.0, 4.0, 0.0), 1.0);
/// used.close();
/// let mut idle = Vehicle::new(10.0);
/// idle.close();
///
/// let sol = Solution::new(vec![used, idle]);
/// assert_eq!(sol.num_vehicles(), 2);
/// assert_eq!(sol.num_used(), 1);
/// assert_eq!(sol.served_demand(), 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    vehicles: Vec<Vehicle>,
}

impl Solution {
    /// Wraps a fleet of vehicles.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// All vehicles, used or not.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Fleet size.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of vehicles serving at least one customer.
    pub fn num_used(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_used()).count()
    }

    /// Total number of customers served.
    pub fn num_served(&self) -> usize {
        self.vehicles.iter().map(|v| v.customers().count()).sum()
    }

    /// Total demand delivered across the fleet.
    pub fn served_demand(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::current_load).sum()
    }

    /// Customer ids per vehicle, in visit order.
    pub fn customer_ids(&self) -> Vec<Vec<usize>> {
        self.vehicles.iter().map(Vehicle::customer_ids).collect()
    }
}

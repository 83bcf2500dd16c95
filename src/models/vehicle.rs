//! Vehicle with capacity and an accumulated route.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Customer, Stop};

/// A capacity-limited vehicle and the route it has been given.
///
/// Load and elapsed time accumulate as customers are served. Elapsed time
/// is advisory: it is not compared against customer due dates.
///
/// # Examples
///
/// ```
/// use u_antroute::models::{Customer, Vehicle};
///
/// let mut v = Vehicle::new(100.0);
/// v.serve(Customer::new(4, 3.0, 4.0, 10.0, 2.0), 5.0);
/// v.close();
/// assert_eq!(v.current_load(), 10.0);
/// assert_eq!(v.current_time(), 7.0);
/// assert_eq!(v.to_string(), "Route: 4 -> Depot");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    capacity: f64,
    route: Vec<Stop>,
    current_load: f64,
    current_time: f64,
}

impl Vehicle {
    /// Creates an idle vehicle at the depot.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            route: Vec::new(),
            current_load: 0.0,
            current_time: 0.0,
        }
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Ordered stops, including depot markers.
    pub fn route(&self) -> &[Stop] {
        &self.route
    }

    /// Sum of served demand.
    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    /// Sum of travel and service time so far.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Returns `true` if `customer` fits into the remaining capacity.
    pub fn can_serve(&self, customer: &Customer) -> bool {
        self.current_load + customer.demand() <= self.capacity
    }

    /// Appends `customer` after travelling `travel` from the previous stop.
    pub fn serve(&mut self, customer: Customer, travel: f64) {
        self.current_load += customer.demand();
        self.current_time += travel + customer.service_time();
        self.route.push(Stop::Customer(customer));
    }

    /// Closes the route with a depot marker.
    pub fn close(&mut self) {
        self.route.push(Stop::Depot);
    }

    /// Customers in visit order, skipping depot markers.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.route.iter().filter_map(Stop::customer)
    }

    /// Customer ids in visit order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.customers().map(Customer::id).collect()
    }

    /// Returns `true` if the vehicle serves at least one customer.
    pub fn is_used(&self) -> bool {
        self.customers().next().is_some()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route: ")?;
        for (i, stop) in self.route.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            match stop {
                Stop::Customer(c) => write!(f, "{}", c.id())?,
                Stop::Depot => write!(f, "Depot")?,
            }
        }
        Ok(())
    }
}

//! Validated problem instance.

use std::collections::HashSet;

use anyhow::{bail, ensure, Result};

use super::{Customer, Depot};
use crate::distance::Point;

/// A depot plus the customers to serve, checked for consistency.
///
/// Customer ids must be unique and dense in `0..customers.len()`. An empty
/// customer list is accepted.
///
/// # Examples
///
/// ```
/// use u_antroute::models::{Customer, Depot, Instance};
///
/// let ok = Instance::new(Depot::new(0.0, 0.0), vec![Customer::new(0, 1.0, 1.0, 5.0, 0.0)]);
/// assert!(ok.is_ok());
///
/// let gap = Instance::new(Depot::new(0.0, 0.0), vec![Customer::new(3, 1.0, 1.0, 5.0, 0.0)]);
/// assert!(gap.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    depot: Depot,
    customers: Vec<Customer>,
}

impl Instance {
    /// Validates and wraps the problem data.
    pub fn new(depot: Depot, customers: Vec<Customer>) -> Result<Self> {
        ensure!(
            depot.x().is_finite() && depot.y().is_finite(),
            "depot coordinates must be finite, got ({}, {})",
            depot.x(),
            depot.y()
        );

        let n = customers.len();
        let mut seen = HashSet::with_capacity(n);
        for c in &customers {
            if c.id() >= n {
                bail!(
                    "customer id {} out of range: ids must be dense in 0..{}",
                    c.id(),
                    n
                );
            }
            if !seen.insert(c.id()) {
                bail!("duplicate customer id {}", c.id());
            }
            if !c.x().is_finite() || !c.y().is_finite() {
                bail!("customer {} has non-finite coordinates", c.id());
            }
            if !c.demand().is_finite() || c.demand() < 0.0 {
                bail!("customer {} has invalid demand {}", c.id(), c.demand());
            }
            if !c.service_time().is_finite() || c.service_time() < 0.0 {
                bail!(
                    "customer {} has invalid service time {}",
                    c.id(),
                    c.service_time()
                );
            }
        }

        Ok(Self { depot, customers })
    }

    /// The shared depot.
    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    /// Customers in input order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> f64 {
        self.customers.iter().map(Customer::demand).sum()
    }
}

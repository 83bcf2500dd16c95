//! Dense distance matrix over an instance's customers and depot.

use super::euclidean;
use crate::models::Instance;

/// A dense n×n distance matrix stored in row-major order.
///
/// Rows and columns `0..customer_count` are customer *positions* in the
/// instance's customer list; the last index is the depot.
///
/// # Examples
///
/// ```
/// use u_antroute::models::{Customer, Depot, Instance};
/// use u_antroute::distance::DistanceMatrix;
///
/// let instance = Instance::new(
///     Depot::new(0.0, 0.0),
///     vec![Customer::new(0, 3.0, 4.0, 1.0, 0.0), Customer::new(1, 0.0, 8.0, 1.0, 0.0)],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.depot_index(), 2);
/// assert!((dm.get(dm.depot_index(), 0) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean matrix for all customers plus the depot.
    pub fn from_instance(instance: &Instance) -> Self {
        let customers = instance.customers();
        let n = customers.len();
        let mut dm = Self::new(n + 1);
        for i in 0..n {
            let d = euclidean(instance.depot(), &customers[i]);
            dm.set(n, i, d);
            dm.set(i, n, d);
            for j in (i + 1)..n {
                let d = euclidean(&customers[i], &customers[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from position `from` to position `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from position `from` to position `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix (customers + depot).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the depot row/column.
    pub fn depot_index(&self) -> usize {
        self.size.saturating_sub(1)
    }
}

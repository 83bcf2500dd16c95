//! Dense pheromone matrix.

use tracing::warn;

use crate::evaluation::evaluate;
use crate::models::{Depot, Solution, Stop};

/// Pheromone level per directed customer-to-customer edge.
///
/// Indexed by customer id, so ids must be dense in `0..size`. Every entry
/// starts at 1.0. The size is fixed at construction.
///
/// # Examples
///
/// ```
/// use u_antroute::pheromone::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3);
/// assert_eq!(tau.get(0, 2), 1.0);
/// tau.evaporate(0.5);
/// assert_eq!(tau.get(0, 2), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an `size × size` matrix filled with 1.0.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![1.0; size * size],
            size,
        }
    }

    /// Number of customers covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pheromone on edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn cell_mut(&mut self, from: usize, to: usize) -> Option<&mut f64> {
        if from < self.size && to < self.size {
            self.data.get_mut(from * self.size + to)
        } else {
            None
        }
    }

    /// Adds `amount` to every consecutive customer pair in `solution`.
    ///
    /// Pairs touching a depot marker are skipped, as are ids outside the
    /// matrix.
    pub fn deposit(&mut self, solution: &Solution, amount: f64) {
        for vehicle in solution.vehicles() {
            for pair in vehicle.route().windows(2) {
                let (Stop::Customer(a), Stop::Customer(b)) = (&pair[0], &pair[1]) else {
                    continue;
                };
                match self.cell_mut(a.id(), b.id()) {
                    Some(cell) => *cell += amount,
                    None => warn!(
                        from = a.id(),
                        to = b.id(),
                        size = self.size,
                        "edge outside pheromone matrix, skipped"
                    ),
                }
            }
        }
    }

    /// Reinforces every solution's edges by `1 / total_distance`.
    ///
    /// Solutions with zero (or non-finite) total distance contribute nothing.
    pub fn reinforce(&mut self, depot: &Depot, population: &[Solution]) {
        for solution in population {
            let distance = evaluate(depot, solution).total_distance;
            if distance > 0.0 && distance.is_finite() {
                self.deposit(solution, 1.0 / distance);
            }
        }
    }

    /// Multiplies every entry by `rho`.
    ///
    /// `rho` is not validated; values at or above 1.0 never decay.
    pub fn evaporate(&mut self, rho: f64) {
        for v in &mut self.data {
            *v *= rho;
        }
    }
}

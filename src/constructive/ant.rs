//! Fleet construction by one ant.
//!
//! Vehicles are filled one after another. Each vehicle leaves the depot and
//! keeps adding a customer from the unvisited pool that fits its remaining
//! capacity, until none fits; then it returns to the depot and the next
//! vehicle starts. Customers still unvisited after the last vehicle are left
//! out of the candidate.
//!
//! # Complexity
//!
//! O(n²) distance lookups per candidate, n = number of customers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::models::{Instance, Solution, Vehicle};
use crate::pheromone::PheromoneMatrix;

/// Heuristic desirability used when a candidate sits at distance zero.
const ZERO_DISTANCE_HEURISTIC: f64 = 1e6;

/// How an ant picks the next customer among the feasible ones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SelectionRule {
    /// Nearest feasible customer; ties go to the earlier customer in the
    /// instance. Ignores pheromone and randomness.
    #[default]
    Greedy,
    /// Roulette-wheel selection weighted by `tau^alpha * (1/d)^beta`.
    ///
    /// Leaving the depot there is no pheromone edge, so `tau = 1`.
    Probabilistic {
        /// Pheromone exponent.
        alpha: f64,
        /// Inverse-distance exponent.
        beta: f64,
    },
}

/// Builds candidate fleets for one instance.
///
/// # Examples
///
/// ```
/// use u_antroute::constructive::{AntConstructor, SelectionRule};
/// use u_antroute::distance::DistanceMatrix;
/// use u_antroute::models::{Customer, Depot, Instance};
/// use u_antroute::pheromone::PheromoneMatrix;
///
/// let instance = Instance::new(
///     Depot::new(0.0, 0.0),
///     vec![
///         Customer::new(0, 3.0, 0.0, 10.0, 0.0),
///         Customer::new(1, 1.0, 0.0, 10.0, 0.0),
///         Customer::new(2, 2.0, 0.0, 10.0, 0.0),
///     ],
/// )
/// .unwrap();
/// let dm = DistanceMatrix::from_instance(&instance);
/// let tau = PheromoneMatrix::new(instance.num_customers());
/// let ant = AntConstructor::new(&instance, &dm, 20.0, 2);
///
/// let sol = ant.construct(SelectionRule::Greedy, &tau, &mut rand::rng());
/// assert_eq!(sol.customer_ids(), vec![vec![1, 2], vec![0]]);
/// ```
pub struct AntConstructor<'a> {
    instance: &'a Instance,
    distances: &'a DistanceMatrix,
    capacity: f64,
    fleet_size: usize,
}

impl<'a> AntConstructor<'a> {
    /// Creates a constructor for `fleet_size` vehicles of equal `capacity`.
    ///
    /// `distances` must come from [`DistanceMatrix::from_instance`] on the
    /// same instance.
    pub fn new(
        instance: &'a Instance,
        distances: &'a DistanceMatrix,
        capacity: f64,
        fleet_size: usize,
    ) -> Self {
        Self {
            instance,
            distances,
            capacity,
            fleet_size,
        }
    }

    /// Builds one candidate solution with exactly `fleet_size` vehicles.
    ///
    /// Every vehicle's route ends with a depot marker, including vehicles
    /// that serve nobody. The instance itself is never modified.
    pub fn construct<R: Rng>(
        &self,
        rule: SelectionRule,
        pheromone: &PheromoneMatrix,
        rng: &mut R,
    ) -> Solution {
        let customers = self.instance.customers();
        let depot = self.distances.depot_index();
        let mut unvisited: Vec<usize> = (0..customers.len()).collect();
        let mut vehicles = Vec::with_capacity(self.fleet_size);

        for _ in 0..self.fleet_size {
            let mut vehicle = Vehicle::new(self.capacity);
            let mut current = depot;

            while !unvisited.is_empty() {
                let next = match rule {
                    SelectionRule::Greedy => {
                        self.nearest_feasible(&vehicle, current, &unvisited)
                    }
                    SelectionRule::Probabilistic { alpha, beta } => self.roulette(
                        &vehicle, current, &unvisited, pheromone, alpha, beta, rng,
                    ),
                };
                let Some(slot) = next else {
                    break;
                };

                let pos = unvisited.remove(slot);
                let travel = self.distances.get(current, pos);
                vehicle.serve(customers[pos].clone(), travel);
                current = pos;
            }

            vehicle.close();
            vehicles.push(vehicle);
        }

        if !unvisited.is_empty() {
            trace!(
                left_over = unvisited.len(),
                fleet_size = self.fleet_size,
                "customers not covered by this candidate"
            );
        }

        Solution::new(vehicles)
    }

    /// Slot in `unvisited` of the closest customer that fits `vehicle`.
    fn nearest_feasible(
        &self,
        vehicle: &Vehicle,
        current: usize,
        unvisited: &[usize],
    ) -> Option<usize> {
        let customers = self.instance.customers();
        let mut best: Option<(usize, f64)> = None;
        for (slot, &pos) in unvisited.iter().enumerate() {
            if !vehicle.can_serve(&customers[pos]) {
                continue;
            }
            let d = self.distances.get(current, pos);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((slot, d));
            }
        }
        best.map(|(slot, _)| slot)
    }

    #[allow(clippy::too_many_arguments)]
    fn roulette<R: Rng>(
        &self,
        vehicle: &Vehicle,
        current: usize,
        unvisited: &[usize],
        pheromone: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> Option<usize> {
        let customers = self.instance.customers();
        let depot = self.distances.depot_index();

        let mut candidates: Vec<(usize, f64)> = Vec::new();
        for (slot, &pos) in unvisited.iter().enumerate() {
            if !vehicle.can_serve(&customers[pos]) {
                continue;
            }
            let tau = if current == depot {
                1.0
            } else {
                pheromone.get(customers[current].id(), customers[pos].id())
            };
            let d = self.distances.get(current, pos);
            let eta = if d > 0.0 { 1.0 / d } else { ZERO_DISTANCE_HEURISTIC };
            candidates.push((slot, tau.powf(alpha) * eta.powf(beta)));
        }

        if candidates.is_empty() {
            return None;
        }

        let total: f64 = candidates.iter().map(|&(_, w)| w).sum();
        if !(total > 0.0 && total.is_finite()) {
            return self.nearest_feasible(vehicle, current, unvisited);
        }

        spin(&candidates, rng.random::<f64>() * total)
    }
}

/// Roulette wheel over `(slot, weight)` pairs for a draw in `[0, total)`.
///
/// A zero-weight candidate owns an empty slice of the wheel and is never
/// returned; rounding at the top end falls back to the last candidate.
fn spin(candidates: &[(usize, f64)], mut pick: f64) -> Option<usize> {
    for &(slot, w) in candidates {
        if pick < w {
            return Some(slot);
        }
        pick -= w;
    }
    candidates.last().map(|&(slot, _)| slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Depot};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_instance() -> Instance {
        Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 1.0, 0.0, 10.0, 0.0),
                Customer::new(1, 2.0, 0.0, 10.0, 0.0),
                Customer::new(2, 3.0, 0.0, 10.0, 0.0),
            ],
        )
        .expect("valid")
    }

    fn build(
        instance: &Instance,
        rule: SelectionRule,
        capacity: f64,
        fleet: usize,
        seed: u64,
    ) -> Solution {
        let dm = DistanceMatrix::from_instance(instance);
        let tau = PheromoneMatrix::new(instance.num_customers());
        let ant = AntConstructor::new(instance, &dm, capacity, fleet);
        ant.construct(rule, &tau, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_spin_skips_zero_weight_on_zero_draw() {
        assert_eq!(spin(&[(0, 0.0), (1, 2.0)], 0.0), Some(1));
        assert_eq!(spin(&[(0, 1.0), (1, 0.0), (2, 1.0)], 1.0), Some(2));
        assert_eq!(spin(&[(0, 1.0), (1, 1.0)], 0.5), Some(0));
        assert_eq!(spin(&[(0, 1.0), (1, 1.0)], 2.0), Some(1));
        assert_eq!(spin(&[], 0.0), None);
    }

    #[test]
    fn test_greedy_single_vehicle_line() {
        let sol = build(&line_instance(), SelectionRule::Greedy, 100.0, 1, 0);
        assert_eq!(sol.num_vehicles(), 1);
        assert_eq!(sol.customer_ids(), vec![vec![0, 1, 2]]);
        assert!(sol.vehicles()[0].route().last().is_some_and(|s| s.is_depot()));
        // 1 + 1 + 1 travel, no service time
        assert!((sol.vehicles()[0].current_time() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_chooses_nearest() {
        let instance = Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 10.0, 0.0, 5.0, 0.0),
                Customer::new(1, 1.0, 0.0, 5.0, 0.0),
            ],
        )
        .expect("valid");
        let sol = build(&instance, SelectionRule::Greedy, 100.0, 1, 0);
        assert_eq!(sol.customer_ids(), vec![vec![1, 0]]);
    }

    #[test]
    fn test_greedy_tie_goes_to_first_listed() {
        let instance = Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(1, -1.0, 0.0, 1.0, 0.0),
                Customer::new(0, 1.0, 0.0, 1.0, 0.0),
            ],
        )
        .expect("valid");
        let sol = build(&instance, SelectionRule::Greedy, 100.0, 1, 0);
        assert_eq!(sol.customer_ids(), vec![vec![1, 0]]);
    }

    #[test]
    fn test_greedy_fills_vehicles_in_order() {
        let sol = build(&line_instance(), SelectionRule::Greedy, 20.0, 3, 0);
        assert_eq!(sol.num_vehicles(), 3);
        assert_eq!(sol.customer_ids(), vec![vec![0, 1], vec![2], vec![]]);
        assert_eq!(sol.num_used(), 2);
    }

    #[test]
    fn test_greedy_skips_infeasible_but_continues() {
        // Nearest customer is too heavy for what is left; a farther light one fits.
        let instance = Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 1.0, 0.0, 8.0, 0.0),
                Customer::new(1, 2.0, 0.0, 5.0, 0.0),
                Customer::new(2, 9.0, 0.0, 2.0, 0.0),
            ],
        )
        .expect("valid");
        let sol = build(&instance, SelectionRule::Greedy, 10.0, 1, 0);
        assert_eq!(sol.customer_ids(), vec![vec![0, 2]]);
    }

    #[test]
    fn test_uncovered_customers_dropped() {
        let sol = build(&line_instance(), SelectionRule::Greedy, 10.0, 1, 0);
        assert_eq!(sol.num_served(), 1);
        assert_eq!(sol.num_vehicles(), 1);
    }

    #[test]
    fn test_empty_instance_closed_routes() {
        let instance = Instance::new(Depot::new(5.0, 5.0), vec![]).expect("valid");
        let sol = build(&instance, SelectionRule::Greedy, 10.0, 4, 0);
        assert_eq!(sol.num_vehicles(), 4);
        assert_eq!(sol.num_used(), 0);
        for v in sol.vehicles() {
            assert_eq!(v.route().len(), 1);
            assert!(v.route()[0].is_depot());
        }
    }

    #[test]
    fn test_oversized_customer_never_assigned() {
        let instance = Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 1.0, 0.0, 50.0, 0.0),
                Customer::new(1, 2.0, 0.0, 5.0, 0.0),
            ],
        )
        .expect("valid");
        for rule in [
            SelectionRule::Greedy,
            SelectionRule::Probabilistic { alpha: 1.0, beta: 2.0 },
        ] {
            let sol = build(&instance, rule, 10.0, 3, 7);
            assert!(sol.customer_ids().iter().flatten().all(|&id| id != 0));
            assert_eq!(sol.num_served(), 1);
        }
    }

    #[test]
    fn test_probabilistic_deterministic_with_seed() {
        let instance = line_instance();
        let rule = SelectionRule::Probabilistic { alpha: 1.0, beta: 2.0 };
        let a = build(&instance, rule, 20.0, 3, 42);
        let b = build(&instance, rule, 20.0, 3, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_probabilistic_follows_strong_pheromone() {
        let instance = Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 1.0, 0.0, 1.0, 0.0),
                Customer::new(1, 1.0, 1.0, 1.0, 0.0),
                Customer::new(2, 1.0, -1.0, 1.0, 0.0),
            ],
        )
        .expect("valid");
        let dm = DistanceMatrix::from_instance(&instance);
        let mut tau = PheromoneMatrix::new(3);
        let mut v = Vehicle::new(100.0);
        v.serve(instance.customers()[0].clone(), 0.0);
        v.serve(instance.customers()[2].clone(), 0.0);
        v.close();
        tau.deposit(&Solution::new(vec![v]), 1e9);

        let ant = AntConstructor::new(&instance, &dm, 100.0, 1);
        let rule = SelectionRule::Probabilistic { alpha: 1.0, beta: 0.0 };
        let mut rng = StdRng::seed_from_u64(3);
        let mut followed = 0;
        for _ in 0..50 {
            let sol = ant.construct(rule, &tau, &mut rng);
            let ids = &sol.customer_ids()[0];
            if ids.len() >= 2 && ids[0] == 0 && ids[1] == 2 {
                followed += 1;
            }
            if ids.first() == Some(&0) {
                assert_eq!(ids[1], 2);
            }
        }
        assert!(followed > 0);
    }

    #[test]
    fn test_probabilistic_zero_distance_candidates() {
        let instance = Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 0.0, 0.0, 1.0, 0.0),
                Customer::new(1, 0.0, 0.0, 1.0, 0.0),
            ],
        )
        .expect("valid");
        let sol = build(
            &instance,
            SelectionRule::Probabilistic { alpha: 1.0, beta: 2.0 },
            10.0,
            1,
            1,
        );
        assert_eq!(sol.num_served(), 2);
    }

    proptest! {
        #[test]
        fn prop_capacity_never_exceeded(
            demands in prop::collection::vec(0.0f64..40.0, 0..15),
            coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 15),
            capacity in 1.0f64..100.0,
            fleet in 1usize..5,
            probabilistic in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let customers: Vec<Customer> = demands
                .iter()
                .enumerate()
                .map(|(i, &q)| Customer::new(i, coords[i].0, coords[i].1, q, 1.0))
                .collect();
            let instance = Instance::new(Depot::new(0.0, 0.0), customers).expect("valid");
            let rule = if probabilistic {
                SelectionRule::Probabilistic { alpha: 1.0, beta: 2.0 }
            } else {
                SelectionRule::Greedy
            };
            let sol = build(&instance, rule, capacity, fleet, seed);
            prop_assert_eq!(sol.num_vehicles(), fleet);
            let mut seen = std::collections::HashSet::new();
            for v in sol.vehicles() {
                let load: f64 = v.customers().map(Customer::demand).sum();
                prop_assert!(load <= capacity + 1e-9);
                for id in v.customer_ids() {
                    prop_assert!(seen.insert(id));
                }
            }
        }
    }
}

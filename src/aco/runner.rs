//! Search loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::config::AcoConfig;
use crate::constructive::AntConstructor;
use crate::distance::DistanceMatrix;
use crate::evaluation::{evaluate, Evaluation};
use crate::models::{Instance, Solution};
use crate::pheromone::PheromoneMatrix;

/// The incumbent: best candidate seen so far under the ranking rule.
#[derive(Debug, Clone, PartialEq)]
pub struct BestFound {
    /// Total distance of `solution`.
    pub distance: f64,
    /// Vehicles used by `solution`.
    pub vehicle_count: usize,
    /// The candidate fleet.
    pub solution: Solution,
}

impl BestFound {
    /// Score of the incumbent.
    pub fn evaluation(&self) -> Evaluation {
        Evaluation {
            total_distance: self.distance,
            vehicles_used: self.vehicle_count,
        }
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Best candidate found, `None` only if the run was cancelled before
    /// any candidate was evaluated.
    pub best: Option<BestFound>,

    /// Completed outer iterations.
    pub iterations: usize,

    /// Candidates constructed and evaluated.
    pub evaluations: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Incumbent score after each completed iteration.
    pub history: Vec<Evaluation>,

    /// Pheromone state after the last iteration.
    pub pheromone: PheromoneMatrix,
}

impl AcoResult {
    /// Best total distance, infinity when nothing was evaluated.
    pub fn best_distance(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |b| b.distance)
    }

    /// Vehicles used by the best candidate.
    pub fn best_vehicle_count(&self) -> Option<usize> {
        self.best.as_ref().map(|b| b.vehicle_count)
    }

    /// The best candidate fleet.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.as_ref().map(|b| &b.solution)
    }
}

/// Executes the pheromone-guided fleet search.
///
/// Each iteration constructs `num_ants` candidate fleets, ranks every one
/// against the incumbent, reinforces the pheromone matrix with the whole
/// population, then evaporates once.
///
/// # Examples
///
/// ```
/// use u_antroute::aco::{AcoConfig, AcoRunner};
/// use u_antroute::models::{Customer, Depot, Instance};
///
/// let instance = Instance::new(
///     Depot::new(0.0, 0.0),
///     vec![
///         Customer::new(0, 1.0, 0.0, 1.0, 0.0),
///         Customer::new(1, 2.0, 0.0, 1.0, 0.0),
///     ],
/// )
/// .unwrap();
/// let config = AcoConfig::default()
///     .with_max_iterations(5)
///     .with_num_ants(3)
///     .with_fleet_size(2)
///     .with_capacity(10.0);
///
/// let result = AcoRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.best_vehicle_count(), Some(1));
/// assert!((result.best_distance() - 2.0).abs() < 1e-10);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the search to completion.
    pub fn run(instance: &Instance, config: &AcoConfig) -> Result<AcoResult> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before each iteration; a cancelled run still
    /// returns the incumbent held at that point.
    pub fn run_with_cancel(
        instance: &Instance,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult> {
        config.validate().context("invalid AcoConfig")?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let distances = DistanceMatrix::from_instance(instance);
        let ant = AntConstructor::new(instance, &distances, config.capacity, config.fleet_size);
        let rule = config.selection_rule();
        let depot = instance.depot();
        let mut pheromone = PheromoneMatrix::new(instance.num_customers());

        info!(
            customers = instance.num_customers(),
            max_iterations = config.max_iterations,
            num_ants = config.num_ants,
            fleet_size = config.fleet_size,
            capacity = config.capacity,
            rho = config.rho,
            selection = ?config.selection,
            "starting fleet search"
        );

        let mut best: Option<BestFound> = None;
        let mut iterations = 0usize;
        let mut evaluations = 0usize;
        let mut cancelled = false;
        let mut history = Vec::new();
        let budget_spent = |evaluations: usize| {
            config
                .max_evaluations
                .is_some_and(|limit| evaluations >= limit)
        };

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut population = Vec::with_capacity(config.num_ants);
            for _ in 0..config.num_ants {
                if budget_spent(evaluations) {
                    break;
                }

                let solution = ant.construct(rule, &pheromone, &mut rng);
                let eval = evaluate(depot, &solution);
                evaluations += 1;
                trace!(
                    iteration,
                    distance = eval.total_distance,
                    vehicles = eval.vehicles_used,
                    "candidate evaluated"
                );

                if best
                    .as_ref()
                    .is_none_or(|b| eval.is_better_than(&b.evaluation()))
                {
                    debug!(
                        iteration,
                        distance = eval.total_distance,
                        vehicles = eval.vehicles_used,
                        "new best"
                    );
                    best = Some(BestFound {
                        distance: eval.total_distance,
                        vehicle_count: eval.vehicles_used,
                        solution: solution.clone(),
                    });
                }
                population.push(solution);
            }

            pheromone.reinforce(depot, &population);
            pheromone.evaporate(config.rho);
            iterations += 1;

            if let Some(b) = &best {
                history.push(b.evaluation());
            }
            debug!(
                iteration,
                population = population.len(),
                evaluations,
                "iteration complete"
            );

            if budget_spent(evaluations) {
                debug!(evaluations, "evaluation budget spent");
                break;
            }
        }

        match &best {
            Some(b) => info!(
                iterations,
                evaluations,
                cancelled,
                distance = b.distance,
                vehicles = b.vehicle_count,
                "fleet search finished"
            ),
            None => info!(
                iterations,
                evaluations,
                cancelled,
                "fleet search finished without a candidate"
            ),
        }

        Ok(AcoResult {
            best,
            iterations,
            evaluations,
            cancelled,
            history,
            pheromone,
        })
    }
}

//! Search configuration.

use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};

use crate::constructive::SelectionRule;

/// How ants choose the next customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Deterministic nearest feasible neighbor. Pheromone is learned but
    /// never consulted, and every ant builds the same fleet.
    #[default]
    Greedy,
    /// Pheromone-weighted roulette selection using `alpha` and `beta`.
    Probabilistic,
}

/// Configuration for the pheromone-guided fleet search.
///
/// # Examples
///
/// ```
/// use u_antroute::aco::{AcoConfig, SelectionMode};
///
/// let config = AcoConfig::default()
///     .with_max_iterations(50)
///     .with_num_ants(10)
///     .with_fleet_size(5)
///     .with_capacity(200.0)
///     .with_selection(SelectionMode::Probabilistic)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Number of outer iterations.
    pub max_iterations: usize,

    /// Budget of candidate evaluations across the whole run.
    ///
    /// `None` leaves the run bounded by `max_iterations` alone.
    pub max_evaluations: Option<usize>,

    /// Candidates constructed per iteration.
    pub num_ants: usize,

    /// Pheromone exponent for probabilistic selection.
    pub alpha: f64,

    /// Inverse-distance exponent for probabilistic selection.
    pub beta: f64,

    /// Pheromone retention factor in (0, 1); entries are multiplied by it
    /// once per iteration.
    pub rho: f64,

    /// Vehicles per candidate fleet.
    pub fleet_size: usize,

    /// Capacity of every vehicle.
    pub capacity: f64,

    /// Next-customer selection.
    pub selection: SelectionMode,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_evaluations: None,
            num_ants: 50,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.9,
            fleet_size: 20,
            capacity: 4000.0,
            selection: SelectionMode::default(),
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = Some(n);
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_fleet_size(mut self, n: usize) -> Self {
        self.fleet_size = n;
        self
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The constructor rule implied by `selection`, `alpha` and `beta`.
    pub fn selection_rule(&self) -> SelectionRule {
        match self.selection {
            SelectionMode::Greedy => SelectionRule::Greedy,
            SelectionMode::Probabilistic => SelectionRule::Probabilistic {
                alpha: self.alpha,
                beta: self.beta,
            },
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_iterations > 0, "max_iterations must be positive");
        ensure!(self.num_ants > 0, "num_ants must be positive");
        ensure!(self.fleet_size > 0, "fleet_size must be positive");
        if self.max_evaluations == Some(0) {
            bail!("max_evaluations must be positive when set");
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            bail!("rho must be in (0, 1), got {}", self.rho);
        }
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            bail!("capacity must be positive and finite, got {}", self.capacity);
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            bail!("alpha must be non-negative, got {}", self.alpha);
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            bail!("beta must be non-negative, got {}", self.beta);
        }
        Ok(())
    }
}

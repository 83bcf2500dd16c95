//! Customer, time window, and depot types.

use serde::{Deserialize, Serialize};

use crate::distance::Point;

/// A service time window at a customer location.
///
/// Carried as instance data. Arrival times are tracked on each vehicle but
/// are not checked against the window during construction.
///
/// # Examples
///
/// ```
/// use u_antroute::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.ready() <= tw.due());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    ready: f64,
    due: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `ready > due` or either value is non-finite.
    pub fn new(ready: f64, due: f64) -> Option<Self> {
        if !ready.is_finite() || !due.is_finite() || ready > due {
            return None;
        }
        Some(Self { ready, due })
    }

    /// Earliest allowable start of service.
    pub fn ready(&self) -> f64 {
        self.ready
    }

    /// Latest allowable arrival time.
    pub fn due(&self) -> f64 {
        self.due
    }
}

/// A customer with a demand to be delivered.
///
/// Customer ids are dense: an instance with `n` customers uses exactly the
/// ids `0..n`, which double as pheromone matrix indices.
///
/// # Examples
///
/// ```
/// use u_antroute::models::{Customer, TimeWindow};
///
/// let c = Customer::new(1, 41.0, 49.0, 10.0, 10.0)
///     .with_time_window(TimeWindow::new(161.0, 171.0).unwrap());
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 10.0);
/// assert_eq!(c.ready_time(), 161.0);
/// assert_eq!(c.due_date(), 171.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    x: f64,
    y: f64,
    demand: f64,
    service_time: f64,
    time_window: Option<TimeWindow>,
}

impl Customer {
    /// Creates a new customer without a time window.
    pub fn new(id: usize, x: f64, y: f64, demand: f64, service_time: f64) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            service_time,
            time_window: None,
        }
    }

    /// Sets a time window for this customer.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Customer ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Demand at this customer.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Service duration at this customer.
    pub fn service_time(&self) -> f64 {
        self.service_time
    }

    /// Time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// Start of the time window (0 when unconstrained).
    pub fn ready_time(&self) -> f64 {
        self.time_window.map_or(0.0, |tw| tw.ready())
    }

    /// End of the time window (infinity when unconstrained).
    pub fn due_date(&self) -> f64 {
        self.time_window.map_or(f64::INFINITY, |tw| tw.due())
    }
}

impl Point for Customer {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// The single start and end location shared by every vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    x: f64,
    y: f64,
}

impl Depot {
    /// Creates a depot at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point for Depot {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

//! Plain-data view of a finished run for reporting and plotting.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::aco::AcoResult;
use crate::distance::Point;
use crate::evaluation::route_distance;
use crate::models::Instance;

/// One used vehicle's route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Customer ids in visit order.
    pub customers: Vec<usize>,
    /// Route length as scored by the evaluator.
    pub distance: f64,
    /// Demand delivered.
    pub load: f64,
    /// Coordinates from the depot through every customer and back.
    pub polyline: Vec<(f64, f64)>,
}

/// Summary of a run: the incumbent and how the search ended.
///
/// # Examples
///
/// ```
/// use u_antroute::aco::{AcoConfig, AcoRunner};
/// use u_antroute::models::{Customer, Depot, Instance};
/// use u_antroute::report::RunReport;
///
/// let instance = Instance::new(
///     Depot::new(0.0, 0.0),
///     vec![Customer::new(0, 3.0, 4.0, 1.0, 0.0)],
/// )
/// .unwrap();
/// let config = AcoConfig::default().with_max_iterations(2).with_num_ants(2).with_fleet_size(2);
/// let result = AcoRunner::run(&instance, &config).unwrap();
///
/// let report = RunReport::new(&instance, &result);
/// assert_eq!(report.vehicle_count, Some(1));
/// assert_eq!(report.routes[0].polyline, vec![(0.0, 0.0), (3.0, 4.0), (0.0, 0.0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Total distance of the best fleet.
    pub distance: Option<f64>,
    /// Vehicles used by the best fleet.
    pub vehicle_count: Option<usize>,
    /// Vehicles in the best fleet that serve nobody.
    pub idle_vehicles: usize,
    /// Customers the best fleet leaves unserved.
    pub unserved: Vec<usize>,
    /// Completed iterations.
    pub iterations: usize,
    /// Evaluated candidates.
    pub evaluations: usize,
    /// Whether the run was cancelled.
    pub cancelled: bool,
    /// Routes of the used vehicles.
    pub routes: Vec<RouteReport>,
}

impl RunReport {
    /// Builds the report for `result`, produced on `instance`.
    pub fn new(instance: &Instance, result: &AcoResult) -> Self {
        let depot = instance.depot();
        let depot_xy = (depot.x(), depot.y());

        let mut routes = Vec::new();
        let mut idle_vehicles = 0;
        let mut served = vec![false; instance.num_customers()];

        if let Some(solution) = result.best_solution() {
            for vehicle in solution.vehicles() {
                if !vehicle.is_used() {
                    idle_vehicles += 1;
                    continue;
                }
                let mut polyline = vec![depot_xy];
                for c in vehicle.customers() {
                    polyline.push((c.x(), c.y()));
                    if let Some(flag) = served.get_mut(c.id()) {
                        *flag = true;
                    }
                }
                polyline.push(depot_xy);
                routes.push(RouteReport {
                    customers: vehicle.customer_ids(),
                    distance: route_distance(depot, vehicle.route()),
                    load: vehicle.current_load(),
                    polyline,
                });
            }
        }

        let unserved = if result.best.is_some() {
            served
                .iter()
                .enumerate()
                .filter_map(|(id, &s)| (!s).then_some(id))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            distance: result.best.as_ref().map(|b| b.distance),
            vehicle_count: result.best_vehicle_count(),
            idle_vehicles,
            unserved,
            iterations: result.iterations,
            evaluations: result.evaluations,
            cancelled: result.cancelled,
            routes,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize run report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::{AcoConfig, AcoRunner};
    use crate::models::{Customer, Depot};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn instance() -> Instance {
        Instance::new(
            Depot::new(0.0, 0.0),
            vec![
                Customer::new(0, 1.0, 0.0, 6.0, 0.0),
                Customer::new(1, 2.0, 0.0, 6.0, 0.0),
                Customer::new(2, 3.0, 0.0, 60.0, 0.0),
            ],
        )
        .expect("valid")
    }

    fn config() -> AcoConfig {
        AcoConfig::default()
            .with_max_iterations(2)
            .with_num_ants(2)
            .with_fleet_size(3)
            .with_capacity(10.0)
    }

    #[test]
    fn test_report_routes_and_unserved() {
        let inst = instance();
        let result = AcoRunner::run(&inst, &config()).expect("run");
        let report = RunReport::new(&inst, &result);

        assert_eq!(report.vehicle_count, Some(2));
        assert_eq!(report.idle_vehicles, 1);
        assert_eq!(report.unserved, vec![2]);
        assert_eq!(report.routes.len(), 2);
        assert_eq!(report.routes[0].customers, vec![0]);
        assert_eq!(report.routes[1].customers, vec![1]);
        assert!((report.routes[1].distance - 2.0).abs() < 1e-10);
        assert_eq!(report.routes[1].load, 6.0);

        let total: f64 = report.routes.iter().map(|r| r.distance).sum();
        assert!((report.distance.expect("has best") - total).abs() < 1e-10);
    }

    #[test]
    fn test_report_json() {
        let inst = instance();
        let result = AcoRunner::run(&inst, &config()).expect("run");
        let json = RunReport::new(&inst, &result).to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");
        assert_eq!(value["vehicle_count"], 2);
        assert_eq!(value["routes"][0]["polyline"][0][0], 0.0);
        assert_eq!(value["cancelled"], false);
    }

    #[test]
    fn test_report_cancelled_before_start() {
        let inst = instance();
        let cancel = Arc::new(AtomicBool::new(true));
        let result = AcoRunner::run_with_cancel(&inst, &config(), Some(cancel)).expect("run");
        let report = RunReport::new(&inst, &result);
        assert!(report.cancelled);
        assert!(report.distance.is_none());
        assert!(report.routes.is_empty());
        assert!(report.unserved.is_empty());
        assert!(report.to_json().expect("json").contains("\"distance\": null"));
    }
}

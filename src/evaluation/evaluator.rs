//! Route evaluator that computes tour length, cost and feasibility.

use crate::distance::euclidean;
use crate::models::{Driver, Load, Point};

/// Evaluates tours over a load table: tour length, the duration cap check,
/// and the total cost of a set of drivers.
///
/// Every call recomputes from scratch; nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use u_dispatch::evaluation::RouteEvaluator;
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
///     Load::new("B", Point::new(0.0, 20.0), Point::new(0.0, 30.0)),
/// ];
/// let evaluator = RouteEvaluator::new(&loads, Point::ORIGIN, 720.0, 500.0);
///
/// // 0 + 10 + 10 + 10 + 30
/// assert!((evaluator.route_distance(&[0, 1]) - 60.0).abs() < 1e-10);
/// assert!(evaluator.is_feasible(&[0, 1]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    loads: &'a [Load],
    depot: Point,
    max_duration: f64,
    driver_cost: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given load table and parameters.
    pub fn new(loads: &'a [Load], depot: Point, max_duration: f64, driver_cost: f64) -> Self {
        Self {
            loads,
            depot,
            max_duration,
            driver_cost,
        }
    }

    /// Length of the closed tour serving `route` in order.
    ///
    /// Depot to the first pickup, each pickup to its dropoff, each dropoff to
    /// the next pickup, and the last dropoff back to the depot. An empty tour
    /// has length zero.
    pub fn route_distance(&self, route: &[usize]) -> f64 {
        let Some(&last) = route.last() else {
            return 0.0;
        };

        let mut distance = 0.0;
        let mut position = self.depot;
        for &l in route {
            let load = &self.loads[l];
            distance += euclidean(position, load.pickup());
            distance += euclidean(load.pickup(), load.dropoff());
            position = load.dropoff();
        }
        distance + euclidean(self.loads[last].dropoff(), self.depot)
    }

    /// Returns `true` if the tour fits within the duration cap.
    pub fn is_feasible(&self, route: &[usize]) -> bool {
        self.route_distance(route) <= self.max_duration
    }

    /// Driver charges plus the length of every tour.
    pub fn total_cost(&self, drivers: &[Driver]) -> f64 {
        let distance: f64 = drivers.iter().map(|d| self.route_distance(d.loads())).sum();
        self.driver_cost * drivers.len() as f64 + distance
    }
}

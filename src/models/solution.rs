//! Solution and violation types.

use std::collections::HashMap;

use tracing::warn;

use super::{Driver, Load, Point};
use crate::config::SolverConfig;
use crate::evaluation::RouteEvaluator;

/// A type of defect found when validating a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A load occupies more than one route slot.
    DuplicateLoad {
        /// Id of the repeated load.
        load_id: String,
    },
    /// A load is not served by any driver.
    UnassignedLoad {
        /// Id of the missing load.
        load_id: String,
    },
    /// A driver serves no load at all.
    EmptyRoute {
        /// Driver index.
        route_index: usize,
    },
    /// Tour length exceeds the duration cap.
    MaxDurationExceeded {
        /// Driver index.
        route_index: usize,
        /// Actual tour length.
        duration: f64,
        /// Maximum allowed tour length.
        max_duration: f64,
    },
}

/// A defect in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete assignment of loads to drivers for one problem instance.
///
/// Owns the load table (keyed by id), the depot, the cost parameters and
/// the current drivers. Drivers reference loads by table index.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::models::{Driver, Load, Point, Solution};
///
/// let loads = vec![Load::new("1", Point::new(0.0, 3.0), Point::new(4.0, 3.0))];
/// let mut sol = Solution::new(loads, &SolverConfig::default());
/// assert_eq!(sol.num_drivers(), 0);
///
/// sol.add_driver(Driver::with_loads(vec![0]));
/// // 500 + (3 + 4 + 5)
/// assert!((sol.total_cost() - 512.0).abs() < 1e-10);
/// assert_eq!(sol.render(), "[1]");
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    depot: Point,
    max_duration: f64,
    driver_cost: f64,
    loads: Vec<Load>,
    index: HashMap<String, usize>,
    drivers: Vec<Driver>,
}

impl Solution {
    /// Creates a solution with no drivers over the given loads.
    ///
    /// Loads keep their input order. When two loads share an id the later
    /// record replaces the earlier one in place.
    pub fn new(loads: Vec<Load>, config: &SolverConfig) -> Self {
        let mut table: Vec<Load> = Vec::with_capacity(loads.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(loads.len());

        for load in loads {
            let existing = index.get(load.id()).copied();
            match existing {
                Some(pos) => {
                    warn!(load_id = load.id(), "duplicate load id, keeping the later record");
                    table[pos] = load;
                }
                None => {
                    index.insert(load.id().to_string(), table.len());
                    table.push(load);
                }
            }
        }

        Self {
            depot: config.depot(),
            max_duration: config.max_duration(),
            driver_cost: config.driver_cost(),
            loads: table,
            index,
            drivers: Vec::new(),
        }
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Duration cap of a single tour.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    /// Fixed cost per driver.
    pub fn driver_cost(&self) -> f64 {
        self.driver_cost
    }

    /// The load table, in input order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Number of distinct loads.
    pub fn num_loads(&self) -> usize {
        self.loads.len()
    }

    /// Looks up a load by id.
    pub fn load_by_id(&self, id: &str) -> Option<&Load> {
        self.index.get(id).map(|&i| &self.loads[i])
    }

    /// Table index of the load with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Adds a driver.
    pub fn add_driver(&mut self, driver: Driver) {
        self.drivers.push(driver);
    }

    /// Returns the drivers.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.drivers.len()
    }

    /// Total number of route slots across all drivers.
    pub fn num_assigned(&self) -> usize {
        self.drivers.iter().map(|d| d.len()).sum()
    }

    /// Index of the driver serving `load`, if any.
    pub fn driver_of(&self, load: usize) -> Option<usize> {
        self.drivers.iter().position(|d| d.contains(load))
    }

    /// Table indices of loads not served by any driver, in input order.
    pub fn unassigned(&self) -> Vec<usize> {
        let mut assigned = vec![false; self.loads.len()];
        for driver in &self.drivers {
            for &l in driver.loads() {
                assigned[l] = true;
            }
        }
        (0..self.loads.len()).filter(|&l| !assigned[l]).collect()
    }

    /// Evaluator over this solution's loads and parameters.
    pub fn evaluator(&self) -> RouteEvaluator<'_> {
        RouteEvaluator::new(&self.loads, self.depot, self.max_duration, self.driver_cost)
    }

    /// Splits the solution into an evaluator and the mutable driver list so
    /// routes can be rewritten while costs are recomputed.
    pub fn split_mut(&mut self) -> (RouteEvaluator<'_>, &mut Vec<Driver>) {
        let evaluator =
            RouteEvaluator::new(&self.loads, self.depot, self.max_duration, self.driver_cost);
        (evaluator, &mut self.drivers)
    }

    /// Tour length of the driver at `index`.
    pub fn route_distance(&self, index: usize) -> f64 {
        self.evaluator().route_distance(self.drivers[index].loads())
    }

    /// Total distance across all drivers.
    pub fn total_distance(&self) -> f64 {
        let evaluator = self.evaluator();
        self.drivers
            .iter()
            .map(|d| evaluator.route_distance(d.loads()))
            .sum()
    }

    /// Objective value: driver charges plus total distance.
    pub fn total_cost(&self) -> f64 {
        self.evaluator().total_cost(&self.drivers)
    }

    /// Load ids of the driver at `index`, in delivery order.
    pub fn route_ids(&self, index: usize) -> Vec<&str> {
        self.drivers[index]
            .loads()
            .iter()
            .map(|&l| self.loads[l].id())
            .collect()
    }

    /// Renders one `[id,id,...]` line per driver.
    pub fn render(&self) -> String {
        (0..self.drivers.len())
            .map(|i| format!("[{}]", self.route_ids(i).join(",")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loads() -> Vec<Load> {
        vec![
            Load::new("1", Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
            Load::new("2", Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
            Load::new("3", Point::new(-5.0, 0.0), Point::new(-5.0, 5.0)),
        ]
    }

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new(Vec::new(), &SolverConfig::default());
        assert_eq!(sol.num_drivers(), 0);
        assert_eq!(sol.num_loads(), 0);
        assert_eq!(sol.total_cost(), 0.0);
        assert_eq!(sol.render(), "");
    }

    #[test]
    fn test_solution_lookup() {
        let sol = Solution::new(loads(), &SolverConfig::default());
        assert_eq!(sol.num_loads(), 3);
        assert_eq!(sol.index_of("2"), Some(1));
        assert_eq!(sol.load_by_id("3").map(|l| l.pickup()), Some(Point::new(-5.0, 0.0)));
        assert!(sol.load_by_id("9").is_none());
    }

    #[test]
    fn test_solution_duplicate_ids_keep_later() {
        let mut input = loads();
        input.push(Load::new("1", Point::new(1.0, 1.0), Point::new(2.0, 2.0)));
        let sol = Solution::new(input, &SolverConfig::default());
        assert_eq!(sol.num_loads(), 3);
        assert_eq!(sol.index_of("1"), Some(0));
        assert_eq!(sol.loads()[0].pickup(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_solution_assignment_queries() {
        let mut sol = Solution::new(loads(), &SolverConfig::default());
        sol.add_driver(Driver::with_loads(vec![2, 0]));
        assert_eq!(sol.num_assigned(), 2);
        assert_eq!(sol.driver_of(0), Some(0));
        assert_eq!(sol.driver_of(1), None);
        assert_eq!(sol.unassigned(), vec![1]);
        assert_eq!(sol.route_ids(0), vec!["3", "1"]);
    }

    #[test]
    fn test_solution_cost() {
        let mut sol = Solution::new(loads(), &SolverConfig::default());
        sol.add_driver(Driver::with_loads(vec![0]));
        sol.add_driver(Driver::with_loads(vec![1]));
        // each tour is 10 + 10 + 20 = 40
        assert!((sol.route_distance(0) - 40.0).abs() < 1e-10);
        assert!((sol.total_distance() - 80.0).abs() < 1e-10);
        assert!((sol.total_cost() - 1080.0).abs() < 1e-10);
    }

    #[test]
    fn test_solution_render() {
        let mut sol = Solution::new(loads(), &SolverConfig::default());
        sol.add_driver(Driver::with_loads(vec![0, 2]));
        sol.add_driver(Driver::with_loads(vec![1]));
        assert_eq!(sol.render(), "[1,3]\n[2]");
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::EmptyRoute { route_index: 3 });
        assert_eq!(v.kind, ViolationType::EmptyRoute { route_index: 3 });
    }
}

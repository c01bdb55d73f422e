//! Full solve pipeline: savings construction, reassignment, exchange search.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::SolverConfig;
use crate::constructive::clarke_wright_savings;
use crate::local_search::{exchange_improve, SearchStats};
use crate::models::{Load, Solution};

/// Result of solving one problem instance.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Final solution.
    pub solution: Solution,
    /// Total cost straight after construction and reassignment.
    pub construction_cost: f64,
    /// Total cost after local search.
    pub cost: f64,
    /// Local search statistics.
    pub search: SearchStats,
    /// Wall time spent in [`solve`].
    pub elapsed: Duration,
}

/// Builds a solution for `loads` and improves it.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::solver::solve;
///
/// let loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
///     Load::new("B", Point::new(0.0, 20.0), Point::new(0.0, 30.0)),
/// ];
/// let report = solve(loads, &SolverConfig::default());
/// assert_eq!(report.solution.render(), "[A,B]");
/// assert!((report.cost - 560.0).abs() < 1e-10);
/// assert!(report.cost <= report.construction_cost);
/// ```
pub fn solve(loads: Vec<Load>, config: &SolverConfig) -> SolveReport {
    let start = Instant::now();

    let mut solution = clarke_wright_savings(loads, config);
    let construction_cost = solution.total_cost();
    let search = exchange_improve(&mut solution, config);
    let cost = solution.total_cost();

    let elapsed = start.elapsed();
    debug!(
        loads = solution.num_loads(),
        drivers = solution.num_drivers(),
        construction_cost,
        cost,
        ?elapsed,
        "solved"
    );

    SolveReport {
        solution,
        construction_cost,
        cost,
        search,
        elapsed,
    }
}

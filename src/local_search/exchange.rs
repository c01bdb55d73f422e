//! Inter-route single-load exchange operator.
//!
//! # Algorithm
//!
//! For every pair of drivers `(a, b)` with `a < b`, and every position `i` in
//! `a`'s tour and `j` in `b`'s tour, swap the two loads and recompute the
//! total cost of the whole solution. The swap is kept if the cost drops below
//! the best cost seen so far for this pair, otherwise it is undone at once.
//! Passes over all driver pairs repeat until one pass keeps no swap.
//!
//! Acceptance is on cost alone unless
//! [`SolverConfig::with_feasible_swaps`] is set, in which case a swap that
//! pushes either tour over the duration cap is also undone.
//!
//! Every accepted swap strictly lowers the cost, so the search cannot cycle.
//! The pass cap only guards against pathological inputs.
//!
//! # Complexity
//!
//! O(D² × R² × N) per pass, where D = number of drivers, R = longest tour and
//! N = number of loads (each candidate re-evaluates the whole solution).

use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::evaluation::RouteEvaluator;
use crate::models::{Driver, Solution};

/// Outcome of a local search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Passes over all driver pairs, including the final one that found
    /// nothing.
    pub passes: usize,
    /// Swaps kept.
    pub swaps: usize,
    /// `true` if the last pass kept no swap; `false` if the pass cap ran out
    /// first.
    pub converged: bool,
}

/// Improves a solution in place by exchanging single loads between drivers.
///
/// The solution's cost never increases, and a solution this returns with
/// `converged == true` is left unchanged by a second call.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::local_search::exchange_improve;
/// use u_dispatch::models::{Driver, Load, Point, Solution};
///
/// // Two drivers each serve one near load and one far load on the other side.
/// let loads = vec![
///     Load::new("e1", Point::new(50.0, 0.0), Point::new(60.0, 0.0)),
///     Load::new("w1", Point::new(-50.0, 0.0), Point::new(-60.0, 0.0)),
///     Load::new("e2", Point::new(70.0, 0.0), Point::new(80.0, 0.0)),
///     Load::new("w2", Point::new(-70.0, 0.0), Point::new(-80.0, 0.0)),
/// ];
/// let config = SolverConfig::default();
/// let mut sol = Solution::new(loads, &config);
/// sol.add_driver(Driver::with_loads(vec![0, 1]));
/// sol.add_driver(Driver::with_loads(vec![2, 3]));
///
/// let before = sol.total_cost();
/// let stats = exchange_improve(&mut sol, &config);
/// assert!(stats.converged);
/// assert!(stats.swaps > 0);
/// assert!(sol.total_cost() < before);
/// ```
pub fn exchange_improve(solution: &mut Solution, config: &SolverConfig) -> SearchStats {
    let mut stats = SearchStats::default();
    let (evaluator, drivers) = solution.split_mut();

    while stats.passes < config.max_passes() {
        stats.passes += 1;

        let mut improved = false;
        for a in 0..drivers.len() {
            for b in (a + 1)..drivers.len() {
                let kept = exchange_between(&evaluator, drivers, a, b, config.feasible_swaps());
                if kept > 0 {
                    stats.swaps += kept;
                    improved = true;
                }
            }
        }

        if !improved {
            stats.converged = true;
            break;
        }
    }

    if !stats.converged && !drivers.is_empty() {
        warn!(
            passes = stats.passes,
            swaps = stats.swaps,
            "local search stopped at the pass cap before converging"
        );
    }
    debug!(
        passes = stats.passes,
        swaps = stats.swaps,
        converged = stats.converged,
        "exchange search finished"
    );
    stats
}

/// Tries every single-load swap between drivers `a` and `b` (`a < b`).
///
/// Returns the number of swaps kept.
fn exchange_between(
    evaluator: &RouteEvaluator<'_>,
    drivers: &mut [Driver],
    a: usize,
    b: usize,
    feasible_only: bool,
) -> usize {
    let mut best_cost = evaluator.total_cost(drivers);
    let mut kept = 0;

    let (len_a, len_b) = (drivers[a].len(), drivers[b].len());
    for i in 0..len_a {
        for j in 0..len_b {
            swap_loads(drivers, a, i, b, j);

            let cost = evaluator.total_cost(drivers);
            let feasible = !feasible_only
                || (evaluator.is_feasible(drivers[a].loads())
                    && evaluator.is_feasible(drivers[b].loads()));

            if feasible && cost < best_cost {
                best_cost = cost;
                kept += 1;
            } else {
                swap_loads(drivers, a, i, b, j);
            }
        }
    }

    kept
}

/// Swaps position `i` of driver `a` with position `j` of driver `b`, `a < b`.
fn swap_loads(drivers: &mut [Driver], a: usize, i: usize, b: usize, j: usize) {
    let (head, tail) = drivers.split_at_mut(b);
    head[a].swap_with(i, &mut tail[0], j);
}

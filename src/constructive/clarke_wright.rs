//! Clarke-Wright savings algorithm for pickup-and-dropoff loads.
//!
//! # Algorithm
//!
//! Every load starts conceptually on its own tour (depot → pickup → dropoff
//! → depot). For an ordered pair `(i, j)` the saving of serving `j` right
//! after `i` in one tour is, with [`SavingsFormula::Link`],
//!
//! ```text
//! s(i, j) = d(dropoff_i, depot) + d(depot, pickup_j) - d(dropoff_i, pickup_j)
//! ```
//!
//! and with [`SavingsFormula::Span`]
//!
//! ```text
//! s(i, j) = d(depot, pickup_i) + d(dropoff_j, depot) - d(pickup_i, dropoff_j)
//! ```
//!
//! Pairs are processed in decreasing order of savings. Each pair either
//! opens a new tour `[i, j]`, appends `j` to the tour ending in `i`'s driver,
//! prepends `i` to `j`'s driver, or concatenates the two drivers' tours, and
//! every change is committed only if the resulting tour fits within the
//! duration cap. Loads left over are handed to
//! [`reassign_unassigned`](super::reassign_unassigned).
//!
//! The pass is greedy: rejected merges are never retried.
//!
//! # Complexity
//!
//! O(n² log n) for the savings list plus O(n² × L) for the feasibility checks,
//! where n = number of loads and L = longest tour.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::debug;

use super::reassign_unassigned;
use crate::config::{SavingsFormula, SolverConfig};
use crate::distance::euclidean;
use crate::models::{Driver, Load, Solution};

/// A savings value for serving `to` right after `from`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Saving {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) value: f64,
}

/// Constructs a solution using the Clarke-Wright savings algorithm followed
/// by reassignment of any load the savings pass could not place.
///
/// Every load of the returned solution is served by exactly one driver.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::constructive::clarke_wright_savings;
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
///     Load::new("B", Point::new(0.0, 20.0), Point::new(0.0, 30.0)),
/// ];
/// let solution = clarke_wright_savings(loads, &SolverConfig::default());
///
/// assert_eq!(solution.num_drivers(), 1);
/// assert_eq!(solution.route_ids(0), vec!["A", "B"]);
/// assert!((solution.total_cost() - 560.0).abs() < 1e-10);
/// ```
pub fn clarke_wright_savings(loads: Vec<Load>, config: &SolverConfig) -> Solution {
    let mut solution = Solution::new(loads, config);
    if solution.num_loads() == 0 {
        return solution;
    }

    let tours = merge_by_savings(&solution, config.savings());
    for tour in tours.into_iter().filter(|t| !t.is_empty()) {
        solution.add_driver(Driver::with_loads(tour));
    }

    let reassigned = reassign_unassigned(&mut solution);
    debug!(
        loads = solution.num_loads(),
        drivers = solution.num_drivers(),
        reassigned,
        "savings construction finished"
    );
    solution
}

/// Computes the savings of every ordered pair of distinct loads, sorted by
/// decreasing value.
///
/// The sort is stable, so equal savings keep enumeration order (`from` outer,
/// `to` inner, both in load table order).
pub(crate) fn compute_savings(solution: &Solution, formula: SavingsFormula) -> Vec<Saving> {
    let depot = solution.depot();
    let loads = solution.loads();
    let n = loads.len();

    let mut savings = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, from) in loads.iter().enumerate() {
        for (j, to) in loads.iter().enumerate() {
            if i == j {
                continue;
            }
            let value = match formula {
                SavingsFormula::Link => {
                    euclidean(from.dropoff(), depot) + euclidean(depot, to.pickup())
                        - euclidean(from.dropoff(), to.pickup())
                }
                SavingsFormula::Span => {
                    euclidean(depot, from.pickup()) + euclidean(to.dropoff(), depot)
                        - euclidean(from.pickup(), to.dropoff())
                }
            };
            savings.push(Saving {
                from: i,
                to: j,
                value,
            });
        }
    }

    savings.sort_by(|a, b| b.value.total_cmp(&a.value));
    savings
}

/// Runs the savings merge pass and returns the resulting tours.
///
/// Tours are kept in creation order; a tour absorbed by a merge is left
/// empty in place.
fn merge_by_savings(solution: &Solution, formula: SavingsFormula) -> Vec<Vec<usize>> {
    let evaluator = solution.evaluator();
    let savings = compute_savings(solution, formula);

    // tour_of[load] = index into `tours` of the tour carrying the load
    let mut tour_of: Vec<Option<usize>> = vec![None; solution.num_loads()];
    let mut tours: Vec<Vec<usize>> = Vec::new();

    for saving in &savings {
        let (i, j) = (saving.from, saving.to);

        match (tour_of[i], tour_of[j]) {
            (None, None) => {
                let candidate = vec![i, j];
                if evaluator.is_feasible(&candidate) {
                    tour_of[i] = Some(tours.len());
                    tour_of[j] = Some(tours.len());
                    tours.push(candidate);
                }
            }
            (Some(ri), None) => {
                let mut candidate = tours[ri].clone();
                candidate.push(j);
                if evaluator.is_feasible(&candidate) {
                    tours[ri] = candidate;
                    tour_of[j] = Some(ri);
                }
            }
            (None, Some(rj)) => {
                let mut candidate = Vec::with_capacity(tours[rj].len() + 1);
                candidate.push(i);
                candidate.extend_from_slice(&tours[rj]);
                if evaluator.is_feasible(&candidate) {
                    tours[rj] = candidate;
                    tour_of[i] = Some(rj);
                }
            }
            (Some(ri), Some(rj)) if ri != rj => {
                let mut candidate = tours[ri].clone();
                candidate.extend_from_slice(&tours[rj]);
                if evaluator.is_feasible(&candidate) {
                    for &l in &tours[rj] {
                        tour_of[l] = Some(ri);
                    }
                    tours[ri] = candidate;
                    tours[rj].clear();
                }
            }
            // Already on the same tour
            _ => {}
        }
    }

    tours
}

//! Whole-solution validation.

use crate::models::{Solution, Violation, ViolationType};

/// Checks a solution for assignment defects and duration cap violations.
///
/// Reports every load served more than once or not at all, every driver
/// with an empty tour, and every tour longer than the duration cap. An empty
/// result means each load is served exactly once by a feasible tour.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::evaluation::validate;
/// use u_dispatch::models::{Driver, Load, Point, Solution};
///
/// let loads = vec![
///     Load::new("1", Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new("2", Point::new(0.0, 1.0), Point::new(0.0, 2.0)),
/// ];
/// let mut sol = Solution::new(loads, &SolverConfig::default());
/// sol.add_driver(Driver::with_loads(vec![0]));
///
/// let violations = validate(&sol);
/// assert_eq!(violations.len(), 1); // load "2" is unassigned
/// ```
pub fn validate(solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = vec![0usize; solution.num_loads()];
    let evaluator = solution.evaluator();

    for (idx, driver) in solution.drivers().iter().enumerate() {
        if driver.is_empty() {
            violations.push(Violation::new(ViolationType::EmptyRoute { route_index: idx }));
            continue;
        }

        for &l in driver.loads() {
            seen[l] += 1;
            if seen[l] == 2 {
                violations.push(Violation::new(ViolationType::DuplicateLoad {
                    load_id: solution.loads()[l].id().to_string(),
                }));
            }
        }

        let duration = evaluator.route_distance(driver.loads());
        if duration > solution.max_duration() {
            violations.push(Violation::new(ViolationType::MaxDurationExceeded {
                route_index: idx,
                duration,
                max_duration: solution.max_duration(),
            }));
        }
    }

    for (l, &count) in seen.iter().enumerate() {
        if count == 0 {
            violations.push(Violation::new(ViolationType::UnassignedLoad {
                load_id: solution.loads()[l].id().to_string(),
            }));
        }
    }

    violations
}

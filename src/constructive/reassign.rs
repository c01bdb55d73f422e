//! Cheapest-append placement of loads that have no driver.

use crate::models::{Driver, Solution};

/// Gives every unassigned load a driver.
///
/// Loads are handled one at a time in load table order. Each goes to the end
/// of the existing driver whose tour stays shortest after the append, among
/// those that stay within the duration cap; the earliest driver wins ties. A
/// load no driver can take opens a new single-load driver, even when its own
/// round trip exceeds the cap.
///
/// Returns the number of loads placed.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::constructive::reassign_unassigned;
/// use u_dispatch::models::{Driver, Load, Point, Solution};
///
/// let loads = vec![
///     Load::new("1", Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
///     Load::new("2", Point::new(0.0, 25.0), Point::new(0.0, 30.0)),
/// ];
/// let mut sol = Solution::new(loads, &SolverConfig::default());
/// sol.add_driver(Driver::with_loads(vec![0]));
///
/// assert_eq!(reassign_unassigned(&mut sol), 1);
/// assert_eq!(sol.route_ids(0), vec!["1", "2"]);
/// ```
pub fn reassign_unassigned(solution: &mut Solution) -> usize {
    let pending = solution.unassigned();
    let max_duration = solution.max_duration();

    for &load in &pending {
        let (evaluator, drivers) = solution.split_mut();

        let mut best: Option<(usize, f64)> = None;
        let mut candidate = Vec::new();
        for (idx, driver) in drivers.iter().enumerate() {
            candidate.clear();
            candidate.extend_from_slice(driver.loads());
            candidate.push(load);
            let distance = evaluator.route_distance(&candidate);
            if distance <= max_duration && best.map_or(true, |(_, d)| distance < d) {
                best = Some((idx, distance));
            }
        }

        match best {
            Some((idx, _)) => drivers[idx].push(load),
            None => drivers.push(Driver::with_loads(vec![load])),
        }
    }

    pending.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::evaluation::validate;
    use crate::models::{Load, Point};

    fn load(id: &str, px: f64, py: f64, dx: f64, dy: f64) -> Load {
        Load::new(id, Point::new(px, py), Point::new(dx, dy))
    }

    #[test]
    fn test_reassign_nothing_pending() {
        let mut sol = Solution::new(vec![load("1", 1.0, 0.0, 2.0, 0.0)], &SolverConfig::default());
        sol.add_driver(Driver::with_loads(vec![0]));
        assert_eq!(reassign_unassigned(&mut sol), 0);
        assert_eq!(sol.num_drivers(), 1);
    }

    #[test]
    fn test_reassign_opens_driver_when_none_exist() {
        let mut sol = Solution::new(
            vec![load("1", 1.0, 0.0, 2.0, 0.0), load("2", 0.0, 1.0, 0.0, 2.0)],
            &SolverConfig::default(),
        );
        assert_eq!(reassign_unassigned(&mut sol), 2);
        // the second load is appended to the driver opened for the first
        assert_eq!(sol.num_drivers(), 1);
        assert_eq!(sol.route_ids(0), vec!["1", "2"]);
    }

    #[test]
    fn test_reassign_picks_cheapest_driver() {
        let loads = vec![
            load("east", 100.0, 0.0, 110.0, 0.0),
            load("west", -100.0, 0.0, -110.0, 0.0),
            load("west2", -120.0, 0.0, -130.0, 0.0),
        ];
        let mut sol = Solution::new(loads, &SolverConfig::default());
        sol.add_driver(Driver::with_loads(vec![0]));
        sol.add_driver(Driver::with_loads(vec![1]));
        reassign_unassigned(&mut sol);
        assert_eq!(sol.route_ids(1), vec!["west", "west2"]);
        assert_eq!(sol.route_ids(0), vec!["east"]);
    }

    #[test]
    fn test_reassign_respects_cap() {
        let loads = vec![
            load("1", 200.0, 0.0, 200.0, 0.0),
            load("2", -200.0, 0.0, -200.0, 0.0),
        ];
        let config = SolverConfig::default().with_max_duration(500.0);
        let mut sol = Solution::new(loads, &config);
        sol.add_driver(Driver::with_loads(vec![0]));
        reassign_unassigned(&mut sol);
        // 200 + 400 + 200 = 800 > 500, so a second driver is opened
        assert_eq!(sol.num_drivers(), 2);
        assert!(validate(&sol).is_empty());
    }

    #[test]
    fn test_reassign_ties_go_to_first_driver() {
        let loads = vec![
            load("a", 0.0, 5.0, 0.0, 5.0),
            load("b", 0.0, 5.0, 0.0, 5.0),
            load("c", 0.0, 5.0, 0.0, 5.0),
        ];
        let mut sol = Solution::new(loads, &SolverConfig::default());
        sol.add_driver(Driver::with_loads(vec![0]));
        sol.add_driver(Driver::with_loads(vec![1]));
        reassign_unassigned(&mut sol);
        assert_eq!(sol.route_ids(0), vec!["a", "c"]);
        assert_eq!(sol.route_ids(1), vec!["b"]);
    }
}

use proptest::prelude::*;

use u_dispatch::config::{SavingsFormula, SolverConfig};
use u_dispatch::constructive::clarke_wright_savings;
use u_dispatch::distance::euclidean;
use u_dispatch::evaluation::validate;
use u_dispatch::local_search::exchange_improve;
use u_dispatch::models::{Load, Point, ViolationType};
use u_dispatch::problem::{parse_problem, write_problem, ParseMode};
use u_dispatch::solver::solve;

fn point() -> impl Strategy<Value = Point> {
    (-150.0..150.0f64, -150.0..150.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn loads(max: usize) -> impl Strategy<Value = Vec<Load>> {
    prop::collection::vec((point(), point()), 0..max).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(k, (p, d))| Load::new((k + 1).to_string(), p, d))
            .collect()
    })
}

fn formula() -> impl Strategy<Value = SavingsFormula> {
    prop_oneof![Just(SavingsFormula::Link), Just(SavingsFormula::Span)]
}

proptest! {
    #[test]
    fn test_distance_symmetric(p in point(), q in point()) {
        prop_assert_eq!(euclidean(p, q), euclidean(q, p));
        prop_assert_eq!(euclidean(p, p), 0.0);
    }

    #[test]
    fn test_every_load_assigned_once(loads in loads(25), savings in formula()) {
        let n = loads.len();
        let config = SolverConfig::default().with_savings(savings);
        let report = solve(loads, &config);

        prop_assert_eq!(report.solution.num_assigned(), n);
        for v in validate(&report.solution) {
            let misassigned = matches!(
                v.kind,
                ViolationType::DuplicateLoad { .. }
                    | ViolationType::UnassignedLoad { .. }
                    | ViolationType::EmptyRoute { .. }
            );
            prop_assert!(!misassigned, "{:?}", v);
        }
    }

    #[test]
    fn test_search_never_worsens(loads in loads(25)) {
        let report = solve(loads, &SolverConfig::default());
        prop_assert!(report.cost <= report.construction_cost + 1e-9);
    }

    #[test]
    fn test_search_idempotent(loads in loads(20)) {
        let config = SolverConfig::default();
        let mut report = solve(loads, &config);
        prop_assume!(report.search.converged);

        let again = exchange_improve(&mut report.solution, &config);
        prop_assert_eq!(again.swaps, 0);
        prop_assert_eq!(report.solution.total_cost(), report.cost);
    }

    #[test]
    fn test_construction_respects_cap(loads in loads(30), savings in formula()) {
        let config = SolverConfig::default().with_savings(savings);
        let solution = clarke_wright_savings(loads, &config);
        for (idx, driver) in solution.drivers().iter().enumerate() {
            if driver.len() > 1 {
                prop_assert!(solution.route_distance(idx) <= config.max_duration());
            }
        }
    }

    #[test]
    fn test_feasible_swaps_keep_cap(loads in loads(20)) {
        let config = SolverConfig::default().with_feasible_swaps(true);
        let report = solve(loads, &config);
        for (idx, driver) in report.solution.drivers().iter().enumerate() {
            if driver.len() > 1 {
                prop_assert!(report.solution.route_distance(idx) <= config.max_duration());
            }
        }
    }

    #[test]
    fn test_written_problem_parses_back(loads in loads(30)) {
        let rounded: Vec<Load> = loads
            .iter()
            .map(|l| {
                let r = |p: Point| Point::new((p.x * 100.0).round() / 100.0, (p.y * 100.0).round() / 100.0);
                Load::new(l.id(), r(l.pickup()), r(l.dropoff()))
            })
            .collect();
        let parsed = parse_problem(&write_problem(&rounded), ParseMode::Strict).unwrap();
        prop_assert_eq!(parsed, rounded);
    }
}

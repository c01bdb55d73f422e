//! Solver configuration.

use crate::models::Point;

/// Default cap on a single driver's tour length (12 hours, in minutes).
pub const DEFAULT_MAX_DURATION: f64 = 12.0 * 60.0;

/// Default flat charge for each driver used.
pub const DEFAULT_DRIVER_COST: f64 = 500.0;

/// Default upper bound on local search passes.
pub const DEFAULT_MAX_PASSES: usize = 10_000;

/// How the Clarke-Wright savings of serving load `j` right after load `i`
/// are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SavingsFormula {
    /// `d(dropoff_i, depot) + d(depot, pickup_j) - d(dropoff_i, pickup_j)`:
    /// the deadhead avoided by driving straight from `i`'s dropoff to `j`'s
    /// pickup instead of through the depot.
    #[default]
    Link,
    /// `d(depot, pickup_i) + d(dropoff_j, depot) - d(pickup_i, dropoff_j)`.
    Span,
}

/// Parameters shared by construction, improvement and cost evaluation.
///
/// Default: depot at the origin, 720-unit duration cap, 500 per driver,
/// [`SavingsFormula::Link`], at most 10 000 local search passes, cost-only
/// swap acceptance.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolverConfig;
/// use u_dispatch::models::Point;
///
/// let config = SolverConfig::default()
///     .with_depot(Point::new(5.0, 5.0))
///     .with_max_duration(480.0)
///     .with_feasible_swaps(true);
/// assert_eq!(config.max_duration(), 480.0);
/// assert_eq!(config.driver_cost(), 500.0);
/// assert!(config.feasible_swaps());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    depot: Point,
    max_duration: f64,
    driver_cost: f64,
    savings: SavingsFormula,
    max_passes: usize,
    feasible_swaps: bool,
}

impl SolverConfig {
    /// Sets the depot every tour starts and ends at.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the maximum tour length of a single driver.
    pub fn with_max_duration(mut self, max: f64) -> Self {
        self.max_duration = max;
        self
    }

    /// Sets the fixed cost charged per driver.
    pub fn with_driver_cost(mut self, cost: f64) -> Self {
        self.driver_cost = cost;
        self
    }

    /// Sets the savings measure used by construction.
    pub fn with_savings(mut self, savings: SavingsFormula) -> Self {
        self.savings = savings;
        self
    }

    /// Sets the local search pass cap.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// When `true`, local search rejects swaps that push either route over
    /// the duration cap.
    pub fn with_feasible_swaps(mut self, enabled: bool) -> Self {
        self.feasible_swaps = enabled;
        self
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Maximum tour length of a single driver.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    /// Fixed cost per driver.
    pub fn driver_cost(&self) -> f64 {
        self.driver_cost
    }

    /// Savings measure used by construction.
    pub fn savings(&self) -> SavingsFormula {
        self.savings
    }

    /// Local search pass cap.
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Whether local search re-checks the duration cap after each swap.
    pub fn feasible_swaps(&self) -> bool {
        self.feasible_swaps
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depot: Point::ORIGIN,
            max_duration: DEFAULT_MAX_DURATION,
            driver_cost: DEFAULT_DRIVER_COST,
            savings: SavingsFormula::Link,
            max_passes: DEFAULT_MAX_PASSES,
            feasible_swaps: false,
        }
    }
}

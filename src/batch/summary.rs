//! Aggregated batch results.

use std::time::Duration;

/// Per-instance outcome reported by [`solve_file`](super::solve_file).
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceResult {
    /// Final total cost.
    pub cost: f64,
    /// Time spent loading and solving the instance.
    pub elapsed: Duration,
    /// Drivers in the final solution.
    pub drivers: usize,
}

/// Running totals over a batch.
///
/// Summaries combine with [`merge`](Self::merge), so per-instance results
/// can be folded in any order and in parallel.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_dispatch::batch::{BatchSummary, InstanceResult};
///
/// let mut summary = BatchSummary::default();
/// summary.record(&InstanceResult { cost: 100.0, elapsed: Duration::from_millis(10), drivers: 1 });
/// summary.record(&InstanceResult { cost: 300.0, elapsed: Duration::from_millis(30), drivers: 2 });
/// assert_eq!(summary.mean_cost(), Some(200.0));
/// assert_eq!(summary.mean_elapsed(), Some(Duration::from_millis(20)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    /// Sum of final costs of solved instances.
    pub total_cost: f64,
    /// Sum of per-instance running times.
    pub total_elapsed: Duration,
    /// Instances solved.
    pub instances: usize,
    /// Files that could not be loaded.
    pub failures: usize,
}

impl BatchSummary {
    /// Summary of a single solved instance.
    pub fn from_result(result: &InstanceResult) -> Self {
        let mut summary = Self::default();
        summary.record(result);
        summary
    }

    /// Summary of a single failed file.
    pub fn failure() -> Self {
        Self {
            failures: 1,
            ..Self::default()
        }
    }

    /// Adds one solved instance.
    pub fn record(&mut self, result: &InstanceResult) {
        self.total_cost += result.cost;
        self.total_elapsed += result.elapsed;
        self.instances += 1;
    }

    /// Combines two partial summaries.
    pub fn merge(mut self, other: Self) -> Self {
        self.total_cost += other.total_cost;
        self.total_elapsed += other.total_elapsed;
        self.instances += other.instances;
        self.failures += other.failures;
        self
    }

    /// Mean final cost, `None` when nothing was solved.
    pub fn mean_cost(&self) -> Option<f64> {
        (self.instances > 0).then(|| self.total_cost / self.instances as f64)
    }

    /// Mean running time, `None` when nothing was solved.
    pub fn mean_elapsed(&self) -> Option<Duration> {
        (self.instances > 0).then(|| {
            let nanos = self.total_elapsed.as_nanos() / self.instances as u128;
            Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
        })
    }
}

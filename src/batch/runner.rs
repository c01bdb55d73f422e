//! Parallel batch execution.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, error, info};

use super::{discover_problems, BatchConfig, BatchError, BatchSummary, InstanceResult};
use crate::problem::{load_problem_file, ParseError};
use crate::solver::solve;

/// Loads and solves one problem file.
///
/// The reported time covers both loading and solving.
pub fn solve_file(path: &Path, config: &BatchConfig) -> Result<InstanceResult, ParseError> {
    let start = Instant::now();
    let loads = load_problem_file(path, config.parse_mode)?;
    let report = solve(loads, &config.solver);
    let elapsed = start.elapsed();

    debug!(
        path = %path.display(),
        cost = report.cost,
        drivers = report.solution.num_drivers(),
        ?elapsed,
        "instance solved"
    );
    Ok(InstanceResult {
        cost: report.cost,
        elapsed,
        drivers: report.solution.num_drivers(),
    })
}

/// Solves every problem file under `dir` in parallel and aggregates the
/// results.
///
/// Files that fail to load are logged and counted in
/// [`BatchSummary::failures`]; only directory enumeration and thread pool
/// setup errors abort the batch.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use u_dispatch::batch::{run_batch, BatchConfig};
///
/// let summary = run_batch(Path::new("problems"), &BatchConfig::default()).unwrap();
/// if let Some(mean) = summary.mean_cost() {
///     println!("Mean Cost: {mean:.2}");
/// }
/// ```
pub fn run_batch(dir: &Path, config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let files = discover_problems(dir)?;
    info!(dir = %dir.display(), files = files.len(), "batch started");

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = config.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let summary = pool.install(|| {
        files
            .par_iter()
            .map(|path| match solve_file(path, config) {
                Ok(result) => BatchSummary::from_result(&result),
                Err(err) => {
                    error!(path = %path.display(), error = %err, "failed to load problem");
                    BatchSummary::failure()
                }
            })
            .reduce(BatchSummary::default, BatchSummary::merge)
    });

    info!(
        instances = summary.instances,
        failures = summary.failures,
        total_cost = summary.total_cost,
        "batch finished"
    );
    Ok(summary)
}

//! Random problem generation.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;

use super::write_problem;
use crate::models::{Load, Point};

/// Errors raised while writing a problem set.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("coordinate extent must be finite and at most half of f64::MAX, got {0}")]
    InvalidExtent(f64),

    #[error("failed to write problem set: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates `count` loads with ids `1..=count` and pickup/dropoff coordinates
/// drawn uniformly from `[-extent, extent]`, rounded to two decimals.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_dispatch::problem::random_loads;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let loads = random_loads(5, 100.0, &mut rng);
/// assert_eq!(loads.len(), 5);
/// assert_eq!(loads[4].id(), "5");
/// assert!(loads.iter().all(|l| l.pickup().x.abs() <= 100.0));
/// ```
///
/// # Panics
///
/// Panics if `extent` is NaN, infinite, or so large that `2 * extent`
/// overflows.
pub fn random_loads<R: Rng>(count: usize, extent: f64, rng: &mut R) -> Vec<Load> {
    assert!(
        valid_extent(extent),
        "coordinate extent must be finite and at most half of f64::MAX, got {extent}"
    );
    let extent = extent.abs();
    let mut coordinate = || {
        if extent == 0.0 {
            0.0
        } else {
            round2(rng.random_range(-extent..=extent))
        }
    };

    (1..=count)
        .map(|id| {
            let pickup = Point::new(coordinate(), coordinate());
            let dropoff = Point::new(coordinate(), coordinate());
            Load::new(id.to_string(), pickup, dropoff)
        })
        .collect()
}

/// Writes `count` random problems of `loads` loads each into `dir`, named
/// `problem1.txt`, `problem2.txt`, ... The same seed produces the same files.
///
/// Creates `dir` if it does not exist and returns the written paths. An
/// extent [`random_loads`] cannot sample from is rejected before anything is
/// written.
pub fn write_problem_set(
    dir: &Path,
    count: usize,
    loads: usize,
    extent: f64,
    seed: u64,
) -> Result<Vec<PathBuf>, GenerateError> {
    if !valid_extent(extent) {
        return Err(GenerateError::InvalidExtent(extent));
    }
    std::fs::create_dir_all(dir)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut paths = Vec::with_capacity(count);
    for n in 1..=count {
        let path = dir.join(format!("problem{n}.txt"));
        std::fs::write(&path, write_problem(&random_loads(loads, extent, &mut rng)))?;
        paths.push(path);
    }

    info!(dir = %dir.display(), count, loads, seed, "problem set written");
    Ok(paths)
}

/// The sampled range `[-extent, extent]` must have a finite width.
fn valid_extent(extent: f64) -> bool {
    (2.0 * extent).is_finite()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

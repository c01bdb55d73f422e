//! # u-dispatch
//!
//! Single-depot pickup-and-delivery dispatch: every load is a trip from a
//! pickup point to a dropoff point, each driver serves an ordered list of
//! loads in one closed tour from the depot, and no tour may exceed a duration
//! cap. The objective is a flat charge per driver plus total distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Driver, Solution)
//! - [`config`] — Solver parameters
//! - [`distance`] — Euclidean distance
//! - [`evaluation`] — Route cost, feasibility and solution validation
//! - [`constructive`] — Clarke-Wright savings construction and reassignment
//! - [`local_search`] — Inter-route load exchange
//! - [`solver`] — Construction followed by improvement
//! - [`problem`] — Problem file reading, writing and generation
//! - [`batch`] — Parallel solving of a directory of problems

pub mod batch;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod problem;
pub mod solver;

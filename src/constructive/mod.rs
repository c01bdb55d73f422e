//! Constructive heuristics for building initial dispatch solutions.
//!
//! - [`clarke_wright_savings`] — Clarke-Wright savings construction (1964), O(n² log n)
//! - [`reassign_unassigned`] — Cheapest feasible append for leftover loads

mod clarke_wright;
mod reassign;

pub use clarke_wright::clarke_wright_savings;
pub use reassign::reassign_unassigned;

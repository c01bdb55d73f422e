//! Tour length, cost and feasibility evaluation.
//!
//! - [`RouteEvaluator`] — tour length, duration cap check, total cost
//! - [`validate`] — whole-solution assignment and cap validation

mod evaluator;
mod validate;

pub use evaluator::RouteEvaluator;
pub use validate::validate;

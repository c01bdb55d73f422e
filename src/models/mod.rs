//! Domain model types for pickup-and-dropoff dispatch.
//!
//! Provides the core abstractions: planar points, loads that must be carried
//! from a pickup to a dropoff, drivers as ordered tours of loads, and the
//! solution that ties loads, drivers and cost parameters together.

mod driver;
mod load;
mod point;
mod solution;

pub use driver::Driver;
pub use load::Load;
pub use point::Point;
pub use solution::{Solution, Violation, ViolationType};

//! Local search operators for improving dispatch solutions.
//!
//! - [`exchange_improve`] — Inter-route single-load exchange, hill climbing to a fixed point

mod exchange;

pub use exchange::{exchange_improve, SearchStats};

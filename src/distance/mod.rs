//! Distance functions.
//!
//! All travel in this crate is straight-line Euclidean distance.

mod euclidean;

pub use euclidean::euclidean;

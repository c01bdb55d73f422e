//! Problem files: reading, writing and random generation.
//!
//! - [`parse_problem`] / [`load_problem_file`] — Line-oriented load list reader
//! - [`write_problem`] — The inverse of [`parse_problem`]
//! - [`random_loads`] / [`write_problem_set`] — Seeded random instances

mod generate;
mod parser;
mod writer;

pub use generate::{random_loads, write_problem_set, GenerateError};
pub use parser::{load_problem_file, parse_problem, ParseError, ParseMode};
pub use writer::{write_problem, HEADER};

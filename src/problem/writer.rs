//! Problem file writer.

use crate::models::Load;

/// Header line of a problem file.
pub const HEADER: &str = "loadNumber pickup dropoff";

/// Renders loads in the problem file format read by
/// [`parse_problem`](super::parse_problem).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::problem::write_problem;
///
/// let loads = vec![Load::new("1", Point::new(-1.5, 2.0), Point::new(3.0, 4.25))];
/// assert_eq!(
///     write_problem(&loads),
///     "loadNumber pickup dropoff\n1 (-1.5,2) (3,4.25)\n"
/// );
/// ```
pub fn write_problem(loads: &[Load]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(
            loads
                .iter()
                .map(|load| format!("{} {} {}", load.id(), load.pickup(), load.dropoff())),
        )
        .map(|line| line + "\n")
        .collect()
}

//! Euclidean distance.

use crate::models::Point;

/// Straight-line distance between two points.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::euclidean;
/// use u_dispatch::models::Point;
///
/// let d = euclidean(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(p: Point, q: Point) -> f64 {
    p.distance_to(&q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_axis() {
        assert!((euclidean(Point::ORIGIN, Point::new(0.0, 7.0)) - 7.0).abs() < 1e-10);
        assert!((euclidean(Point::ORIGIN, Point::new(-7.0, 0.0)) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_euclidean_symmetric() {
        let p = Point::new(-3.5, 12.25);
        let q = Point::new(8.0, -1.0);
        assert_eq!(euclidean(p, q), euclidean(q, p));
        assert_eq!(euclidean(p, p), 0.0);
    }
}

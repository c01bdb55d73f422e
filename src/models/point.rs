//! Planar point type.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert!((p.distance_to(&Point::ORIGIN) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, where the depot sits unless configured otherwise.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(-1.5, 2.0).to_string(), "(-1.5,2)");
    }

    #[test]
    fn test_point_serde() {
        let p = Point::new(1.25, -7.0);
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, r#"{"x":1.25,"y":-7.0}"#);
    }
}

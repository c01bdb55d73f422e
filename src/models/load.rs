//! Load type: a pickup-to-dropoff trip.

use serde::{Deserialize, Serialize};

use super::Point;

/// A trip that must be carried from its pickup point to its dropoff point.
///
/// Loads are identified by a string id that is unique within one problem
/// instance.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new("7", Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(load.id(), "7");
/// assert!((load.delivery_distance() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: String,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a new load.
    pub fn new(id: impl Into<String>, pickup: Point, dropoff: Point) -> Self {
        Self {
            id: id.into(),
            pickup,
            dropoff,
        }
    }

    /// Load identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Where the load is collected.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is delivered.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Distance driven while carrying this load.
    pub fn delivery_distance(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }

    /// Length of a tour that serves only this load, starting and ending at
    /// `depot`.
    pub fn round_trip(&self, depot: Point) -> f64 {
        depot.distance_to(&self.pickup) + self.delivery_distance() + self.dropoff.distance_to(&depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_new() {
        let l = Load::new("a", Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(l.id(), "a");
        assert_eq!(l.pickup(), Point::new(1.0, 2.0));
        assert_eq!(l.dropoff(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_load_round_trip() {
        // depot -> (0,10) = 10, (0,10) -> (0,20) = 10, (0,20) -> depot = 20
        let l = Load::new("1", Point::new(0.0, 10.0), Point::new(0.0, 20.0));
        assert!((l.round_trip(Point::ORIGIN) - 40.0).abs() < 1e-10);
    }
}

//! Driver type: one closed tour through a sequence of loads.

/// An ordered sequence of loads served by a single driver.
///
/// Loads are referenced by their index in the owning
/// [`Solution`](super::Solution)'s load table. The tour starts and ends at the
/// depot, which is not stored here. The order of `loads` is the delivery
/// order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Driver;
///
/// let mut driver = Driver::with_loads(vec![2, 0]);
/// driver.push(1);
/// assert_eq!(driver.loads(), &[2, 0, 1]);
/// assert!(driver.contains(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Driver {
    loads: Vec<usize>,
}

impl Driver {
    /// Creates a driver with an empty tour.
    pub fn new() -> Self {
        Self { loads: Vec::new() }
    }

    /// Creates a driver serving `loads` in the given order.
    pub fn with_loads(loads: Vec<usize>) -> Self {
        Self { loads }
    }

    /// Appends a load to the end of the tour.
    pub fn push(&mut self, load: usize) {
        self.loads.push(load);
    }

    /// Load indices in delivery order.
    pub fn loads(&self) -> &[usize] {
        &self.loads
    }

    /// Number of loads on this tour.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if this driver serves no load.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Returns `true` if `load` is on this tour.
    pub fn contains(&self, load: usize) -> bool {
        self.loads.contains(&load)
    }

    /// Exchanges the load at position `i` of this tour with the load at
    /// position `j` of `other`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap_with(&mut self, i: usize, other: &mut Driver, j: usize) {
        std::mem::swap(&mut self.loads[i], &mut other.loads[j]);
    }
}

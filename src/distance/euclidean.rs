//! Straight-line distance between planar locations.

/// A location on the plane.
///
/// Implemented by [`Customer`](crate::models::Customer) and
/// [`Depot`](crate::models::Depot) so that distances can be taken between
/// any pair of them.
pub trait Point {
    /// X-coordinate.
    fn x(&self) -> f64;

    /// Y-coordinate.
    fn y(&self) -> f64;
}

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use u_antroute::distance::euclidean;
/// use u_antroute::models::{Customer, Depot};
///
/// let depot = Depot::new(0.0, 0.0);
/// let c = Customer::new(0, 3.0, 4.0, 1.0, 0.0);
/// assert!((euclidean(&depot, &c) - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean<A: Point + ?Sized, B: Point + ?Sized>(a: &A, b: &B) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx.hypot(dy)
}

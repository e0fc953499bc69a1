//! Flat-plane geometry primitives.
//!
//! All geometry operates on a local 2-D Cartesian plane. Azimuths follow the
//! surveying convention: degrees measured clockwise from the positive Y axis
//! ("north"), so a displacement is `(d * sin(az), d * cos(az))` rather than
//! the math-convention `(cos, sin)` pair.

use serde::{Deserialize, Serialize};

/// A 2-D point on the local site plane, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0) every traversal starts from.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Returns the point reached by travelling `distance` meters along the
    /// given azimuth (degrees clockwise from north).
    pub fn displaced_by(&self, azimuth_deg: f64, distance: f64) -> Point2 {
        let az = azimuth_deg.to_radians();
        Point2::new(self.x + distance * az.sin(), self.y + distance * az.cos())
    }

    /// Whether both coordinates of `other` are within `tolerance` of this
    /// point. Used for the traversal closure check.
    pub fn coincides_with(&self, other: &Point2, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

/// Unit left-normal of the direction vector `(dx, dy)`.
///
/// Returns `None` for a zero-length vector; offsets are never fabricated
/// from a degenerate direction.
pub fn left_normal(dx: f64, dy: f64) -> Option<(f64, f64)> {
    let length = dx.hypot(dy);
    if length == 0.0 {
        return None;
    }
    Some((-dy / length, dx / length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_displacement_follows_surveying_convention() {
        let origin = Point2::origin();

        // Azimuth 0 is due north (+Y).
        let north = origin.displaced_by(0.0, 10.0);
        assert_eq!(north, Point2::new(0.0, 10.0));

        // Azimuth 90 is due east (+X).
        let east = origin.displaced_by(90.0, 10.0);
        assert!(approx(east.x, 10.0));
        assert!(approx(east.y, 0.0));

        // Azimuth 180 is due south (-Y).
        let south = origin.displaced_by(180.0, 10.0);
        assert!(approx(south.x, 0.0));
        assert!(approx(south.y, -10.0));
    }

    #[test]
    fn test_distance_to() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_coincides_with_uses_per_axis_tolerance() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 5e-7, 2.0 - 5e-7);
        assert!(a.coincides_with(&b, 1e-6));
        assert!(!a.coincides_with(&Point2::new(1.0, 2.1), 1e-6));
    }

    #[test]
    fn test_left_normal() {
        // A northbound segment has its left normal pointing west.
        let (nx, ny) = left_normal(0.0, 10.0).unwrap();
        assert!(approx(nx, -1.0));
        assert!(approx(ny, 0.0));

        // An eastbound segment has its left normal pointing north.
        let (nx, ny) = left_normal(10.0, 0.0).unwrap();
        assert!(approx(nx, 0.0));
        assert!(approx(ny, 1.0));
    }

    #[test]
    fn test_left_normal_rejects_zero_length() {
        assert!(left_normal(0.0, 0.0).is_none());
    }
}

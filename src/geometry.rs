//! Geometry primitives for survey trajectories
//!
//! - `Point3` - Cartesian station position (northing, easting, TVD)
//! - `distance()` - straight-line chord between two positions
//! - `angle_difference()` - signed shortest rotation between two bearings

use serde::{Deserialize, Serialize};

/// Station position in survey coordinates (ft).
///
/// `x` = northing, `y` = easting, `z` = true vertical depth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Euclidean distance between two points.
///
/// Symmetric in its arguments. NaN coordinates propagate to the result.
pub fn distance(p1: Point3, p2: Point3) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let dz = p2.z - p1.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Signed shortest angular difference from bearing `a` to bearing `b` (degrees).
///
/// Result lies in `[-180, 180)`: `r = (b - a) mod 360`, then `r - 360` when
/// `r >= 180`. Positive means clockwise rotation from `a` to `b`.
///
/// `angle_difference(10.0, 350.0) == -20.0`, `angle_difference(350.0, 10.0) == 20.0`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    // rem_euclid keeps the divisor's sign, so r is never negative
    let r = (b - a).rem_euclid(360.0);
    if r >= 180.0 {
        r - 360.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_unit_cube_diagonal() {
        let d = distance(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!((d - 3.0_f64.sqrt()).abs() < 1e-5, "Expected sqrt(3), got {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let p = Point3::new(120.5, -33.0, 4012.7);
        let q = Point3::new(98.1, 12.4, 4101.2);
        assert_eq!(distance(p, q), distance(q, p));
    }

    #[test]
    fn test_distance_nan_propagates() {
        let d = distance(Point3::new(f64::NAN, 0.0, 0.0), Point3::default());
        assert!(d.is_nan());
    }

    #[test]
    fn test_angle_difference_wraps_through_north() {
        assert_eq!(angle_difference(10.0, 350.0), -20.0);
        assert_eq!(angle_difference(350.0, 10.0), 20.0);
    }

    #[test]
    fn test_angle_difference_plain() {
        assert_eq!(angle_difference(30.0, 45.0), 15.0);
        assert_eq!(angle_difference(45.0, 30.0), -15.0);
        assert_eq!(angle_difference(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_angle_difference_half_turn_is_negative() {
        // The tie at exactly 180 maps to -180 in both directions
        assert_eq!(angle_difference(0.0, 180.0), -180.0);
        assert_eq!(angle_difference(180.0, 0.0), -180.0);
    }

    #[test]
    fn test_angle_difference_antisymmetric_away_from_tie() {
        let pairs = [(0.0, 17.5), (359.0, 2.0), (200.0, 10.0), (45.0, 300.0), (12.25, 12.5)];
        for (a, b) in pairs {
            let forward = angle_difference(a, b);
            let backward = angle_difference(b, a);
            assert!(
                (forward + backward).abs() < 1e-9,
                "angle_difference({a}, {b}) = {forward} but reverse = {backward}"
            );
        }
    }
}

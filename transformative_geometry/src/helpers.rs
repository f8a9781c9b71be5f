// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer geometry: midpoints, distances and signed angles.

use kurbo::{Point, Vec2};

/// Lengths at or below this are treated as degenerate (zero distance or
/// zero‑length vector).
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Returns the midpoint (centroid) of `points`, or `None` if the slice is empty.
#[must_use]
pub fn midpoint(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let n = points.len() as f64;
    Some((sum / n).to_point())
}

/// Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Signed angle in degrees needed to rotate `from` onto `to`.
///
/// The result is `atan2(to) - atan2(from)`; positive values rotate clockwise
/// when y grows downward. The difference is not wrapped, so a pair of
/// vectors straddling the ±180° seam yields a value near ±360°, which is the
/// same rotation.
///
/// Returns `None` when either vector is degenerate, since its direction is
/// undefined.
#[must_use]
pub fn signed_angle_degrees(from: Vec2, to: Vec2) -> Option<f64> {
    if from.hypot() <= DEGENERATE_EPSILON || to.hypot() <= DEGENERATE_EPSILON {
        return None;
    }
    Some((to.atan2() - from.atan2()).to_degrees())
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{distance, midpoint, signed_angle_degrees};

    #[test]
    fn midpoint_of_no_points_is_none() {
        assert_eq!(midpoint(&[]), None);
    }

    #[test]
    fn midpoint_of_single_point_is_that_point() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(midpoint(&[p]), Some(p));
    }

    #[test]
    fn midpoint_averages_all_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(midpoint(&pts), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0);
        assert_eq!(distance(Point::new(2.0, 2.0), Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn signed_angle_is_positive_clockwise() {
        let right = Vec2::new(1.0, 0.0);
        let down = Vec2::new(0.0, 1.0);
        let angle = signed_angle_degrees(right, down).unwrap();
        assert!((angle - 90.0).abs() < 1e-9);
        let back = signed_angle_degrees(down, right).unwrap();
        assert!((back + 90.0).abs() < 1e-9);
    }

    #[test]
    fn signed_angle_ignores_vector_length() {
        let angle = signed_angle_degrees(Vec2::new(2.0, 0.0), Vec2::new(5.0, 5.0)).unwrap();
        assert!((angle - 45.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_vectors_have_no_angle() {
        assert_eq!(signed_angle_degrees(Vec2::ZERO, Vec2::new(1.0, 0.0)), None);
        assert_eq!(signed_angle_degrees(Vec2::new(1.0, 0.0), Vec2::ZERO), None);
    }
}

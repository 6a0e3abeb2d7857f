// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pair geometry: distance, angle, and bounds of the two pointers driving a gesture.
//!
//! These are pure leaf helpers consumed by the recognizer; they keep no state. The
//! only non-obvious piece is [`pair_angle`]'s continuity reference: raw two-point
//! angles live in `(-π, π]`, so a rotating pair would report a discontinuous ~2π
//! jump whenever it crosses the boundary. Passing the previous step's angle as the
//! reference shifts the result by whole turns until it lands within π of that
//! reference, which keeps per-step angle deltas small and continuous.
//!
//! ```rust
//! use core::f64::consts::PI;
//! use kurbo::Point;
//! use tactum_gesture::geom::pair_angle;
//!
//! let center = Point::new(0.0, 0.0);
//!
//! // Just below the +π boundary...
//! let before = pair_angle(center, Point::new(-10.0, 0.2), None);
//! // ...then just past it. Unreferenced, the raw angle flips sign.
//! let raw = pair_angle(center, Point::new(-10.0, -0.2), None);
//! assert!((before - raw).abs() > PI);
//!
//! // With the previous angle as reference the step stays continuous.
//! let unwrapped = pair_angle(center, Point::new(-10.0, -0.2), Some(before));
//! assert!((unwrapped - before).abs() < 0.1);
//! ```

use core::f64::consts::{PI, TAU};
use kurbo::{Point, Rect};

/// Euclidean distance between the two pointer positions.
pub fn pair_distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Angle of the `a → b` vector in radians.
///
/// Without a reference the result is the raw `atan2` angle in `(-π, π]`. With a
/// finite `reference` the result is shifted by whole turns to land within π of it,
/// so consecutive samples never jump across the wrap boundary. A non-finite
/// reference is ignored rather than poisoning the result.
pub fn pair_angle(a: Point, b: Point, reference: Option<f64>) -> f64 {
    let raw = (b - a).atan2();
    let Some(reference) = reference.filter(|r| r.is_finite()) else {
        return raw;
    };
    if !raw.is_finite() {
        return raw;
    }
    let mut angle = raw;
    while angle - reference > PI {
        angle -= TAU;
    }
    while reference - angle > PI {
        angle += TAU;
    }
    angle
}

/// Axis-aligned bounding box enclosing both pointer positions.
pub fn pair_bounds(a: Point, b: Point) -> Rect {
    Rect::from_points(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_points() {
        let d = pair_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        let p = Point::new(7.0, -2.0);
        assert_eq!(pair_distance(p, p), 0.0);
    }

    #[test]
    fn angle_of_horizontal_pair_is_zero() {
        let angle = pair_angle(Point::new(0.0, 0.0), Point::new(10.0, 0.0), None);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn angle_of_vertical_pair_is_half_pi() {
        let angle = pair_angle(Point::new(0.0, 0.0), Point::new(0.0, 10.0), None);
        assert!((angle - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn angle_unwraps_across_positive_boundary() {
        let center = Point::new(0.0, 0.0);
        let before = pair_angle(center, Point::new(-10.0, 0.2), None);
        let after = pair_angle(center, Point::new(-10.0, -0.2), Some(before));

        // The raw angle would have flipped from ~+π to ~-π; unwrapped it advances
        // smoothly past π instead.
        assert!((after - before).abs() < 0.1);
        assert!(after > PI);
    }

    #[test]
    fn angle_unwraps_across_negative_boundary() {
        let center = Point::new(0.0, 0.0);
        let before = pair_angle(center, Point::new(-10.0, -0.2), None);
        let after = pair_angle(center, Point::new(-10.0, 0.2), Some(before));

        assert!((after - before).abs() < 0.1);
        assert!(after < -PI);
    }

    #[test]
    fn angle_unwraps_over_multiple_turns() {
        // A reference several turns out pulls the result into its band.
        let angle = pair_angle(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Some(3.0 * TAU + 0.25),
        );
        assert!((angle - 3.0 * TAU).abs() < 1e-9);
    }

    #[test]
    fn non_finite_reference_is_ignored() {
        let raw = pair_angle(Point::new(0.0, 0.0), Point::new(0.0, 10.0), None);
        let nan_ref = pair_angle(Point::new(0.0, 0.0), Point::new(0.0, 10.0), Some(f64::NAN));
        let inf_ref = pair_angle(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Some(f64::INFINITY),
        );
        assert_eq!(nan_ref, raw);
        assert_eq!(inf_ref, raw);
    }

    #[test]
    fn bounds_encloses_both_points() {
        let bounds = pair_bounds(Point::new(10.0, -5.0), Point::new(-2.0, 8.0));
        assert_eq!(bounds, Rect::new(-2.0, -5.0, 10.0, 8.0));
    }
}

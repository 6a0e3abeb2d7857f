// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Running gesture state: the baseline a gesture's deltas are measured against.

/// Mutable record scoped to the lifetime of one recognized gesture.
///
/// Two kinds of history live here and they deliberately diverge:
///
/// - `prev_distance`/`prev_angle` track the *raw* geometry of the previous step,
///   even through degenerate samples, so angle continuity keeps working.
/// - The accepted scale only ever takes finite values. A non-finite candidate is
///   rejected and the previous accepted value retained, so one glitched sample
///   cannot poison every later delta ("freeze on glitch").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureBaseline {
    /// Distance between the two pointers at gesture start. Set exactly once.
    pub start_distance: f64,
    /// Distance at the previous move step, tracked unconditionally.
    pub prev_distance: f64,
    /// Pair angle at gesture start, in radians. Set exactly once.
    pub start_angle: f64,
    /// Pair angle at the previous move step, tracked unconditionally.
    pub prev_angle: f64,
    /// Last accepted cumulative scale. Always finite.
    scale: f64,
}

impl GestureBaseline {
    /// Initialize the baseline from the start event's geometry.
    pub fn new(distance: f64, angle: f64) -> Self {
        Self {
            start_distance: distance,
            prev_distance: distance,
            start_angle: angle,
            prev_angle: angle,
            scale: 1.0,
        }
    }

    /// The last accepted cumulative scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Record the raw geometry of a completed move step.
    pub fn note_move(&mut self, distance: f64, angle: f64) {
        self.prev_distance = distance;
        self.prev_angle = angle;
    }

    /// Accept a newly computed scale, unless it is non-finite.
    ///
    /// Returns `true` if the candidate was accepted.
    pub fn accept_scale(&mut self, scale: f64) -> bool {
        if scale.is_finite() {
            self.scale = scale;
            true
        } else {
            false
        }
    }
}

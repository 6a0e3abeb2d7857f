// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element gesture configuration.
//!
//! Options are plain data with explicit defaults. Embedders hold one copy per
//! element (typically inside a [`crate::registry::GestureRegistry`]) and hand a
//! copy to each [`crate::session::GestureSession`]; nothing here is shared or
//! process-global.

use kurbo::Rect;

/// Capability configuration for gestures on one element.
///
/// The defaults mirror the capability descriptor: disabled until a consumer
/// opts in, automatic start, no concurrency cap, one gesture per element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureOptions {
    /// Whether gesture recognition is enabled for this element.
    pub enabled: bool,
    /// When `true`, eligibility never auto-starts a gesture; the embedder calls
    /// [`crate::session::GestureSession::start`] explicitly.
    pub manual_start: bool,
    /// Cap on concurrent gestures across all elements; `None` is unbounded.
    ///
    /// Consulted by embedders arbitrating across many sessions; a single
    /// session never runs more than one gesture regardless.
    pub max: Option<usize>,
    /// Cap on concurrent gestures per element.
    pub max_per_element: usize,
    /// Optional region restriction, stored for embedders to apply.
    ///
    /// The engine itself never consults this; restriction semantics live
    /// outside the recognition core.
    pub restrict: Option<Rect>,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            manual_start: false,
            max: None,
            max_per_element: 1,
            restrict: None,
        }
    }
}

impl GestureOptions {
    /// Default configuration with recognition enabled.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Default configuration with recognition enabled but auto-start disabled.
    pub fn manual() -> Self {
        Self {
            enabled: true,
            manual_start: true,
            ..Self::default()
        }
    }
}

// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactum_gesture --heading-base-level=0

//! Tactum Gesture: two-pointer gesture recognition with stable lifecycle deltas.
//!
//! This crate recognizes and quantifies multi-pointer manipulations — pinch-to-scale
//! and two-finger rotation — on top of a generic pointer stream. It emits a strictly
//! ordered sequence of lifecycle events (start → move* → end) whose snapshots carry
//! both absolute geometry (distance, angle, scale) and incremental deltas (`ds`, `da`)
//! relative to the previous step.
//!
//! The crate is the recognition *core* only. It does **not** own pointer tracking,
//! listener registration, or hit testing. Callers are expected to:
//!
//! - Maintain the live pointer list themselves (or use `tactum_session`, which wires
//!   this engine to an interaction session and a dispatch seam).
//! - Ask [`recognizer::GestureRecognizer::check`] whether a gesture may begin once a
//!   pointer lands, and route subsequent samples through `start`/`update`/`end`.
//! - Hand the returned [`event::GestureEvent`] snapshots to their own dispatch layer.
//!
//! ## Robustness policy
//!
//! Pointer pairs can momentarily coincide (zero distance) or report garbage, so the
//! engine never panics and never raises an error. Degenerate samples are absorbed by
//! value substitution instead:
//!
//! - A non-finite scale is never accepted into the running state; the previously
//!   accepted scale is retained and later deltas are measured from it.
//! - A move tick that observes no live pointers replays the previous event verbatim
//!   so callers always hold a valid snapshot.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tactum_gesture::event::{Pointer, PointerId};
//! use tactum_gesture::recognizer::GestureRecognizer;
//!
//! let id = |n: u64| PointerId::new(n).unwrap();
//! let mut recognizer = GestureRecognizer::default();
//!
//! // Two pointers land 10px apart.
//! let start = recognizer.start([
//!     Pointer::new(id(1), Point::new(0.0, 0.0)),
//!     Pointer::new(id(2), Point::new(10.0, 0.0)),
//! ]);
//! assert_eq!(start.distance, 10.0);
//! assert_eq!(start.scale, 1.0);
//! assert_eq!(start.ds, 0.0);
//!
//! // They spread to 20px apart: the scale doubles.
//! let moved = recognizer
//!     .update(&[
//!         Pointer::new(id(1), Point::new(0.0, 0.0)),
//!         Pointer::new(id(2), Point::new(20.0, 0.0)),
//!     ])
//!     .unwrap();
//! assert_eq!(moved.event().scale, 2.0);
//! assert_eq!(moved.event().ds, 1.0);
//!
//! // Both pointers lift: the gesture ends with geometry frozen at the last sample.
//! let end = recognizer
//!     .end(tactum_gesture::event::EndReason::Release)
//!     .unwrap();
//! assert_eq!(end.distance, 20.0);
//! assert_eq!(end.scale, 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod event;
pub mod geom;
pub mod recognizer;
pub mod state;

// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactum_session --heading-base-level=0

//! Tactum Session: interaction sessions for two-pointer gestures.
//!
//! This crate wires the `tactum_gesture` recognition engine to the collaborators
//! it expects around it:
//!
//! - [`pointers::PointerTracker`]: the live pointer list in stable
//!   first-contact order.
//! - [`options::GestureOptions`]: the per-element capability configuration
//!   (enable flag, manual start, concurrency limits) as an explicit struct with
//!   explicit defaults — no global mutable options table.
//! - [`registry::GestureRegistry`]: the per-element configuration store and
//!   registration surface.
//! - [`session::GestureSession`]: one interaction session per target element,
//!   routing pointer down/move/up/cancel edges through the engine's lifecycle
//!   and handing each enriched event to a caller-supplied handler synchronously,
//!   before the input-edge call returns.
//!
//! Dispatch is deliberately handler-passing rather than listener-storing: like a
//! responder-chain dispatcher, the session invokes your closure for each event
//! and you proxy it to however many listeners you maintain. There is no global
//! subscription anywhere.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tactum_gesture::event::{GestureEventType, Pointer, PointerId};
//! use tactum_session::options::GestureOptions;
//! use tactum_session::session::GestureSession;
//!
//! let id = |n: u64| PointerId::new(n).unwrap();
//! let mut session = GestureSession::new("canvas", GestureOptions::enabled());
//! let mut seen = Vec::new();
//!
//! // First pointer lands: not eligible yet.
//! session.pointer_down(Pointer::new(id(1), Point::new(0.0, 0.0)), |t, e| {
//!     seen.push((t, e.scale));
//! });
//! assert!(seen.is_empty());
//!
//! // Second pointer lands 10px away: the gesture starts.
//! session.pointer_down(Pointer::new(id(2), Point::new(10.0, 0.0)), |t, e| {
//!     seen.push((t, e.scale));
//! });
//! assert_eq!(seen, vec![(GestureEventType::Start, 1.0)]);
//!
//! // The pair spreads: a move event with doubled scale.
//! session.pointer_move(id(2), Point::new(20.0, 0.0), None, |t, e| {
//!     seen.push((t, e.scale));
//! });
//! assert_eq!(seen.last(), Some(&(GestureEventType::Move, 2.0)));
//!
//! // One pointer lifts: the gesture ends with frozen geometry.
//! session.pointer_up(id(1), |t, e| seen.push((t, e.scale)));
//! assert_eq!(seen.last(), Some(&(GestureEventType::End, 2.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod options;
pub mod pointers;
pub mod registry;
pub mod session;

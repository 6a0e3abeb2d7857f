// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle event model: pointers, phases, and the per-step gesture snapshot.
//!
//! A [`GestureEvent`] is an immutable snapshot created once per phase transition.
//! The recognizer fills its geometry during enrichment and never mutates it after
//! it has been handed out; the only event read later is the immediately previous
//! one, which the end phase uses to recover the last known-good geometry once the
//! pointers are gone.

use core::num::NonZeroU64;
use kurbo::{Point, Rect};

/// Pointer identifier for tracking multiple concurrent contacts.
pub type PointerId = NonZeroU64;

/// Which coordinate space drives gesture geometry.
///
/// Touch contacts carry both page- and client-space positions; embedders pick one
/// consistently for the lifetime of a recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaSource {
    /// Use page-space positions.
    #[default]
    Page,
    /// Use client-space positions.
    Client,
}

/// One tracked touch/contact point with a 2D position in both coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Identity of the contact, stable across its lifetime.
    pub id: PointerId,
    /// Position in page space.
    pub page: Point,
    /// Position in client space.
    pub client: Point,
}

impl Pointer {
    /// Create a pointer whose page and client positions coincide.
    pub fn new(id: PointerId, position: Point) -> Self {
        Self {
            id,
            page: position,
            client: position,
        }
    }

    /// Replace the client-space position.
    pub fn with_client(mut self, client: Point) -> Self {
        self.client = client;
        self
    }

    /// Position in the given coordinate space.
    pub fn position(&self, source: DeltaSource) -> Point {
        match source {
            DeltaSource::Page => self.page,
            DeltaSource::Client => self.client,
        }
    }
}

/// Why a gesture ended.
///
/// This explicit tag replaces any need to inspect the driving input sample when
/// enriching an end event: both reasons freeze geometry the same way, but
/// embedders routinely want to distinguish them (for example, to skip commit
/// logic on cancellation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The pointer count dropped below the gesture threshold.
    Release,
    /// The interaction was cancelled outright (device loss, explicit stop).
    Cancel,
}

/// Lifecycle stage of a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The gesture has just become eligible and is starting.
    Start,
    /// A fresh two-pointer sample while the gesture is active.
    Move,
    /// The gesture is over; geometry is frozen at the last good sample.
    End(EndReason),
}

impl GesturePhase {
    /// `true` for the start phase.
    pub fn is_start(self) -> bool {
        self == Self::Start
    }

    /// `true` for either end variant.
    pub fn is_end(self) -> bool {
        matches!(self, Self::End(_))
    }
}

/// Public event-type vocabulary for listener registration.
///
/// [`GestureEventType::InertiaStart`] is part of the stable name set but is never
/// emitted by this engine; inertia simulation lives outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureEventType {
    /// `gesturestart`
    Start,
    /// `gesturemove`
    Move,
    /// `gestureinertiastart`
    InertiaStart,
    /// `gestureend`
    End,
}

impl GestureEventType {
    /// All event types, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Move, Self::InertiaStart, Self::End];

    /// Stable wire name of this event type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "gesturestart",
            Self::Move => "gesturemove",
            Self::InertiaStart => "gestureinertiastart",
            Self::End => "gestureend",
        }
    }
}

/// Immutable per-phase snapshot of an active gesture's geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// Lifecycle stage this snapshot belongs to.
    pub phase: GesturePhase,
    /// The two pointers driving the gesture, in stable first-contact order.
    pub touches: [Pointer; 2],
    /// Distance between the two pointers at this instant.
    pub distance: f64,
    /// Angle of the pointer pair in radians, unwrapped for continuity.
    pub angle: f64,
    /// Cumulative scale factor relative to the distance at gesture start.
    pub scale: f64,
    /// Scale delta since the previous step (`0` on start).
    pub ds: f64,
    /// Angle delta since the previous step (`0` on start); total rotation on end.
    pub da: f64,
    /// Axis-aligned box enclosing both pointers.
    pub bounds: Rect,
}

impl GestureEvent {
    /// Create a bare snapshot for the given phase with geometry still unset.
    ///
    /// The recognizer's enrichment step fills in distance/angle/scale/deltas
    /// before the event is handed to any listener.
    pub fn new(phase: GesturePhase, touches: [Pointer; 2]) -> Self {
        Self {
            phase,
            touches,
            distance: 0.0,
            angle: 0.0,
            scale: 1.0,
            ds: 0.0,
            da: 0.0,
            bounds: Rect::ZERO,
        }
    }

    /// The listener-facing event type for this snapshot's phase.
    pub fn event_type(&self) -> GestureEventType {
        match self.phase {
            GesturePhase::Start => GestureEventType::Start,
            GesturePhase::Move => GestureEventType::Move,
            GesturePhase::End(_) => GestureEventType::End,
        }
    }
}

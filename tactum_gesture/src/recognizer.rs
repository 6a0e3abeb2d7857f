// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture engine: eligibility check, lifecycle operations, and delta enrichment.
//!
//! [`GestureRecognizer`] is the state machine behind one interaction session. An
//! external session layer feeds it pointer samples; the recognizer decides when a
//! gesture may begin, derives scale/angle/distance per step, and maintains the
//! running [`GestureBaseline`] so every emitted [`GestureEvent`] reports both
//! absolute values and incremental deltas.
//!
//! Phases are strictly ordered start → move* → end, with at most one active
//! gesture per recognizer. The ordering is enforced by precondition checks
//! (`update`/`end` return `None` when nothing is active), not by locking: all
//! operations run synchronously inside whatever dispatch tick the caller provides.
//!
//! ## Usage
//!
//! 1) Gate on [`GestureRecognizer::check`] when a pointer lands.
//! 2) Call [`GestureRecognizer::start`] with the two driving pointers.
//! 3) Route every subsequent pointer sample through [`GestureRecognizer::update`].
//! 4) When the pointer count drops below two, or on cancellation, call
//!    [`GestureRecognizer::end`].
//!
//! Each step hands back an enriched event; dispatching it is the caller's job.
//!
//! ## Delta conventions
//!
//! A move event's `ds` is measured from the last *accepted* scale, not the raw
//! scale of the previous sample. The two coincide on a clean stream; after a
//! degenerate sample (non-finite scale, which is never accepted) the frozen
//! accepted value keeps the next delta sane instead of propagating garbage.
//! `da` on a move is measured from the previous step's raw angle; on an end event
//! `ds` is measured from the nominal baseline of `1` and `da` is the total
//! rotation since the gesture started.

use crate::event::{DeltaSource, EndReason, GestureEvent, GesturePhase, Pointer};
use crate::geom;
use crate::state::GestureBaseline;

/// Minimum simultaneous pointers required for a gesture.
pub const MIN_POINTERS: usize = 2;

/// Action-kind name carried by the eligibility match signal.
pub const ACTION_NAME: &str = "gesture";

/// Match signal returned by the eligibility check.
///
/// External arbitration selects among competing action kinds per pointer-down;
/// this engine only ever bids under [`ACTION_NAME`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionMatch {
    /// Name of the matched action kind.
    pub name: &'static str,
}

/// Outcome of a move step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveResult<'a> {
    /// A fresh move event was produced and should be dispatched.
    Moved(&'a GestureEvent),
    /// No live pointer pair this tick; the previous event is handed back
    /// verbatim and must not be re-dispatched.
    Replayed(&'a GestureEvent),
}

impl<'a> MoveResult<'a> {
    /// The event carried by either outcome.
    pub fn event(&self) -> &'a GestureEvent {
        match self {
            Self::Moved(event) | Self::Replayed(event) => event,
        }
    }

    /// `true` when the previous event was replayed instead of a fresh sample.
    pub fn is_replay(&self) -> bool {
        matches!(self, Self::Replayed(_))
    }
}

/// Recognition state machine for one interaction session.
///
/// Owns the per-gesture [`GestureBaseline`] and the previously emitted event.
/// The baseline exists exactly while a gesture is active; the previous event is
/// retained so the end phase (and the zero-pointer move tick) can fall back to
/// the last known-good geometry.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    baseline: Option<GestureBaseline>,
    prev_event: Option<GestureEvent>,
    delta_source: DeltaSource,
}

impl GestureRecognizer {
    /// Create a recognizer reading pointer positions from the given space.
    pub fn new(delta_source: DeltaSource) -> Self {
        Self {
            baseline: None,
            prev_event: None,
            delta_source,
        }
    }

    /// Eligibility check: does the current pointer count warrant a gesture?
    ///
    /// Pure predicate with no side effects; returns the match signal iff the
    /// session tracks at least [`MIN_POINTERS`] simultaneous pointers, which
    /// guarantees single-pointer interactions never enter this engine.
    pub fn check(pointer_count: usize) -> Option<ActionMatch> {
        (pointer_count >= MIN_POINTERS).then_some(ActionMatch { name: ACTION_NAME })
    }

    /// The coordinate space driving this recognizer's geometry.
    pub fn delta_source(&self) -> DeltaSource {
        self.delta_source
    }

    /// `true` while a gesture is active.
    pub fn is_active(&self) -> bool {
        self.baseline.is_some()
    }

    /// The running baseline of the active gesture, if any.
    pub fn baseline(&self) -> Option<&GestureBaseline> {
        self.baseline.as_ref()
    }

    /// The most recently emitted event, if any.
    pub fn prev_event(&self) -> Option<&GestureEvent> {
        self.prev_event.as_ref()
    }

    /// Begin a gesture from the two driving pointers.
    ///
    /// Emits the enriched start event (`ds == 0`, `scale == 1`) and initializes
    /// the baseline from its geometry. Starting over an already-active gesture
    /// re-initializes it.
    pub fn start(&mut self, touches: [Pointer; 2]) -> &GestureEvent {
        let mut event = GestureEvent::new(GesturePhase::Start, touches);
        self.enrich(&mut event);
        self.baseline = Some(GestureBaseline::new(event.distance, event.angle));
        self.prev_event.insert(event)
    }

    /// Advance the gesture with the session's current live pointers.
    ///
    /// Returns `None` when no gesture is active. When fewer than two live
    /// pointers remain this tick (both may lift or cancel between samples), no
    /// new event is built: the previous event is replayed verbatim so callers
    /// always receive a valid snapshot. Otherwise the first two pointers in
    /// stable order drive a fresh move event, after which the baseline records
    /// the raw geometry unconditionally and the scale through the finite guard.
    pub fn update(&mut self, pointers: &[Pointer]) -> Option<MoveResult<'_>> {
        if !self.is_active() {
            return None;
        }
        if pointers.len() < MIN_POINTERS {
            return self.prev_event.as_ref().map(MoveResult::Replayed);
        }

        let mut event = GestureEvent::new(GesturePhase::Move, [pointers[0], pointers[1]]);
        self.enrich(&mut event);

        if let Some(baseline) = &mut self.baseline {
            baseline.note_move(event.distance, event.angle);
            baseline.accept_scale(event.scale);
        }
        Some(MoveResult::Moved(self.prev_event.insert(event)))
    }

    /// Terminate the active gesture.
    ///
    /// Returns `None` when no gesture is active. The end event's geometry is
    /// frozen at the previous event's values (the pointers may already be gone);
    /// its `ds` is the total scale change from the nominal start value of `1`
    /// and its `da` the total rotation since start. The gesture state is
    /// discarded; the recognizer is ready for a fresh start afterwards.
    pub fn end(&mut self, reason: EndReason) -> Option<GestureEvent> {
        if !self.is_active() {
            return None;
        }
        let touches = self.prev_event.as_ref()?.touches;
        let mut event = GestureEvent::new(GesturePhase::End(reason), touches);
        self.enrich(&mut event);
        self.baseline = None;
        self.prev_event = None;
        Some(event)
    }

    /// Fill in an event's geometry and deltas in place, branching on its phase.
    ///
    /// This is the enrichment hook the lifecycle operations run immediately
    /// before an event is handed out. It is public so an embedder with its own
    /// event-construction pipeline can invoke the same step on events of
    /// action-kind [`ACTION_NAME`]; it reads recognizer state but never writes
    /// it (baseline updates happen in [`GestureRecognizer::update`]).
    pub fn enrich(&self, event: &mut GestureEvent) {
        let [a, b] = event.touches;
        let a = a.position(self.delta_source);
        let b = b.position(self.delta_source);

        match event.phase {
            GesturePhase::Start => {
                event.distance = geom::pair_distance(a, b);
                event.bounds = geom::pair_bounds(a, b);
                event.angle = geom::pair_angle(a, b, None);
                event.scale = 1.0;
                event.ds = 0.0;
                event.da = 0.0;
            }
            GesturePhase::Move => {
                let Some(baseline) = &self.baseline else {
                    return;
                };
                event.distance = geom::pair_distance(a, b);
                event.bounds = geom::pair_bounds(a, b);
                // Ratio against the fixed start baseline. A zero start distance
                // is not guarded here: it yields a non-finite scale for this one
                // event, which the finite guard then refuses to accept.
                event.scale = event.distance / baseline.start_distance;
                event.angle = geom::pair_angle(a, b, Some(baseline.prev_angle));
                event.ds = event.scale - baseline.scale();
                event.da = event.angle - baseline.prev_angle;
            }
            GesturePhase::End(_) => {
                let (Some(prev), Some(baseline)) = (&self.prev_event, &self.baseline) else {
                    return;
                };
                event.touches = prev.touches;
                event.distance = prev.distance;
                event.bounds = prev.bounds;
                event.scale = prev.scale;
                event.angle = prev.angle;
                event.ds = event.scale - 1.0;
                event.da = event.angle - baseline.start_angle;
            }
        }
    }
}

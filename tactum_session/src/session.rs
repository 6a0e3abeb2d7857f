// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One interaction session: pointer edges in, gesture lifecycle events out.
//!
//! A [`GestureSession`] owns the live pointer list and a
//! [`GestureRecognizer`] for a single target element. Every input edge takes an
//! `on_event` handler which is invoked synchronously — once per lifecycle event,
//! before the edge call returns — with the listener-facing
//! [`GestureEventType`] and the enriched [`GestureEvent`]. Callers proxy the
//! handler to their own listener lists; the session stores no callbacks.
//!
//! Lifecycle routing follows the engine's phase ordering strictly:
//!
//! - A pointer landing makes the session eligible once two contacts are live;
//!   unless `manual_start` is set, the gesture starts right there and the
//!   session is marked as actively interacting (which keeps it from bidding
//!   again until the gesture ends).
//! - Pointer moves while interacting produce move events. A tick on which the
//!   pointer pair has vanished produces nothing; the engine replays its
//!   previous event internally and the session keeps it accessible through
//!   [`GestureSession::prev_event`].
//! - The pointer count dropping below two ends the gesture with
//!   [`EndReason::Release`]; [`GestureSession::stop`] ends it unconditionally
//!   with [`EndReason::Cancel`].

use kurbo::Point;
use tactum_gesture::event::{
    DeltaSource, EndReason, GestureEvent, GestureEventType, Pointer, PointerId,
};
use tactum_gesture::recognizer::{GestureRecognizer, MIN_POINTERS, MoveResult};

use crate::options::GestureOptions;
use crate::pointers::PointerTracker;

/// Interaction session binding one target element to the gesture engine.
#[derive(Clone, Debug)]
pub struct GestureSession<E> {
    target: E,
    options: GestureOptions,
    pointers: PointerTracker,
    recognizer: GestureRecognizer,
    interacting: bool,
}

impl<E> GestureSession<E> {
    /// Create a session for a target element with the given configuration.
    pub fn new(target: E, options: GestureOptions) -> Self {
        Self::with_delta_source(target, options, DeltaSource::default())
    }

    /// Create a session reading pointer positions from an explicit space.
    pub fn with_delta_source(target: E, options: GestureOptions, delta_source: DeltaSource) -> Self {
        Self {
            target,
            options,
            pointers: PointerTracker::new(),
            recognizer: GestureRecognizer::new(delta_source),
            interacting: false,
        }
    }

    /// The session's target element.
    pub fn target(&self) -> &E {
        &self.target
    }

    /// The session's configuration.
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Mutable access to the configuration (for example, to toggle `enabled`
    /// between gestures).
    pub fn options_mut(&mut self) -> &mut GestureOptions {
        &mut self.options
    }

    /// `true` while a gesture is actively interacting on this session.
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Number of live pointers.
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// The live pointers in first-contact order.
    pub fn pointers(&self) -> &[Pointer] {
        self.pointers.as_slice()
    }

    /// The most recently dispatched event, if any.
    pub fn prev_event(&self) -> Option<&GestureEvent> {
        self.recognizer.prev_event()
    }

    /// A pointer landed on the target.
    ///
    /// Tracks the contact and, when the session is enabled, idle, and not
    /// configured for manual start, runs the eligibility check and starts the
    /// gesture on a match.
    pub fn pointer_down(
        &mut self,
        pointer: Pointer,
        on_event: impl FnMut(GestureEventType, &GestureEvent),
    ) {
        self.pointers.down(pointer);
        if self.options.enabled && !self.options.manual_start {
            self.begin(on_event);
        }
    }

    /// Explicitly start the gesture (for `manual_start` configurations).
    ///
    /// Returns `true` if a gesture started; `false` when disabled, already
    /// interacting, or not eligible.
    pub fn start(&mut self, on_event: impl FnMut(GestureEventType, &GestureEvent)) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.begin(on_event)
    }

    /// A tracked pointer moved.
    ///
    /// `client` defaults to `page`. A move for a pointer this session does not
    /// track is ignored outright. While interacting, routes the fresh pointer
    /// set through the engine; only a freshly built move event is dispatched (a
    /// replayed previous event never is).
    pub fn pointer_move(
        &mut self,
        id: PointerId,
        page: Point,
        client: Option<Point>,
        mut on_event: impl FnMut(GestureEventType, &GestureEvent),
    ) {
        if !self.pointers.update(id, page, client) {
            return;
        }
        if !self.interacting {
            return;
        }
        if let Some(MoveResult::Moved(event)) = self.recognizer.update(self.pointers.as_slice()) {
            on_event(GestureEventType::Move, event);
        }
    }

    /// A pointer lifted.
    ///
    /// Unregisters the contact; when the live count drops below the gesture
    /// threshold mid-interaction, the gesture ends with [`EndReason::Release`].
    pub fn pointer_up(
        &mut self,
        id: PointerId,
        on_event: impl FnMut(GestureEventType, &GestureEvent),
    ) {
        self.pointers.up(id);
        self.end_if_starved(EndReason::Release, on_event);
    }

    /// A pointer was cancelled by the input device or platform.
    ///
    /// Like [`GestureSession::pointer_up`], but a resulting end event is tagged
    /// [`EndReason::Cancel`].
    pub fn pointer_cancel(
        &mut self,
        id: PointerId,
        on_event: impl FnMut(GestureEventType, &GestureEvent),
    ) {
        self.pointers.up(id);
        self.end_if_starved(EndReason::Cancel, on_event);
    }

    /// Unconditionally cancel the active gesture, if any.
    ///
    /// The live pointer list is left untouched; only the interaction ends.
    /// Returns `true` if a gesture was cancelled.
    pub fn stop(&mut self, on_event: impl FnMut(GestureEventType, &GestureEvent)) -> bool {
        if !self.interacting {
            return false;
        }
        self.finish(EndReason::Cancel, on_event)
    }

    /// Run the eligibility check and start the gesture on a match.
    fn begin(&mut self, mut on_event: impl FnMut(GestureEventType, &GestureEvent)) -> bool {
        if self.interacting {
            return false;
        }
        if GestureRecognizer::check(self.pointers.len()).is_none() {
            return false;
        }
        let Some(pair) = self.pointers.pair() else {
            return false;
        };
        // Mark before dispatch so listeners observe the session as interacting.
        self.interacting = true;
        let event = self.recognizer.start(pair);
        on_event(GestureEventType::Start, event);
        true
    }

    /// End the gesture when the pointer count has dropped below the threshold.
    fn end_if_starved(
        &mut self,
        reason: EndReason,
        on_event: impl FnMut(GestureEventType, &GestureEvent),
    ) {
        if self.interacting && self.pointers.len() < MIN_POINTERS {
            self.finish(reason, on_event);
        }
    }

    fn finish(
        &mut self,
        reason: EndReason,
        mut on_event: impl FnMut(GestureEventType, &GestureEvent),
    ) -> bool {
        self.interacting = false;
        match self.recognizer.end(reason) {
            Some(event) => {
                on_event(GestureEventType::End, &event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use tactum_gesture::event::GesturePhase;

    fn touch(id: u64, x: f64, y: f64) -> Pointer {
        Pointer::new(PointerId::new(id).unwrap(), Point::new(x, y))
    }

    fn pid(id: u64) -> PointerId {
        PointerId::new(id).unwrap()
    }

    fn sink(
        events: &mut Vec<(GestureEventType, GestureEvent)>,
    ) -> impl FnMut(GestureEventType, &GestureEvent) + '_ {
        |event_type, event| events.push((event_type, *event))
    }

    #[test]
    fn disabled_session_never_starts() {
        let mut session = GestureSession::new((), GestureOptions::default());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));

        assert!(events.is_empty());
        assert!(!session.is_interacting());
        // Pointers are still tracked even while recognition is off.
        assert_eq!(session.pointer_count(), 2);
    }

    #[test]
    fn second_pointer_starts_the_gesture() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        assert!(events.is_empty());

        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, GestureEventType::Start);
        assert_eq!(events[0].1.distance, 10.0);
        assert_eq!(events[0].1.ds, 0.0);
        assert!(session.is_interacting());
    }

    #[test]
    fn manual_start_suppresses_auto_start() {
        let mut session = GestureSession::new((), GestureOptions::manual());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        assert!(events.is_empty());
        assert!(!session.is_interacting());

        assert!(session.start(sink(&mut events)));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, GestureEventType::Start);
        assert!(session.is_interacting());

        // Starting again while interacting is refused.
        assert!(!session.start(sink(&mut events)));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn manual_start_requires_eligibility() {
        let mut session = GestureSession::new((), GestureOptions::manual());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        assert!(!session.start(sink(&mut events)));
        assert!(events.is_empty());
    }

    #[test]
    fn moves_flow_while_interacting() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        session.pointer_move(pid(2), Point::new(20.0, 0.0), None, sink(&mut events));

        assert_eq!(events.len(), 2);
        let (event_type, event) = events[1];
        assert_eq!(event_type, GestureEventType::Move);
        assert_eq!(event.scale, 2.0);
        assert_eq!(event.ds, 1.0);
    }

    #[test]
    fn moves_before_start_are_tracked_but_not_dispatched() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_move(pid(1), Point::new(5.0, 5.0), None, sink(&mut events));
        assert!(events.is_empty());

        // The refreshed position is what the eventual start sees.
        session.pointer_down(touch(2, 15.0, 5.0), sink(&mut events));
        assert_eq!(events[0].1.distance, 10.0);
    }

    #[test]
    fn losing_a_pointer_ends_with_release() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        session.pointer_move(pid(2), Point::new(20.0, 0.0), None, sink(&mut events));
        session.pointer_up(pid(1), sink(&mut events));

        let (event_type, event) = *events.last().unwrap();
        assert_eq!(event_type, GestureEventType::End);
        assert_eq!(event.phase, GesturePhase::End(EndReason::Release));
        // Geometry frozen at the last move.
        assert_eq!(event.distance, 20.0);
        assert_eq!(event.scale, 2.0);
        assert!(!session.is_interacting());
        assert_eq!(session.pointer_count(), 1);
    }

    #[test]
    fn platform_cancel_ends_with_cancel() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        session.pointer_cancel(pid(2), sink(&mut events));

        let (_, event) = *events.last().unwrap();
        assert_eq!(event.phase, GesturePhase::End(EndReason::Cancel));
    }

    #[test]
    fn a_third_finger_does_not_end_or_restart() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        session.pointer_down(touch(3, 50.0, 50.0), sink(&mut events));

        // Only the original start; the extra contact neither re-bids nor ends.
        assert_eq!(events.len(), 1);
        assert!(session.is_interacting());

        // Losing the third finger changes nothing either.
        session.pointer_up(pid(3), sink(&mut events));
        assert_eq!(events.len(), 1);
        assert!(session.is_interacting());
    }

    #[test]
    fn stop_cancels_without_touching_pointers() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));

        assert!(session.stop(sink(&mut events)));
        let (_, event) = *events.last().unwrap();
        assert_eq!(event.phase, GesturePhase::End(EndReason::Cancel));
        assert!(!session.is_interacting());
        assert_eq!(session.pointer_count(), 2);

        // Nothing active anymore.
        assert!(!session.stop(sink(&mut events)));
    }

    #[test]
    fn a_new_gesture_can_start_after_the_first_ends() {
        let mut session = GestureSession::new((), GestureOptions::enabled());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        session.pointer_move(pid(2), Point::new(40.0, 0.0), None, sink(&mut events));
        session.pointer_up(pid(2), sink(&mut events));
        assert!(!session.is_interacting());

        // A fresh second contact re-arms recognition with a fresh baseline.
        session.pointer_down(touch(4, 5.0, 0.0), sink(&mut events));
        let (event_type, event) = *events.last().unwrap();
        assert_eq!(event_type, GestureEventType::Start);
        assert_eq!(event.scale, 1.0);
        assert_eq!(event.ds, 0.0);
        assert_eq!(event.distance, 5.0);
    }

    #[test]
    fn enabling_mid_session_allows_the_next_contact_to_start() {
        let mut session = GestureSession::new((), GestureOptions::default());
        let mut events = Vec::new();

        session.pointer_down(touch(1, 0.0, 0.0), sink(&mut events));
        session.pointer_down(touch(2, 10.0, 0.0), sink(&mut events));
        assert!(events.is_empty());

        session.options_mut().enabled = true;
        session.pointer_down(touch(3, 20.0, 0.0), sink(&mut events));

        // The gesture starts on the two earliest contacts, not the newest.
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1.distance, 10.0);
    }
}

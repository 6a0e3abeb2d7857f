// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live pointer list for one interaction session.
//!
//! Pointers are kept in stable first-contact order, which is what makes the
//! "two driving touches" of a gesture well-defined: the pair is always the two
//! earliest contacts still alive, and a third finger landing mid-gesture does
//! not reshuffle them.

use kurbo::Point;
use smallvec::SmallVec;
use tactum_gesture::event::{Pointer, PointerId};

/// Ordered set of live pointers, keyed by [`PointerId`].
///
/// Inline capacity covers the common case (a gesture pair plus stray contacts)
/// without heap traffic.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    pointers: SmallVec<[Pointer; 4]>,
}

impl PointerTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live pointers.
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// `true` when no pointers are live.
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// All live pointers in first-contact order.
    pub fn as_slice(&self) -> &[Pointer] {
        &self.pointers
    }

    /// `true` when the given pointer is live.
    pub fn contains(&self, id: PointerId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a live pointer by id.
    pub fn get(&self, id: PointerId) -> Option<&Pointer> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// Record a pointer landing.
    ///
    /// A re-landing id refreshes the existing entry in place; its position in
    /// the contact order is preserved.
    pub fn down(&mut self, pointer: Pointer) {
        match self.pointers.iter_mut().find(|p| p.id == pointer.id) {
            Some(existing) => *existing = pointer,
            None => self.pointers.push(pointer),
        }
    }

    /// Reposition a live pointer. Returns `false` for an unknown id.
    ///
    /// `client` defaults to `page` when the embedder has a single coordinate
    /// space.
    pub fn update(&mut self, id: PointerId, page: Point, client: Option<Point>) -> bool {
        let Some(pointer) = self.pointers.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        pointer.page = page;
        pointer.client = client.unwrap_or(page);
        true
    }

    /// Remove a pointer that lifted or was cancelled. Returns `false` for an
    /// unknown id.
    pub fn up(&mut self, id: PointerId) -> bool {
        let Some(index) = self.pointers.iter().position(|p| p.id == id) else {
            return false;
        };
        self.pointers.remove(index);
        true
    }

    /// Drop all live pointers.
    pub fn clear(&mut self) {
        self.pointers.clear();
    }

    /// The two earliest live contacts, when at least two exist.
    pub fn pair(&self) -> Option<[Pointer; 2]> {
        match self.pointers.as_slice() {
            [a, b, ..] => Some([*a, *b]),
            _ => None,
        }
    }
}

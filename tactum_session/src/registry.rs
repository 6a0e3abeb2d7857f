// Copyright 2026 the Tactum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element configuration store and registration surface.
//!
//! A [`GestureRegistry`] is where a consumer attaches the gesture capability to
//! elements: store options under an element key, flip the enable flag, and mint
//! [`crate::session::GestureSession`]s carrying the element's configuration.
//! Elements without an entry read as the (disabled) defaults.
//!
//! ```rust
//! use tactum_session::options::GestureOptions;
//! use tactum_session::registry::GestureRegistry;
//!
//! let mut registry: GestureRegistry<&str> = GestureRegistry::new();
//!
//! // Attach the capability with explicit options...
//! registry.gesturable("canvas", GestureOptions::enabled());
//! assert!(registry.is_gesturable(&"canvas"));
//!
//! // ...or toggle the flag alone, keeping other options at their defaults.
//! registry.set_enabled("sidebar", true);
//! registry.set_enabled("sidebar", false);
//! assert!(!registry.is_gesturable(&"sidebar"));
//!
//! // Unregistered elements read as defaults.
//! assert_eq!(registry.options(&"toolbar"), GestureOptions::default());
//! ```

use core::hash::Hash;
use hashbrown::HashMap;
use tactum_gesture::event::DeltaSource;

use crate::options::GestureOptions;
use crate::session::GestureSession;

/// Per-element store of [`GestureOptions`], keyed by an application element type.
#[derive(Clone, Debug)]
pub struct GestureRegistry<E> {
    options: HashMap<E, GestureOptions>,
}

impl<E> Default for GestureRegistry<E> {
    fn default() -> Self {
        Self {
            options: HashMap::new(),
        }
    }
}

impl<E: Eq + Hash + Clone> GestureRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements with stored configuration.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// `true` when no element has stored configuration.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Attach the gesture capability to an element with the given options.
    ///
    /// Overwrites any previous configuration for the element. Chainable so
    /// several elements can be registered in one statement.
    pub fn gesturable(&mut self, element: E, options: GestureOptions) -> &mut Self {
        self.options.insert(element, options);
        self
    }

    /// Flip only the enable flag, creating a default entry if none exists.
    pub fn set_enabled(&mut self, element: E, enabled: bool) {
        self.options.entry(element).or_default().enabled = enabled;
    }

    /// The element's configuration, or the defaults when none is stored.
    pub fn options(&self, element: &E) -> GestureOptions {
        self.options.get(element).copied().unwrap_or_default()
    }

    /// `true` when the element has gestures enabled.
    pub fn is_gesturable(&self, element: &E) -> bool {
        self.options(element).enabled
    }

    /// Remove an element's configuration, returning it if present.
    pub fn unregister(&mut self, element: &E) -> Option<GestureOptions> {
        self.options.remove(element)
    }

    /// Mint an interaction session for an element, carrying its configuration.
    pub fn session(&self, element: E) -> GestureSession<E> {
        let options = self.options(&element);
        GestureSession::new(element, options)
    }

    /// Like [`GestureRegistry::session`], with an explicit coordinate space.
    pub fn session_with_delta_source(
        &self,
        element: E,
        delta_source: DeltaSource,
    ) -> GestureSession<E> {
        let options = self.options(&element);
        GestureSession::with_delta_source(element, options, delta_source)
    }
}

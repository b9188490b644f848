// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passive layout invalidation from a resized host container.
//!
//! The watcher observes an ancestor container of the frame, never the frame
//! itself: the frame's size is an output of the fit, and observing it would
//! feed the fit back into itself.
//!
//! ## Usage
//!
//! 1) Wrap the host's observer with [`ResizeWatcher::observe`].
//! 2) Forward each size report to [`ResizeWatcher::on_resize`]; hand the
//!    returned event to [`Canvas::handle`](crate::Canvas::handle).
//! 3) Call [`ResizeWatcher::dispose`] (or drop the watcher) on teardown.
//!
//! ```
//! use kurbo::Size;
//! use easel_canvas::resize::{ResizeObserver, ResizeWatcher};
//!
//! #[derive(Default)]
//! struct BodyObserver {
//!     connected: bool,
//! }
//!
//! impl ResizeObserver for BodyObserver {
//!     fn observe(&mut self) {
//!         self.connected = true;
//!     }
//!
//!     fn disconnect(&mut self) {
//!         self.connected = false;
//!     }
//! }
//!
//! let mut watcher = ResizeWatcher::observe(BodyObserver::default());
//! let event = watcher.on_resize(Size::new(1024.0, 768.0)).unwrap();
//! assert!(!event.animate());
//!
//! // Same size again: nothing to do.
//! assert!(watcher.on_resize(Size::new(1024.0, 768.0)).is_none());
//!
//! watcher.dispose();
//! assert!(!watcher.observer().connected);
//! assert!(watcher.on_resize(Size::new(800.0, 600.0)).is_none());
//! ```

use kurbo::Size;

use crate::event::LayoutEvent;

/// A host backend that reports size changes of one container.
pub trait ResizeObserver {
    /// Starts observing the container.
    fn observe(&mut self);

    /// Stops observing; no further reports are delivered.
    fn disconnect(&mut self);
}

/// Turns container size reports into passive [`LayoutEvent`]s.
#[derive(Debug)]
pub struct ResizeWatcher<O: ResizeObserver> {
    observer: O,
    last_size: Option<Size>,
    active: bool,
}

impl<O: ResizeObserver> ResizeWatcher<O> {
    /// Starts observing through `observer`.
    pub fn observe(mut observer: O) -> Self {
        observer.observe();
        Self {
            observer,
            last_size: None,
            active: true,
        }
    }

    /// Handles a size report.
    ///
    /// Returns a non‑animated [`LayoutEvent`] when the size actually changed.
    /// Repeated reports of the same size, and every report after
    /// [`ResizeWatcher::dispose`], return `None`.
    pub fn on_resize(&mut self, size: Size) -> Option<LayoutEvent> {
        if !self.active {
            tracing::trace!(?size, "resize reported after dispose, dropping");
            return None;
        }
        if self.last_size == Some(size) {
            return None;
        }
        self.last_size = Some(size);
        Some(LayoutEvent::container_resized())
    }

    /// The last size reported while active.
    #[must_use]
    pub fn last_size(&self) -> Option<Size> {
        self.last_size
    }

    /// Returns `true` until the watcher is disposed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stops observing. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.active {
            self.active = false;
            self.observer.disconnect();
        }
    }

    /// The host observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<O: ResizeObserver> Drop for ResizeWatcher<O> {
    fn drop(&mut self) {
        self.dispose();
    }
}

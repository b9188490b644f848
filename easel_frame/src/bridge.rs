// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::geometry::FrameGeometry;
use crate::styles::StyleTracker;
use crate::surface::{Surface, SurfaceError};

type ReadyCallback = Box<dyn FnOnce()>;

/// Lifecycle of the isolated surface as seen by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// The isolated document exists; its stylesheets are still loading.
    Loading,
    /// Stylesheets have loaded; interactive affordances may be shown.
    Ready,
    /// The isolated document could not be created. Mounting is a no‑op and the
    /// frame never becomes ready.
    Degraded(SurfaceError),
}

/// Result of [`FrameBridge::mount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// The content was handed to the surface.
    Mounted,
    /// The surface is degraded; the content was dropped.
    Skipped,
}

/// Owns an isolated rendering surface and reports when it is ready.
///
/// The bridge is the boundary between the host editor and the edited content:
/// - Content crosses it as owned snapshots ([`FrameBridge::mount`]); nothing is
///   shared by reference.
/// - Readiness is one‑shot. Callbacks registered with
///   [`FrameBridge::on_styles_loaded`] run exactly once, the first time the
///   isolated document's stylesheets have finished loading.
/// - A surface that fails to initialize leaves the bridge
///   [degraded](FrameStatus::Degraded) instead of failing the host.
/// - [`FrameGeometry`] describes where the frame sits in the host so pointer
///   and selection geometry can be translated across the boundary.
pub struct FrameBridge<S: Surface> {
    surface: S,
    status: FrameStatus,
    styles: StyleTracker,
    ready_callbacks: Vec<ReadyCallback>,
    geometry: FrameGeometry,
    mount_count: u64,
}

impl<S: Surface> FrameBridge<S> {
    /// Creates the bridge and initializes the isolated document.
    ///
    /// Initialization failures are logged and recorded as
    /// [`FrameStatus::Degraded`]; they are never returned to the caller.
    pub fn new(mut surface: S) -> Self {
        let status = match surface.initialize() {
            Ok(()) => FrameStatus::Loading,
            Err(err) => {
                tracing::warn!(error = %err, "isolated frame unavailable, content will not be mounted");
                FrameStatus::Degraded(err)
            }
        };
        Self {
            surface,
            status,
            styles: StyleTracker::default(),
            ready_callbacks: Vec::new(),
            geometry: FrameGeometry::IDENTITY,
            mount_count: 0,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &FrameStatus {
        &self.status
    }

    /// Returns `true` once the isolated stylesheets have loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == FrameStatus::Ready
    }

    /// Returns `true` if the isolated document could not be created.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self.status, FrameStatus::Degraded(_))
    }

    /// Mounts a content snapshot into the isolated document.
    pub fn mount(&mut self, content: S::Content) -> MountOutcome {
        if self.is_degraded() {
            tracing::trace!("frame degraded, skipping mount");
            return MountOutcome::Skipped;
        }
        self.surface.mount(content);
        self.mount_count += 1;
        MountOutcome::Mounted
    }

    /// Number of snapshots handed to the surface so far.
    #[must_use]
    pub fn mount_count(&self) -> u64 {
        self.mount_count
    }

    /// Registers a callback for the one‑shot "styles loaded" signal.
    ///
    /// If the frame is already ready the callback runs immediately. On a
    /// degraded frame it is dropped without running.
    pub fn on_styles_loaded(&mut self, callback: impl FnOnce() + 'static) {
        match self.status {
            FrameStatus::Ready => callback(),
            FrameStatus::Loading => self.ready_callbacks.push(Box::new(callback)),
            FrameStatus::Degraded(_) => {}
        }
    }

    /// Records a stylesheet that is being mirrored into the isolated document.
    ///
    /// Stylesheets registered after the frame became ready are ignored:
    /// readiness never reverts.
    pub fn register_stylesheet(&mut self, href: &str) {
        if self.status != FrameStatus::Loading {
            tracing::trace!(href, "ignoring stylesheet registration outside loading");
            return;
        }
        if !self.styles.register(href) {
            tracing::trace!(href, "stylesheet already pending");
        }
    }

    /// Signals that the host has registered every stylesheet it mirrors.
    ///
    /// Returns `true` if this made the frame ready.
    pub fn finish_stylesheet_collection(&mut self) -> bool {
        self.styles.finish_collection();
        self.settle()
    }

    /// Marks a mirrored stylesheet as loaded.
    ///
    /// Returns `true` if this made the frame ready.
    pub fn stylesheet_loaded(&mut self, href: &str) -> bool {
        if !self.styles.loaded(href) {
            tracing::trace!(href, "load reported for unknown stylesheet");
        }
        self.settle()
    }

    /// Marks a mirrored stylesheet as failed.
    ///
    /// A failed stylesheet no longer blocks readiness. Returns `true` if this
    /// made the frame ready.
    pub fn stylesheet_failed(&mut self, href: &str) -> bool {
        if self.styles.failed(href) {
            tracing::warn!(href, "stylesheet failed to load in isolated frame");
        }
        self.settle()
    }

    /// Stylesheets that failed to load, in report order.
    #[must_use]
    pub fn failed_stylesheets(&self) -> &[String] {
        self.styles.failed_hrefs()
    }

    /// Number of registered stylesheets still loading.
    #[must_use]
    pub fn pending_stylesheets(&self) -> usize {
        self.styles.pending_len()
    }

    /// Direct "styles loaded" signal from hosts that track loading themselves.
    ///
    /// Returns `true` if this made the frame ready.
    pub fn styles_loaded(&mut self) -> bool {
        self.become_ready()
    }

    /// Current placement of the frame in the host.
    #[must_use]
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Updates the placement of the frame in the host.
    pub fn set_geometry(&mut self, geometry: FrameGeometry) {
        self.geometry = geometry;
    }

    /// The host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn settle(&mut self) -> bool {
        if self.styles.is_settled() {
            self.become_ready()
        } else {
            false
        }
    }

    fn become_ready(&mut self) -> bool {
        if self.status != FrameStatus::Loading {
            return false;
        }
        self.status = FrameStatus::Ready;
        tracing::debug!(
            callbacks = self.ready_callbacks.len(),
            failed = self.styles.failed_hrefs().len(),
            "isolated frame styles loaded"
        );
        for callback in core::mem::take(&mut self.ready_callbacks) {
            callback();
        }
        true
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for FrameBridge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBridge")
            .field("surface", &self.surface)
            .field("status", &self.status)
            .field("styles", &self.styles)
            .field("ready_callbacks", &self.ready_callbacks.len())
            .field("geometry", &self.geometry)
            .field("mount_count", &self.mount_count)
            .finish()
    }
}

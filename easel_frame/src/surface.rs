// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Why an isolated rendering surface could not be created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The host environment does not allow nested rendering contexts.
    #[error("host blocks nested rendering contexts")]
    Blocked,
    /// The nested context exists but its document could not be reached.
    #[error("isolated document is unavailable")]
    DocumentUnavailable,
    /// Any other backend specific failure.
    #[error("surface initialization failed: {0}")]
    Backend(String),
}

/// A host backend for an isolated rendering surface.
///
/// Implementations own a nested rendering context with its own style and
/// script scope (for example an iframe document). The bridge calls
/// [`Surface::initialize`] once, then hands over content snapshots through
/// [`Surface::mount`].
pub trait Surface {
    /// The content snapshot type the surface can render.
    type Content;

    /// Creates the isolated document.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when the host refuses or fails to create the
    /// nested context. The bridge treats this as a degraded state.
    fn initialize(&mut self) -> Result<(), SurfaceError>;

    /// Renders `content` into the isolated document, replacing what was there.
    fn mount(&mut self, content: Self::Content);
}

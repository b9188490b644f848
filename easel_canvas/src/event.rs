// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_zoom::ViewportOption;

/// What caused a layout‑affecting event.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutCause {
    /// The canvas was mounted.
    Mount,
    /// A sidebar was shown or hidden.
    SidebarsChanged,
    /// The observed host container changed size.
    ContainerResized,
    /// The user picked a viewport in the controls.
    ViewportSelected(ViewportOption),
    /// The user picked a zoom level in the controls.
    ZoomSelected(f64),
}

impl LayoutCause {
    /// Returns `true` for causes that come from explicit user intent.
    ///
    /// Only these animate; environment driven changes apply instantly.
    #[must_use]
    pub fn is_user_intent(&self) -> bool {
        matches!(self, Self::ViewportSelected(_) | Self::ZoomSelected(_))
    }
}

/// A layout‑affecting event, tagged with whether the resulting transform
/// change should animate.
///
/// The `animate` flag is derived from the cause when the event is built, so
/// the canvas never guesses animation intent from where it was called.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEvent {
    cause: LayoutCause,
    animate: bool,
}

impl LayoutEvent {
    /// Tags `cause` with its animation class.
    #[must_use]
    pub fn new(cause: LayoutCause) -> Self {
        let animate = cause.is_user_intent();
        Self { cause, animate }
    }

    /// The canvas was mounted.
    #[must_use]
    pub fn mount() -> Self {
        Self::new(LayoutCause::Mount)
    }

    /// A sidebar was shown or hidden.
    #[must_use]
    pub fn sidebars_changed() -> Self {
        Self::new(LayoutCause::SidebarsChanged)
    }

    /// The observed host container changed size.
    #[must_use]
    pub fn container_resized() -> Self {
        Self::new(LayoutCause::ContainerResized)
    }

    /// The user picked a viewport.
    #[must_use]
    pub fn viewport_selected(option: ViewportOption) -> Self {
        Self::new(LayoutCause::ViewportSelected(option))
    }

    /// The user picked a zoom level.
    #[must_use]
    pub fn zoom_selected(zoom: f64) -> Self {
        Self::new(LayoutCause::ZoomSelected(zoom))
    }

    /// What caused the event.
    #[must_use]
    pub fn cause(&self) -> &LayoutCause {
        &self.cause
    }

    /// Whether the resulting transform change should animate.
    #[must_use]
    pub fn animate(&self) -> bool {
        self.animate
    }
}

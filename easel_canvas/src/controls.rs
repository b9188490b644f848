// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport and zoom controls: a thin layer that turns control interactions
//! into user intent.

use alloc::vec::Vec;

use easel_zoom::{
    Viewport, ViewportOption, ZoomConfig, ZoomDirection, ZoomLadder, ZoomOption,
    default_viewports,
};

use crate::event::LayoutEvent;
use crate::state::UiLayoutState;

/// A user intent produced by the controls.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewportIntent {
    /// Switch to another virtual device viewport.
    Viewport(ViewportOption),
    /// Use a specific zoom.
    Zoom(f64),
}

impl ViewportIntent {
    /// The animated layout event for this intent.
    #[must_use]
    pub fn into_event(self) -> LayoutEvent {
        match self {
            Self::Viewport(option) => LayoutEvent::viewport_selected(option),
            Self::Zoom(zoom) => LayoutEvent::zoom_selected(zoom),
        }
    }
}

impl From<ViewportIntent> for LayoutEvent {
    fn from(intent: ViewportIntent) -> Self {
        intent.into_event()
    }
}

/// Presentation model for the viewport/zoom toolbar.
///
/// The controller owns the list of selectable viewports and the zoom steps;
/// it does no layout math of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportController {
    options: Vec<ViewportOption>,
    ladder: ZoomLadder,
}

impl ViewportController {
    /// Creates a controller. An empty `options` list uses the stock viewports.
    #[must_use]
    pub fn new(options: Vec<ViewportOption>, ladder: ZoomLadder) -> Self {
        let options = if options.is_empty() {
            default_viewports()
        } else {
            options
        };
        Self { options, ladder }
    }

    /// Creates a controller from the options stored in the UI state.
    #[must_use]
    pub fn from_ui(ui: &UiLayoutState, ladder: ZoomLadder) -> Self {
        Self::new(ui.viewports.options.clone(), ladder)
    }

    /// Whether the controls should be shown.
    #[must_use]
    pub fn is_visible(ui: &UiLayoutState) -> bool {
        ui.viewports.controls_visible
    }

    /// The selectable viewports.
    #[must_use]
    pub fn options(&self) -> &[ViewportOption] {
        &self.options
    }

    /// Index of the option matching `current`, if any.
    #[must_use]
    pub fn active_index(&self, current: &Viewport) -> Option<usize> {
        self.options.iter().position(|o| o.selects(current))
    }

    /// Intent for selecting the option at `index`.
    #[must_use]
    pub fn select(&self, index: usize) -> Option<ViewportIntent> {
        self.options
            .get(index)
            .cloned()
            .map(ViewportIntent::Viewport)
    }

    /// Zoom entries for a selector, with the auto‑fit zoom merged in.
    #[must_use]
    pub fn zoom_options(&self, config: &ZoomConfig) -> Vec<ZoomOption> {
        self.ladder.options(config.auto_zoom())
    }

    /// Intent for a zoom picked from the selector.
    #[must_use]
    pub fn choose_zoom(&self, zoom: f64) -> ViewportIntent {
        ViewportIntent::Zoom(zoom)
    }

    /// Intent for the zoom‑in button, or `None` at the largest step.
    #[must_use]
    pub fn zoom_in(&self, config: &ZoomConfig) -> Option<ViewportIntent> {
        self.step(config, ZoomDirection::In)
    }

    /// Intent for the zoom‑out button, or `None` at the smallest step.
    #[must_use]
    pub fn zoom_out(&self, config: &ZoomConfig) -> Option<ViewportIntent> {
        self.step(config, ZoomDirection::Out)
    }

    fn step(&self, config: &ZoomConfig, direction: ZoomDirection) -> Option<ViewportIntent> {
        let current = config.zoom();
        let next = self.ladder.step(current, config.auto_zoom(), direction);
        (next != current).then_some(ViewportIntent::Zoom(next))
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(Vec::new(), ZoomLadder::default())
    }
}

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slice of editor UI state the canvas reads, and the actions it requests.

use alloc::string::String;
use alloc::vec::Vec;

use easel_zoom::{Viewport, ViewportOption};

/// Identifies the selected item: its index within a drop zone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSelector {
    /// Index of the item within its zone.
    pub index: usize,
    /// Zone compound id; `None` is the root zone.
    pub zone: Option<String>,
}

/// Viewport related UI state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportsState {
    /// The active virtual device viewport.
    pub current: Viewport,
    /// Viewports offered by the controls. Empty means the stock set.
    pub options: Vec<ViewportOption>,
    /// Whether the viewport controls are shown.
    pub controls_visible: bool,
}

impl Default for ViewportsState {
    fn default() -> Self {
        Self {
            current: Viewport::default(),
            options: Vec::new(),
            controls_visible: true,
        }
    }
}

/// The part of the editor UI state that affects the canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UiLayoutState {
    /// Viewport selection and controls.
    pub viewports: ViewportsState,
    /// Whether the left sidebar takes up space next to the frame.
    pub left_side_bar_visible: bool,
    /// Whether the right sidebar takes up space next to the frame.
    pub right_side_bar_visible: bool,
    /// The active selection / editor cursor.
    pub item_selector: Option<ItemSelector>,
}

impl UiLayoutState {
    /// The sidebar flags as a pair; changing either invalidates the fit.
    #[must_use]
    pub fn sidebars(&self) -> (bool, bool) {
        (self.left_side_bar_visible, self.right_side_bar_visible)
    }
}

impl Default for UiLayoutState {
    fn default() -> Self {
        Self {
            viewports: ViewportsState::default(),
            left_side_bar_visible: true,
            right_side_bar_visible: true,
            item_selector: None,
        }
    }
}

/// A partial update of [`UiLayoutState`]; `None` fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiPatch {
    /// Replacement viewport state.
    pub viewports: Option<ViewportsState>,
    /// Replacement selection; `Some(None)` clears it.
    pub item_selector: Option<Option<ItemSelector>>,
    /// Replacement left sidebar flag.
    pub left_side_bar_visible: Option<bool>,
    /// Replacement right sidebar flag.
    pub right_side_bar_visible: Option<bool>,
}

impl UiPatch {
    /// A patch that clears the selection.
    #[must_use]
    pub fn clear_selection() -> Self {
        Self {
            item_selector: Some(None),
            ..Self::default()
        }
    }

    /// A patch that replaces the viewport state.
    #[must_use]
    pub fn viewports(viewports: ViewportsState) -> Self {
        Self {
            viewports: Some(viewports),
            ..Self::default()
        }
    }

    /// Applies the patch in place.
    pub fn apply(self, ui: &mut UiLayoutState) {
        if let Some(viewports) = self.viewports {
            ui.viewports = viewports;
        }
        if let Some(item_selector) = self.item_selector {
            ui.item_selector = item_selector;
        }
        if let Some(left) = self.left_side_bar_visible {
            ui.left_side_bar_visible = left;
        }
        if let Some(right) = self.right_side_bar_visible {
            ui.right_side_bar_visible = right;
        }
    }
}

/// A state change the canvas asks the editor's reducer to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    /// Merge a patch into the UI state.
    SetUi {
        /// The fields to replace.
        ui: UiPatch,
        /// Whether the change gets its own undo history entry.
        record_history: bool,
    },
}

/// The editor's action sink.
///
/// The canvas never mutates document or UI state itself; it describes the
/// change and leaves applying it to the owner of the state. Any
/// `FnMut(UiAction)` closure is a dispatcher.
pub trait Dispatch {
    /// Requests a state change.
    fn dispatch(&mut self, action: UiAction);
}

impl<F: FnMut(UiAction)> Dispatch for F {
    fn dispatch(&mut self, action: UiAction) {
        self(action);
    }
}

#[cfg(test)]
mod tests {
    use easel_zoom::Viewport;

    use super::*;

    #[test]
    fn default_state_shows_everything() {
        let ui = UiLayoutState::default();
        assert_eq!(ui.sidebars(), (true, true));
        assert!(ui.viewports.controls_visible);
        assert!(ui.viewports.current.height.is_auto());
        assert_eq!(ui.viewports.current.width, 360.0);
        assert!(ui.item_selector.is_none());
    }

    #[test]
    fn patch_only_touches_set_fields() {
        let mut ui = UiLayoutState {
            item_selector: Some(ItemSelector {
                index: 2,
                zone: None,
            }),
            ..UiLayoutState::default()
        };
        UiPatch::clear_selection().apply(&mut ui);
        assert!(ui.item_selector.is_none());
        assert_eq!(ui.sidebars(), (true, true));

        let viewports = ViewportsState {
            current: Viewport::auto(1280.0),
            ..ViewportsState::default()
        };
        UiPatch::viewports(viewports.clone()).apply(&mut ui);
        assert_eq!(ui.viewports, viewports);
    }

    #[test]
    fn closures_dispatch() {
        let mut seen = alloc::vec::Vec::new();
        let mut sink = |action: UiAction| seen.push(action);
        sink.dispatch(UiAction::SetUi {
            ui: UiPatch::clear_selection(),
            record_history: true,
        });
        assert_eq!(seen.len(), 1);
    }
}

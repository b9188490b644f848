// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_canvas --heading-base-level=0

//! Easel Canvas: the rendering core of a page editor.
//!
//! The canvas shows the page being edited at the size of a chosen virtual
//! device, scaled to whatever room the editor chrome leaves for it. This crate
//! ties the pieces together:
//!
//! - [`Canvas`]: owns the fit transform ([`ZoomConfig`]) and reconciles
//!   environment changes, viewport selection and zoom selection into it. It
//!   decides whether a change animates and produces the [`RootStyle`] the
//!   host applies to the content root.
//! - [`resize::ResizeWatcher`]: turns host container resizes into passive
//!   layout events.
//! - [`ViewportController`]: the viewport and zoom toolbar model.
//! - [`Preview`]: mounts the document root inside an isolated
//!   [`FrameBridge`](easel_frame::FrameBridge).
//!
//! The crate never touches a real layout engine. Hosts measure with their own
//! tools and hand the numbers in through [`FrameMeasure`], and the canvas
//! requests UI state changes through [`Dispatch`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use easel_canvas::{Canvas, LayoutEvent, UiAction, UiLayoutState};
//! use easel_zoom::Viewport;
//!
//! let mut ui = UiLayoutState::default();
//! ui.viewports.current = Viewport::auto(375.0);
//!
//! // The frame is 320px wide; the host measured it after layout.
//! let frame = Size::new(320.0, 600.0);
//! let mut canvas = Canvas::default();
//! canvas.mount(&ui, &frame);
//! assert!((canvas.zoom_config().zoom() - 320.0 / 375.0).abs() < 1e-9);
//! assert!(!canvas.show_transition());
//!
//! // Picking 100% pins the zoom and animates.
//! let mut actions = Vec::new();
//! let mut dispatch = |action: UiAction| actions.push(action);
//! canvas
//!     .handle(LayoutEvent::zoom_selected(1.0), &ui, &frame, &mut dispatch)
//!     .unwrap();
//! assert_eq!(canvas.zoom_config().zoom(), 1.0);
//! assert!(canvas.root_style(&ui).transition.is_some());
//! ```
//!
//! ## Layout passes
//!
//! Measurements are never read in the same update that changed the layout.
//! Hosts call [`Canvas::handle`] once the change behind an event is laid out,
//! and [`Canvas::after_layout`] once the new transform is laid out so the
//! auto height can be locked in.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod canvas;
mod controls;
mod error;
mod event;
mod options;
mod preview;
pub mod resize;
mod state;

pub use canvas::{Canvas, EditorStatus, FrameMeasure, RootStyle};
pub use controls::{ViewportController, ViewportIntent};
pub use error::CanvasError;
pub use event::{LayoutCause, LayoutEvent};
pub use options::{CanvasOptions, Easing, RefitPolicy, TransitionSpec};
pub use preview::{
    Overrides, PREVIEW_FRAME_ID, PassThrough, Preview, PreviewWrapper, ROOT_DROPPABLE_ID,
    RootDropTarget, RootRenderer,
};
pub use state::{Dispatch, ItemSelector, UiAction, UiLayoutState, UiPatch, ViewportsState};

pub use easel_zoom::ZoomConfig;

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_zoom --heading-base-level=0

//! Easel Zoom: virtual device viewports and the fit transform.
//!
//! This crate provides the small, headless model an editor canvas uses to show
//! edited content at a chosen virtual device size, whatever space the host
//! editor actually has. It focuses on:
//! - Virtual device viewports ([`Viewport`], [`ViewportOption`]) with fixed or
//!   content‑derived ("auto") height.
//! - The active fit transform ([`ZoomConfig`]).
//! - The pure fit computation ([`compute_zoom_config`]) and the post‑layout
//!   height lock‑in ([`lock_root_height`]).
//! - Discrete zoom steps for zoom controls ([`ZoomLadder`]).
//!
//! It does **not** measure anything or own any rendering backend. Callers are
//! expected to:
//! - Measure the frame's content box with whatever layout system they use.
//! - Decide when a fit should replace the active zoom ([`ZoomMode`]).
//! - Apply the resulting scale to their content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use easel_zoom::{Viewport, ZoomConfig, ZoomMode, compute_zoom_config, lock_root_height};
//!
//! // A phone-sized viewport in a 320px wide frame.
//! let viewport = Viewport::auto(375.0);
//! let config = compute_zoom_config(
//!     viewport,
//!     Size::new(320.0, 0.0),
//!     ZoomConfig::default(),
//!     ZoomMode::AutoFit,
//! );
//! assert!(config.zoom() < 1.0);
//!
//! // After the scale is applied and the content laid out, pin the height.
//! let config = lock_root_height(config, 512.0);
//! assert!((config.root_height() * config.zoom() - 512.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Auto‑fit only ever shrinks content; it never scales above 100%.
//! - A frame that is not measured yet leaves the previous config in place
//!   rather than producing a zero or infinite scale.
//! - The auto height is a cache derived from a measurement, so it lives next
//!   to the zoom it was measured at.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
pub mod fit;
mod ladder;
mod viewport;

pub use config::{ZoomConfig, is_valid_zoom};
pub use fit::{ZoomMode, compute_zoom_config, lock_root_height};
pub use ladder::{DEFAULT_ZOOM_STEPS, ZoomDirection, ZoomLadder, ZoomOption};
pub use viewport::{Viewport, ViewportHeight, ViewportOption, default_viewports};

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_frame --heading-base-level=0

//! Easel Frame: a bridge into an isolated rendering surface.
//!
//! Edited content is rendered inside a nested document with its own style and
//! script scope, so the content's styles cannot leak into the editor chrome and
//! the other way round. This crate models the host side of that boundary:
//!
//! - [`Surface`]: the seam a host backend implements (for example around an
//!   iframe) to create the isolated document and render content into it.
//! - [`FrameBridge`]: owns a surface, mounts content snapshots, tracks the
//!   stylesheets mirrored into the isolated document and fires a one‑shot
//!   "styles loaded" signal.
//! - [`FrameGeometry`]: the frame's offset and scale inside the host, with
//!   pure conversions between host and frame coordinates.
//!
//! A surface that cannot be created puts the bridge in a degraded state:
//! mounting becomes a no‑op and the frame reports "not ready" forever. Nothing
//! is propagated into the host's render path.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_frame::{FrameBridge, MountOutcome, Surface, SurfaceError};
//!
//! #[derive(Default)]
//! struct Iframe {
//!     html: String,
//! }
//!
//! impl Surface for Iframe {
//!     type Content = String;
//!
//!     fn initialize(&mut self) -> Result<(), SurfaceError> {
//!         Ok(())
//!     }
//!
//!     fn mount(&mut self, content: String) {
//!         self.html = content;
//!     }
//! }
//!
//! let mut bridge = FrameBridge::new(Iframe::default());
//! assert_eq!(bridge.mount("<main></main>".to_string()), MountOutcome::Mounted);
//!
//! bridge.register_stylesheet("/editor.css");
//! bridge.finish_stylesheet_collection();
//! assert!(!bridge.is_ready());
//!
//! bridge.stylesheet_loaded("/editor.css");
//! assert!(bridge.is_ready());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod bridge;
mod geometry;
mod styles;
mod surface;

pub use bridge::{FrameBridge, FrameStatus, MountOutcome};
pub use geometry::FrameGeometry;
pub use surface::{Surface, SurfaceError};

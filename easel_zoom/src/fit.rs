// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit computation: derive a [`ZoomConfig`] from a viewport and a measured frame box.

use kurbo::Size;

use crate::config::ZoomConfig;
use crate::viewport::Viewport;

/// Upper bound for the auto‑fit zoom: content is only ever shrunk to fit.
pub const MAX_AUTO_ZOOM: f64 = 1.0;

/// What the caller wants done with the active zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Replace the active zoom with the auto‑fit zoom.
    #[default]
    AutoFit,
    /// Keep the active zoom; only refresh the auto‑fit value.
    Pinned,
}

/// Computes the fit transform for `target` inside a frame content box.
///
/// - `frame_box` is the measured content box of the frame (its own border and
///   padding excluded).
/// - `auto_zoom` is always recomputed as `min(frame_box.width / target.width, 1)`.
/// - With [`ZoomMode::AutoFit`] the active zoom becomes `auto_zoom`; with
///   [`ZoomMode::Pinned`] it passes through from `previous`.
/// - `root_height` is carried over untouched. In auto height mode it depends on
///   a measurement taken after the transform is applied; see [`lock_root_height`].
///
/// If the frame is not measured yet (zero width) or any input is degenerate,
/// `previous` is returned unchanged; the caller retries on the next layout pass.
///
/// ```
/// use kurbo::Size;
/// use easel_zoom::{Viewport, ZoomConfig, ZoomMode, compute_zoom_config};
///
/// let config = compute_zoom_config(
///     Viewport::auto(375.0),
///     Size::new(320.0, 0.0),
///     ZoomConfig::default(),
///     ZoomMode::AutoFit,
/// );
/// assert_eq!(config.zoom(), 320.0 / 375.0);
/// ```
#[must_use]
pub fn compute_zoom_config(
    target: Viewport,
    frame_box: Size,
    previous: ZoomConfig,
    mode: ZoomMode,
) -> ZoomConfig {
    let frame_width = frame_box.width;
    if !(frame_width.is_finite() && frame_width > 0.0) || !target.is_measurable() {
        tracing::trace!(
            frame_width,
            viewport_width = target.width,
            "frame or viewport not measurable, keeping previous zoom config"
        );
        return previous;
    }

    let auto_zoom = (frame_width / target.width).min(MAX_AUTO_ZOOM);
    let zoom = match mode {
        ZoomMode::AutoFit => auto_zoom,
        ZoomMode::Pinned => previous.zoom(),
    };
    tracing::debug!(
        zoom,
        auto_zoom,
        frame_width,
        viewport_width = target.width,
        ?mode,
        "computed zoom config"
    );
    ZoomConfig::from_parts(zoom, auto_zoom, previous.root_height())
}

/// Height lock‑in: pins the unscaled root height from a post‑layout measurement.
///
/// `measured_height` is the rendered (scaled) height of the frame content read
/// back after the current zoom was applied. The returned config stores
/// `measured_height / zoom`. Measurements that are negative or not finite leave
/// `config` unchanged.
#[must_use]
pub fn lock_root_height(config: ZoomConfig, measured_height: f64) -> ZoomConfig {
    if !(measured_height.is_finite() && measured_height >= 0.0) {
        tracing::trace!(measured_height, "ignoring unusable height measurement");
        return config;
    }
    let root_height = measured_height / config.zoom();
    tracing::debug!(
        root_height,
        measured_height,
        zoom = config.zoom(),
        "locked root height"
    );
    ZoomConfig::from_parts(config.zoom(), config.auto_zoom(), root_height)
}

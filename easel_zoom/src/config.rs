// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::viewport::{Viewport, ViewportHeight};

/// The scale/fit transform applied to the edited content.
///
/// `ZoomConfig` is ephemeral presentation state: it is created with
/// [`ZoomConfig::default`] when an editor session starts, recomputed on every
/// layout‑affecting event and never persisted.
///
/// The active zoom is always finite and strictly positive; constructors and
/// setters that would break this return `None` instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    zoom: f64,
    auto_zoom: f64,
    root_height: f64,
}

impl ZoomConfig {
    /// Creates a config, validating every field.
    ///
    /// Returns `None` unless `zoom > 0`, `auto_zoom >= 0` and
    /// `root_height >= 0`, all finite.
    #[must_use]
    pub fn new(zoom: f64, auto_zoom: f64, root_height: f64) -> Option<Self> {
        if !is_valid_zoom(zoom) || !is_non_negative(auto_zoom) || !is_non_negative(root_height) {
            return None;
        }
        Some(Self {
            zoom,
            auto_zoom,
            root_height,
        })
    }

    /// The active scale factor applied to the edited content.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The scale factor that would make the content exactly fit the frame.
    ///
    /// This is `0.0` until the first successful fit.
    #[must_use]
    pub fn auto_zoom(&self) -> f64 {
        self.auto_zoom
    }

    /// The unscaled height reserved for the root content box in auto height mode.
    #[must_use]
    pub fn root_height(&self) -> f64 {
        self.root_height
    }

    /// Returns a copy with a different active zoom, or `None` if `zoom` is not
    /// finite and strictly positive.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Option<Self> {
        is_valid_zoom(zoom).then_some(Self { zoom, ..self })
    }

    /// Returns `true` when the active zoom equals the auto‑fit zoom.
    #[must_use]
    pub fn is_auto_fit(&self) -> bool {
        self.zoom == self.auto_zoom
    }

    /// The unscaled height the root content box should be given for `viewport`.
    ///
    /// Fixed height viewports use their literal height; auto height viewports
    /// use the cached [`ZoomConfig::root_height`], as does a fixed height
    /// that is negative or not finite.
    #[must_use]
    pub fn applied_root_height(&self, viewport: &Viewport) -> f64 {
        match viewport.height {
            ViewportHeight::Fixed(h) if viewport.height.is_valid() => h,
            ViewportHeight::Fixed(_) | ViewportHeight::Auto => self.root_height,
        }
    }

    pub(crate) fn from_parts(zoom: f64, auto_zoom: f64, root_height: f64) -> Self {
        debug_assert!(is_valid_zoom(zoom), "zoom must be finite and positive");
        Self {
            zoom,
            auto_zoom,
            root_height,
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            auto_zoom: 0.0,
            root_height: 0.0,
        }
    }
}

/// Returns `true` if `zoom` can be used as an active scale factor.
#[must_use]
pub fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start() {
        let config = ZoomConfig::default();
        assert_eq!(config.zoom(), 1.0);
        assert_eq!(config.auto_zoom(), 0.0);
        assert_eq!(config.root_height(), 0.0);
    }

    #[test]
    fn rejects_non_positive_zoom() {
        assert!(ZoomConfig::new(0.0, 0.5, 0.0).is_none());
        assert!(ZoomConfig::new(-1.0, 0.5, 0.0).is_none());
        assert!(ZoomConfig::new(f64::INFINITY, 0.5, 0.0).is_none());
        assert!(ZoomConfig::new(1.0, -0.5, 0.0).is_none());
        assert!(ZoomConfig::default().with_zoom(f64::NAN).is_none());
        assert_eq!(
            ZoomConfig::default().with_zoom(0.5).map(|c| c.zoom()),
            Some(0.5)
        );
    }

    #[test]
    fn applied_root_height_follows_height_mode() {
        let config = ZoomConfig::new(0.5, 0.5, 900.0).unwrap();
        assert_eq!(config.applied_root_height(&Viewport::auto(375.0)), 900.0);
        assert_eq!(
            config.applied_root_height(&Viewport::new(375.0, Some(667.0))),
            667.0
        );
        assert_eq!(
            config.applied_root_height(&Viewport::new(375.0, Some(f64::NAN))),
            900.0
        );
    }
}

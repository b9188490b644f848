// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// Height mode of a virtual device viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewportHeight {
    /// The viewport has a literal height in unscaled pixels.
    Fixed(f64),
    /// The height is derived from the rendered content.
    #[default]
    Auto,
}

impl ViewportHeight {
    /// Builds a height mode from an optional literal height.
    ///
    /// A missing height means [`ViewportHeight::Auto`].
    #[must_use]
    pub fn from_option(height: Option<f64>) -> Self {
        match height {
            Some(h) => Self::Fixed(h),
            None => Self::Auto,
        }
    }

    /// Returns `true` when the height follows the content.
    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Returns `false` for a fixed height that is negative or not finite.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Fixed(h) => h.is_finite() && h >= 0.0,
            Self::Auto => true,
        }
    }

    /// Returns the literal height, if any.
    #[must_use]
    pub fn fixed(self) -> Option<f64> {
        match self {
            Self::Fixed(h) => Some(h),
            Self::Auto => None,
        }
    }
}

/// A virtual device frame size the edited content is previewed at.
///
/// The width is expressed in unscaled (pre‑transform) pixels. It is
/// independent of the actual space the host editor has available.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Unscaled width of the virtual device.
    pub width: f64,
    /// Height mode of the virtual device.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: ViewportHeight,
}

impl Viewport {
    /// Creates a viewport, defaulting a missing height to [`ViewportHeight::Auto`].
    #[must_use]
    pub fn new(width: f64, height: Option<f64>) -> Self {
        Self {
            width,
            height: ViewportHeight::from_option(height),
        }
    }

    /// Creates a viewport whose height follows the content.
    #[must_use]
    pub fn auto(width: f64) -> Self {
        Self {
            width,
            height: ViewportHeight::Auto,
        }
    }

    /// Returns `true` if the width can be used as a fit target.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let first = &DEFAULT_VIEWPORTS[0];
        Self::new(first.0, None)
    }
}

/// A viewport as offered by the viewport controls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportOption {
    /// Unscaled width of the virtual device.
    pub width: f64,
    /// Literal height; `None` follows the content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f64>,
    /// Human readable label, e.g. `"Small"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// Icon name understood by the host's icon set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
}

impl ViewportOption {
    /// Creates an unlabeled option.
    #[must_use]
    pub fn new(width: f64, height: Option<f64>) -> Self {
        Self {
            width,
            height,
            label: None,
            icon: None,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The viewport this option selects.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Returns `true` if `viewport` is what this option selects.
    #[must_use]
    pub fn selects(&self, viewport: &Viewport) -> bool {
        self.viewport() == *viewport
    }
}

// (width, label, icon)
const DEFAULT_VIEWPORTS: [(f64, &str, &str); 3] = [
    (360.0, "Small", "Smartphone"),
    (768.0, "Medium", "Tablet"),
    (1280.0, "Large", "Monitor"),
];

/// The stock device viewports: small, medium and large, all with auto height.
#[must_use]
pub fn default_viewports() -> Vec<ViewportOption> {
    DEFAULT_VIEWPORTS
        .iter()
        .map(|&(width, label, icon)| {
            ViewportOption::new(width, None)
                .with_label(label)
                .with_icon(icon)
        })
        .collect()
}

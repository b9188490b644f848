// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use easel_zoom::ZoomLadder;

/// Whether selecting a viewport re‑fits the zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RefitPolicy {
    /// Always re‑fit, discarding a zoom the user picked.
    #[default]
    Always,
    /// Re‑fit only if the active zoom is the auto‑fit zoom.
    UnlessPinned,
    /// Keep the active zoom; only the auto‑fit value is refreshed.
    Never,
}

/// Easing curve of the transform transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    #[default]
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl Easing {
    /// The CSS timing function keyword.
    #[must_use]
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Transition applied to the root box when a change should animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Easing curve.
    pub easing: Easing,
}

impl TransitionSpec {
    /// Properties the transition applies to.
    pub const PROPERTIES: [&'static str; 3] = ["width", "height", "transform"];

    /// Renders the transition as a CSS `transition` value.
    ///
    /// ```
    /// use easel_canvas::TransitionSpec;
    ///
    /// assert_eq!(
    ///     TransitionSpec::default().to_css(),
    ///     "width 150ms ease-out, height 150ms ease-out, transform 150ms ease-out"
    /// );
    /// ```
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (i, property) in Self::PROPERTIES.iter().enumerate() {
            if i > 0 {
                css.push_str(", ");
            }
            css.push_str(&format!(
                "{property} {}ms {}",
                self.duration_ms,
                self.easing.css_keyword()
            ));
        }
        css
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_ms: 150,
            easing: Easing::EaseOut,
        }
    }
}

/// Canvas configuration.
///
/// Built with chained `with_*` setters on top of [`CanvasOptions::default`].
/// With the `serde` feature the options can be loaded from a host config file;
/// missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasOptions {
    /// What selecting a viewport does to a user picked zoom.
    pub refit_policy: RefitPolicy,
    /// Transition used for user initiated changes.
    pub transition: TransitionSpec,
    /// Zoom steps offered by the zoom controls.
    pub zoom_ladder: ZoomLadder,
}

impl CanvasOptions {
    /// Sets the refit policy.
    #[must_use]
    pub fn with_refit_policy(mut self, policy: RefitPolicy) -> Self {
        self.refit_policy = policy;
        self
    }

    /// Sets the transition.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the zoom steps.
    #[must_use]
    pub fn with_zoom_ladder(mut self, ladder: ZoomLadder) -> Self {
        self.zoom_ladder = ladder;
        self
    }
}

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::config::is_valid_zoom;

/// The stock zoom steps offered by the zoom controls.
pub const DEFAULT_ZOOM_STEPS: [f64; 7] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

// Two zoom values closer than this are the same option.
const SAME_STEP: f64 = 1e-6;

/// Direction for stepping through zoom options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Towards the next larger option.
    In,
    /// Towards the next smaller option.
    Out,
}

/// One entry of a zoom selector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOption {
    /// Scale factor.
    pub value: f64,
    /// Whether this entry is the current auto‑fit zoom.
    pub is_auto: bool,
}

impl ZoomOption {
    /// The scale factor expressed in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }
}

/// A sorted set of discrete zoom steps.
///
/// The ladder is what zoom‑in / zoom‑out controls walk through. The current
/// auto‑fit zoom is merged in on demand so "fit" is always reachable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<f64>", into = "Vec<f64>"))]
pub struct ZoomLadder {
    steps: Vec<f64>,
}

impl ZoomLadder {
    /// Creates a ladder from arbitrary steps.
    ///
    /// Steps that are not valid zoom values are dropped; the rest are sorted
    /// and de‑duplicated.
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = f64>) -> Self {
        let mut steps: Vec<f64> = steps.into_iter().filter(|&z| is_valid_zoom(z)).collect();
        sort_dedup(&mut steps);
        Self { steps }
    }

    /// The steps, ascending.
    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Returns the selectable options with `auto_zoom` merged in.
    ///
    /// If `auto_zoom` coincides with a step, that step is flagged as auto
    /// instead of being listed twice. An `auto_zoom` that is not a valid zoom
    /// (for example `0.0` before the first fit) is left out.
    #[must_use]
    pub fn options(&self, auto_zoom: f64) -> Vec<ZoomOption> {
        let auto_valid = is_valid_zoom(auto_zoom);
        let mut options: Vec<ZoomOption> = self
            .steps
            .iter()
            .map(|&value| ZoomOption {
                value,
                is_auto: auto_valid && same_step(value, auto_zoom),
            })
            .collect();
        if auto_valid && !options.iter().any(|o| o.is_auto) {
            let at = options.partition_point(|o| o.value < auto_zoom);
            options.insert(
                at,
                ZoomOption {
                    value: auto_zoom,
                    is_auto: true,
                },
            );
        }
        options
    }

    /// Returns the option next to `current` in `direction`.
    ///
    /// Stepping past either end of the ladder stays on the last option. An
    /// empty ladder with no valid auto zoom returns `current`.
    #[must_use]
    pub fn step(&self, current: f64, auto_zoom: f64, direction: ZoomDirection) -> f64 {
        let options = self.options(auto_zoom);
        let next = match direction {
            ZoomDirection::In => options
                .iter()
                .find(|o| o.value > current + SAME_STEP)
                .or_else(|| options.last()),
            ZoomDirection::Out => options
                .iter()
                .rev()
                .find(|o| o.value < current - SAME_STEP)
                .or_else(|| options.first()),
        };
        next.map_or(current, |o| o.value)
    }
}

impl Default for ZoomLadder {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEPS)
    }
}

impl From<Vec<f64>> for ZoomLadder {
    fn from(steps: Vec<f64>) -> Self {
        Self::new(steps)
    }
}

impl From<ZoomLadder> for Vec<f64> {
    fn from(ladder: ZoomLadder) -> Self {
        ladder.steps
    }
}

fn same_step(a: f64, b: f64) -> bool {
    (a - b).abs() < SAME_STEP
}

fn sort_dedup(steps: &mut Vec<f64>) {
    steps.sort_by(f64::total_cmp);
    steps.dedup_by(|a, b| same_step(*a, *b));
}

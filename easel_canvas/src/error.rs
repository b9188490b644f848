// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A user intent the canvas refused to apply.
///
/// Rejected inputs leave the canvas state untouched.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// The zoom is not finite and strictly positive.
    #[error("invalid zoom {0}")]
    InvalidZoom(f64),
    /// The viewport width is not finite and strictly positive.
    #[error("invalid viewport width {0}")]
    InvalidViewport(f64),
    /// The fixed viewport height is not finite and non‑negative.
    #[error("invalid viewport height {0}")]
    InvalidViewportHeight(f64),
}

// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Placement of the isolated frame inside the host layout.
///
/// Pointer positions reported by the host are in host document coordinates;
/// geometry computed against content inside the frame must be expressed in the
/// frame's own coordinates. `FrameGeometry` records where the frame's origin
/// sits in the host and the uniform scale applied to it, and converts between
/// the two spaces.
///
/// ```
/// use kurbo::Point;
/// use easel_frame::FrameGeometry;
///
/// let geometry = FrameGeometry::new(Point::new(100.0, 40.0), 0.5);
/// let inside = geometry.host_to_frame_point(Point::new(150.0, 90.0));
/// assert_eq!(inside, Point::new(100.0, 100.0));
/// assert_eq!(geometry.frame_to_host_point(inside), Point::new(150.0, 90.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    origin: Point,
    scale: f64,
}

impl FrameGeometry {
    /// Unscaled frame at the host origin.
    pub const IDENTITY: Self = Self {
        origin: Point::ORIGIN,
        scale: 1.0,
    };

    /// Creates a geometry from the frame's host offset and scale.
    ///
    /// A scale that is not finite and strictly positive is replaced by `1.0`
    /// so the conversions stay invertible.
    #[must_use]
    pub fn new(origin: Point, scale: f64) -> Self {
        Self {
            origin,
            scale: sanitize_scale(scale),
        }
    }

    /// Offset of the frame's origin in host coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Uniform scale from frame to host coordinates.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns a copy moved to `origin`.
    #[must_use]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Returns a copy with a different scale.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self::new(self.origin, scale)
    }

    /// Frame → host transform.
    #[must_use]
    pub fn frame_to_host(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(self.scale)
    }

    /// Host → frame transform.
    #[must_use]
    pub fn host_to_frame(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.origin.to_vec2())
    }

    /// Converts a host document point into frame coordinates.
    #[must_use]
    pub fn host_to_frame_point(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.origin.x) / self.scale,
            (pt.y - self.origin.y) / self.scale,
        )
    }

    /// Converts a frame point into host document coordinates.
    #[must_use]
    pub fn frame_to_host_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.origin.x,
            pt.y * self.scale + self.origin.y,
        )
    }

    /// Converts a host document rectangle into frame coordinates.
    #[must_use]
    pub fn host_to_frame_rect(&self, rect: Rect) -> Rect {
        // Uniform positive scale keeps the rect axis aligned and ordered.
        Rect::from_points(
            self.host_to_frame_point(rect.origin()),
            self.host_to_frame_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a frame rectangle into host document coordinates.
    #[must_use]
    pub fn frame_to_host_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.frame_to_host_point(rect.origin()),
            self.frame_to_host_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// The host rectangle covered by a frame of unscaled `frame_size`.
    #[must_use]
    pub fn host_bounds(&self, frame_size: Size) -> Rect {
        self.frame_to_host_rect(Rect::from_origin_size(Point::ORIGIN, frame_size))
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

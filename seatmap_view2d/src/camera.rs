// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Lower bound of the zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Upper bound of the zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Camera over the world-space seating plane.
///
/// `Camera` tracks the world point currently centered in the view (the
/// focal point), a uniform zoom scale, and the pixel size of the drawing
/// surface. It can be used to:
/// - Convert points between world and screen coordinates.
/// - Pan, and zoom around a chosen screen anchor.
/// - Fit a world-space bounding box into the view.
///
/// The scale is clamped into [`MIN_SCALE`]..=[`MAX_SCALE`] by every
/// mutation; it never leaves that range.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    focal: Point,
    scale: f64,
    view_size: Size,
}

impl Camera {
    /// Creates a camera for a drawing surface of `view_size` pixels.
    ///
    /// - Initial focal point is the world origin.
    /// - Initial scale is `1.0`.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            focal: Point::ORIGIN,
            scale: 1.0,
            view_size,
        }
    }

    /// Returns the world point currently centered in the view.
    #[must_use]
    pub fn focal(&self) -> Point {
        self.focal
    }

    /// Returns the current uniform zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the drawing-surface size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Returns `true` if the drawing surface has a drawable extent.
    #[must_use]
    pub fn has_view(&self) -> bool {
        self.view_size.width > 0.0 && self.view_size.height > 0.0
    }

    /// Centers the view on the given world point.
    pub fn set_focal(&mut self, focal: Point) {
        self.focal = focal;
    }

    /// Sets the zoom scale, clamping it into the legal range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Updates the drawing-surface pixel size.
    ///
    /// Focal point and scale are untouched; the world region under the view
    /// simply grows or shrinks around the center.
    pub fn resize(&mut self, view_size: Size) {
        self.view_size = view_size;
    }

    /// Converts a world-space point into screen coordinates.
    ///
    /// `screen = (world - focal) * scale + view_size / 2`.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let centered = (world - self.focal) * self.scale;
        Point::new(
            centered.x + self.view_size.width / 2.0,
            centered.y + self.view_size.height / 2.0,
        )
    }

    /// Converts a screen-space point into world coordinates.
    ///
    /// Exact inverse of [`Camera::world_to_screen`] for any camera state.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let centered = Vec2::new(
            screen.x - self.view_size.width / 2.0,
            screen.y - self.view_size.height / 2.0,
        );
        self.focal + centered / self.scale
    }

    /// Pans the focal point by a delta in world units.
    pub fn pan(&mut self, delta: Vec2) {
        self.focal += delta;
    }

    /// Zooms by `factor` around a screen-space anchor point.
    ///
    /// The world point under `anchor` before the zoom is still under it
    /// afterwards (up to floating-point tolerance), unless clamping stops
    /// the scale change entirely.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let world_at_anchor = self.screen_to_world(anchor);
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        // Re-solve `screen = (world - focal) * scale + size/2` for the
        // focal point that keeps `world_at_anchor` under `anchor`.
        let centered = Vec2::new(
            anchor.x - self.view_size.width / 2.0,
            anchor.y - self.view_size.height / 2.0,
        );
        self.focal = world_at_anchor - centered / self.scale;
    }

    /// Zooms by `factor` around the view center.
    ///
    /// The focal point is on the center axis, so it stays fixed.
    pub fn zoom(&mut self, factor: f64) {
        let center = Point::new(self.view_size.width / 2.0, self.view_size.height / 2.0);
        self.zoom_at(center, factor);
    }

    /// Fits a world-space bounding box into the view minus `padding_px` on
    /// each side, centering the focal point on the box's centroid.
    ///
    /// The fitted scale never exceeds `1.0`: auto-fit does not zoom in past
    /// native scale. Returns `false` without touching the camera when the
    /// box or the padded view is degenerate (zero or negative extent).
    pub fn fit_to_content(&mut self, bounds: kurbo::Rect, padding_px: f64) -> bool {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return false;
        }
        let avail_w = self.view_size.width - 2.0 * padding_px;
        let avail_h = self.view_size.height - 2.0 * padding_px;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return false;
        }

        let fit = (avail_w / bounds.width()).min(avail_h / bounds.height());
        self.scale = fit.min(1.0).clamp(MIN_SCALE, MAX_SCALE);
        self.focal = bounds.center();
        true
    }

    /// Returns the composed render transform:
    /// `translate(view_size / 2) · scale(scale) · translate(-focal)`.
    ///
    /// Applying this to a world point yields the same result as
    /// [`Camera::world_to_screen`].
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(
            self.view_size.width / 2.0,
            self.view_size.height / 2.0,
        )) * Affine::scale(self.scale)
            * Affine::translate(-self.focal.to_vec2())
    }
}

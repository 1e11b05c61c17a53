// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface trait the engine paints through.

use kurbo::{Affine, Point};
use peniko::Color;

/// Backend-agnostic drawing surface.
///
/// Implementations map these calls onto a concrete renderer: a web canvas
/// 2D context, a Vello scene, or the [`RecordingSurface`](crate::RecordingSurface)
/// test double. Geometry is interpreted under the current transform stack,
/// so the seat pass can push the camera transform once and draw in world
/// coordinates.
///
/// Transform pushes must be balanced by pops; the pass restores the surface
/// to its pre-transform state before returning.
pub trait Surface {
    /// Clears the whole surface to its background.
    fn clear(&mut self);

    /// Pushes a transform composed onto the current one.
    fn push_transform(&mut self, transform: Affine);

    /// Pops the most recently pushed transform.
    fn pop_transform(&mut self);

    /// Fills a circle at `center` with the given radius, both in current
    /// transform coordinates.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Strokes a circle outline. `width` is in current transform
    /// coordinates, like the radius.
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color);

    /// Draws text centered on `center` at the given size.
    fn fill_label(&mut self, center: Point, text: &str, size: f64, color: Color);
}

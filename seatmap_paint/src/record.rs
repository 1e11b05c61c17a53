// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An op-recording surface for headless tests and debugging.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point};
use peniko::Color;

use crate::surface::Surface;

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// The surface was cleared.
    Clear,
    /// A transform was pushed.
    PushTransform(Affine),
    /// The most recent transform was popped.
    PopTransform,
    /// A filled circle.
    FillCircle {
        /// Circle center in current transform coordinates.
        center: Point,
        /// Circle radius in current transform coordinates.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A stroked circle outline.
    StrokeCircle {
        /// Circle center in current transform coordinates.
        center: Point,
        /// Circle radius in current transform coordinates.
        radius: f64,
        /// Stroke width in current transform coordinates.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// A centered text label.
    FillLabel {
        /// Label center in current transform coordinates.
        center: Point,
        /// Label text.
        text: String,
        /// Text size in current transform coordinates.
        size: f64,
        /// Text color.
        color: Color,
    },
}

/// Trivial in-memory surface that records operations for inspection.
///
/// Useful for asserting what a frame would draw without a live display; the
/// engine tests use it to verify culling supersets and color precedence.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// All recorded operations, in call order.
    pub ops: Vec<PaintOp>,
}

impl RecordingSurface {
    /// Drops all recorded operations.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Net transform stack depth across the recording. Zero for a balanced
    /// frame.
    #[must_use]
    pub fn transform_depth(&self) -> isize {
        self.ops
            .iter()
            .map(|op| match op {
                PaintOp::PushTransform(_) => 1,
                PaintOp::PopTransform => -1,
                _ => 0,
            })
            .sum()
    }

    /// Centers of all filled circles, in draw order.
    #[must_use]
    pub fn fill_centers(&self) -> Vec<Point> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn push_transform(&mut self, transform: Affine) {
        self.ops.push(PaintOp::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        self.ops.push(PaintOp::PopTransform);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(PaintOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.ops.push(PaintOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_label(&mut self, center: Point, text: &str, size: f64, color: Color) {
        self.ops.push(PaintOp::FillLabel {
            center,
            text: String::from(text),
            size,
            color,
        });
    }
}

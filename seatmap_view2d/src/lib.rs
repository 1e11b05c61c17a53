// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap View 2D: the camera over the seating-map plane.
//!
//! This crate provides a small, headless camera model: a world-space focal
//! point, a uniform zoom scale, and the pixel size of the drawing surface.
//! It focuses on:
//! - Coordinate conversion between world and screen (pixel) space.
//! - Anchored zooming (the world point under the pointer stays put).
//! - Fitting a world-space bounding box into the view.
//!
//! It does **not** own venue data or any rendering backend. Callers are
//! expected to:
//! - Hold the [`Camera`] as the single shared piece of viewport state.
//! - Wire pointer/keyboard events into pan/zoom operations at a higher
//!   layer.
//! - Derive the per-frame render transform via [`Camera::transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use seatmap_view2d::Camera;
//!
//! // 800x600 drawing surface, focal point at the world origin.
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//!
//! // The focal point maps to the view center.
//! assert_eq!(camera.world_to_screen(Point::ORIGIN), Point::new(400.0, 300.0));
//!
//! // Zoom in anchored at the pointer; the world point under it is fixed.
//! camera.zoom_at(Point::new(200.0, 150.0), 1.1);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** zoom factor, clamped to
//!   [`MIN_SCALE`]..=[`MAX_SCALE`] under every mutation.
//! - `screen = (world - focal) * scale + view_size / 2`, and
//!   [`Camera::screen_to_world`] is its exact inverse.
//! - Rotation is intentionally left out.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;

pub use camera::{Camera, MAX_SCALE, MIN_SCALE};

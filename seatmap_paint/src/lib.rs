// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Paint: the drawing-surface seam and the per-frame seat pass.
//!
//! This crate sits between the engine and concrete renderers. It defines:
//!
//! - [`Surface`]: a minimal trait a host backend implements (an HTML
//!   canvas, a Vello scene, a test recorder). The engine never talks to a
//!   concrete renderer directly.
//! - Seat color resolution ([`resolve_seat_color`]): hovered beats
//!   selected, selected beats status-derived color; an unrecognized status
//!   paints neutral gray and is reported as a defect, never a crash.
//! - [`paint_seats`]: the draw pass over the culled visible set, applying
//!   the camera transform once and drawing constant-pixel-size circles and
//!   labels per the level-of-detail policy.
//! - [`RecordingSurface`]: an op-recording backend for headless tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use seatmap_cull::visible_seats;
//! use seatmap_paint::{paint_seats, RecordingSurface};
//! use seatmap_venue::{FlatIndex, sample};
//! use seatmap_view2d::Camera;
//!
//! let index = FlatIndex::build(&sample::grid_venue(5, 5));
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//! camera.fit_to_content(index.bounds().unwrap(), 40.0);
//!
//! let visible = visible_seats(&camera, index.seats(), 0.0);
//! let mut surface = RecordingSurface::default();
//! let painted = paint_seats(&mut surface, &camera, &index, &visible, |_| false, None);
//! assert_eq!(painted, visible.len());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod pass;
mod record;
mod surface;

pub use color::{
    AVAILABLE_COLOR, HELD_COLOR, HOVERED_COLOR, OUTLINE_COLOR, RESERVED_COLOR, SELECTED_COLOR,
    SOLD_COLOR, UNKNOWN_COLOR, resolve_seat_color, status_color,
};
pub use pass::{OUTLINE_WIDTH_PX, paint_seats};
pub use record::{PaintOp, RecordingSurface};
pub use surface::Surface;

// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Cull: per-frame visibility queries and level-of-detail policy.
//!
//! Culling keeps per-frame render cost bounded by the *visible* seat count
//! rather than the venue size. The query is deliberately a pure function
//! over the camera and the flattened seat index: the camera changes every
//! frame during interaction, so there is nothing worth caching between
//! calls.
//!
//! The level-of-detail policy lives here too, because it is a function of
//! the same camera scale the cull uses: seat radius steps with zoom, and
//! seat-number labels only appear once both the scale and the resolved
//! radius make them legible.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use seatmap_cull::{visible_seats, CULL_MARGIN_PX};
//! use seatmap_venue::{FlatIndex, sample};
//! use seatmap_view2d::Camera;
//!
//! let index = FlatIndex::build(&sample::grid_venue(15, 10));
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//! camera.fit_to_content(index.bounds().unwrap(), 40.0);
//!
//! let visible = visible_seats(&camera, index.seats(), CULL_MARGIN_PX);
//! assert_eq!(visible.len(), index.len());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod lod;
mod visible;

pub use lod::{labels_visible, seat_radius_px};
pub use visible::{CULL_MARGIN_PX, visible_seats, visible_world_rect, visit_visible};

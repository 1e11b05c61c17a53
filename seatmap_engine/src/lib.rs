// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Engine: the frame-driven core behind an interactive seating map.
//!
//! [`MapEngine`] ties the other Seatmap crates together into the loop a
//! host embeds:
//!
//! - It owns the camera, the flattened seat index, the hovered seat, and
//!   the host-supplied selection snapshot.
//! - The host calls [`MapEngine::render_frame`] each time its paint
//!   scheduler fires (e.g. an animation-frame callback) and keeps
//!   rescheduling while the engine is running; [`MapEngine::stop`] makes
//!   every later call a no-op, which is how view teardown deterministically
//!   cancels the loop.
//! - Pointer and keyboard handlers mutate the camera and return
//!   [`MapEvent`]s for the host synchronously; the engine never owns
//!   selection state, it only reads the snapshot the host supplies.
//!
//! Everything runs on one execution context: handlers run to completion
//! before the next frame observes their effects, so there is no locking
//! anywhere in the engine.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use seatmap_engine::{FrameOutcome, MapEngine};
//! use seatmap_paint::RecordingSurface;
//! use seatmap_venue::sample;
//!
//! let mut engine = MapEngine::new();
//! engine.set_venue(&sample::grid_venue(15, 10));
//! engine.resize(Size::new(800.0, 600.0));
//!
//! let mut surface = RecordingSurface::default();
//! match engine.render_frame(&mut surface) {
//!     FrameOutcome::Rendered(stats) => {
//!         assert_eq!(stats.total_seats, 150);
//!         assert!(stats.rendered_seats <= stats.total_seats);
//!     }
//!     other => panic!("expected a rendered frame, got {other:?}"),
//! }
//! ```

mod engine;
mod events;
mod interact;
mod stats;

pub use engine::{DEFAULT_FIT_PADDING_PX, FrameOutcome, MapEngine};
pub use events::{MapEvent, MapEvents, MapKey};
pub use stats::{FrameClock, RenderStats};

// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Venue: venue data model and flattened seat geometry index.
//!
//! A venue is a hierarchy of sections → rows → seats, where each section
//! carries an affine placement (offset + uniform scale) applied to its
//! seats' local coordinates. Rendering, culling, and hit testing all want a
//! flat view of that hierarchy with world coordinates resolved up front, so
//! this crate provides:
//!
//! - The venue model types ([`Venue`], [`Section`], [`Row`], [`Seat`],
//!   [`SeatStatus`]).
//! - [`FlatIndex`]: a flattened, immutable snapshot with one [`FlatSeat`]
//!   per seat, built once per venue load. Records keep the input order
//!   (section, then row, then seat), which downstream consumers rely on for
//!   stable rendering order and deterministic hit-test tie-breaks.
//! - [`sample`]: deterministic venue generators for demos and tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use seatmap_venue::{FlatIndex, sample};
//!
//! let venue = sample::grid_venue(15, 10);
//! let index = FlatIndex::build(&venue);
//!
//! assert_eq!(index.len(), 150);
//! // World coordinates are pre-resolved through the section transform.
//! let first = &index.seats()[0];
//! assert_eq!((first.world.x, first.world.y), (50.0, 40.0));
//! ```
//!
//! The index is a snapshot: it is never mutated in place. When venue data
//! changes (including seat status updates supplied by the host), rebuild it.
//!
//! This crate is `no_std` and uses `alloc`. Enable the `serde` feature to
//! deserialize venues; absent row/seat lists deserialize as empty rather
//! than failing.

#![no_std]

extern crate alloc;

mod flat;
mod model;
pub mod sample;

pub use flat::{FlatIndex, FlatSeat, SeatSlot};
pub use model::{MapSize, Row, Seat, SeatId, SeatStatus, Section, SectionTransform, Venue};

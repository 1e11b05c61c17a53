// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened seat index with pre-resolved world coordinates.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::model::{SeatId, SeatStatus, Venue};

/// Index of a seat within a [`FlatIndex`].
///
/// Slots are dense and assigned in input order (section, then row, then
/// seat), so they double as a stable rendering order.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeatSlot(pub u32);

impl SeatSlot {
    /// Returns the slot as a `usize` index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One seat, flattened: identity plus pre-resolved world position.
///
/// This is a snapshot of the per-seat data the render/interaction path
/// reads every frame, copied out of the hierarchy at build time so that no
/// per-frame traversal of sections and rows is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatSeat {
    /// Slot of this record within its index.
    pub slot: SeatSlot,
    /// Seat identifier.
    pub id: SeatId,
    /// Column index within the row.
    pub col: u32,
    /// Sale status at the time the index was built.
    pub status: SeatStatus,
    /// Index of the owning section within the venue.
    pub section: u32,
    /// Ordinal index of the owning row, as given by the venue data.
    pub row_index: u32,
    /// World-space position: `section.offset + seat.local * section.scale`.
    pub world: Point,
}

/// Flattened, immutable snapshot of a venue's seats.
///
/// Built once per venue load with [`FlatIndex::build`] and rebuilt only when
/// the venue data changes. Culling and hit testing both read it; nothing
/// mutates it.
#[derive(Clone, Debug, Default)]
pub struct FlatIndex {
    seats: Vec<FlatSeat>,
    by_id: HashMap<SeatId, SeatSlot>,
    bounds: Option<Rect>,
}

impl FlatIndex {
    /// Walks the venue hierarchy exactly once and produces one record per
    /// seat, in input order.
    ///
    /// Empty sections and rows contribute nothing; they are not an error.
    #[must_use]
    pub fn build(venue: &Venue) -> Self {
        let mut seats = Vec::with_capacity(venue.seat_count());
        let mut by_id = HashMap::with_capacity(venue.seat_count());
        let mut bounds: Option<Rect> = None;

        for (section_idx, section) in venue.sections.iter().enumerate() {
            let t = section.transform;
            for row in &section.rows {
                for seat in &row.seats {
                    let world = Point::new(t.x + seat.x * t.scale, t.y + seat.y * t.scale);
                    let slot = SeatSlot(seats.len() as u32);
                    by_id.insert(seat.id.clone(), slot);
                    bounds = Some(match bounds {
                        Some(b) => b.union_pt(world),
                        None => Rect::from_points(world, world),
                    });
                    seats.push(FlatSeat {
                        slot,
                        id: seat.id.clone(),
                        col: seat.col,
                        status: seat.status,
                        section: section_idx as u32,
                        row_index: row.index,
                        world,
                    });
                }
            }
        }

        Self {
            seats,
            by_id,
            bounds,
        }
    }

    /// Number of seats in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Returns `true` if the venue carried no seats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// All records, in deterministic input order.
    #[must_use]
    pub fn seats(&self) -> &[FlatSeat] {
        &self.seats
    }

    /// Looks up a record by slot.
    #[must_use]
    pub fn get(&self, slot: SeatSlot) -> Option<&FlatSeat> {
        self.seats.get(slot.index())
    }

    /// Looks up the slot of a seat identifier.
    #[must_use]
    pub fn slot_of(&self, id: &SeatId) -> Option<SeatSlot> {
        self.by_id.get(id).copied()
    }

    /// World-space bounding box over all seat positions.
    ///
    /// `None` when the index is empty; callers fall back to the venue's
    /// logical map rect in that case.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Finds the nearest seat whose world position lies within `radius` of
    /// `world`.
    ///
    /// Ties are broken toward the first record in index order: a later seat
    /// replaces the candidate only when strictly closer.
    #[must_use]
    pub fn nearest_within(&self, world: Point, radius: f64) -> Option<SeatSlot> {
        let radius_sq = radius * radius;
        let mut best: Option<(SeatSlot, f64)> = None;
        for seat in &self.seats {
            let dist_sq = seat.world.distance_squared(world);
            if dist_sq > radius_sq {
                continue;
            }
            match best {
                Some((_, best_sq)) if dist_sq >= best_sq => {}
                _ => best = Some((seat.slot, dist_sq)),
            }
        }
        best.map(|(slot, _)| slot)
    }
}

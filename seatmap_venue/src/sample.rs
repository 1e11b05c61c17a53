// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic venue generators for demos and tests.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::model::{MapSize, Row, Seat, SeatId, SeatStatus, Section, SectionTransform, Venue};

/// Horizontal spacing between adjacent seats, in world units.
pub const SEAT_PITCH_X: f64 = 80.0;
/// Vertical spacing between adjacent rows, in world units.
pub const SEAT_PITCH_Y: f64 = 40.0;

/// Builds a single-section grid venue of `rows` × `seats_per_row` seats.
///
/// Layout matches the canonical arena fixture: seat `A-{row}-{col}` sits at
/// `(50 + (col-1)·80, 40 + (row-1)·40)`, even rows (0-based) are available
/// and odd rows reserved, all on price tier 1.
#[must_use]
pub fn grid_venue(rows: u32, seats_per_row: u32) -> Venue {
    let mut section = Section {
        id: String::from("A"),
        label: String::from("Lower Bowl A"),
        transform: SectionTransform::default(),
        rows: Vec::with_capacity(rows as usize),
    };

    for r in 0..rows {
        let mut row = Row {
            index: r + 1,
            seats: Vec::with_capacity(seats_per_row as usize),
        };
        let status = if r % 2 == 0 {
            SeatStatus::Available
        } else {
            SeatStatus::Reserved
        };
        for c in 0..seats_per_row {
            row.seats.push(Seat {
                id: SeatId(format!("A-{}-{}", r + 1, c + 1)),
                col: c + 1,
                x: 50.0 + f64::from(c) * SEAT_PITCH_X,
                y: 40.0 + f64::from(r) * SEAT_PITCH_Y,
                price_tier: 1,
                status,
            });
        }
        section.rows.push(row);
    }

    Venue {
        venue_id: String::from("arena-01"),
        name: String::from("Metropolis Arena"),
        map: MapSize {
            width: 1024.0,
            height: 768.0,
        },
        sections: alloc::vec![section],
    }
}

#[cfg(test)]
mod tests {
    use super::grid_venue;
    use crate::model::SeatStatus;

    #[test]
    fn grid_dimensions_and_statuses() {
        let venue = grid_venue(3, 2);
        assert_eq!(venue.sections.len(), 1);
        assert_eq!(venue.seat_count(), 6);

        let rows = &venue.sections[0].rows;
        assert_eq!(rows[0].seats[0].status, SeatStatus::Available);
        assert_eq!(rows[1].seats[0].status, SeatStatus::Reserved);
        assert_eq!(rows[2].seats[1].status, SeatStatus::Available);
        assert_eq!(rows[2].seats[1].id.as_str(), "A-3-2");
    }

    #[test]
    fn zero_sized_grid_is_valid_and_empty() {
        let venue = grid_venue(0, 10);
        assert_eq!(venue.seat_count(), 0);
        assert!(venue.sections[0].rows.is_empty());
    }
}

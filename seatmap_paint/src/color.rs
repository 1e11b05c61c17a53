// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seat color resolution.

use peniko::Color;

use seatmap_venue::SeatStatus;

/// Fill for available seats.
pub const AVAILABLE_COLOR: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
/// Fill for reserved seats (amber).
pub const RESERVED_COLOR: Color = Color::from_rgb8(0xea, 0xb3, 0x08);
/// Fill for sold seats.
pub const SOLD_COLOR: Color = Color::from_rgb8(0xef, 0x44, 0x44);
/// Fill for held seats.
pub const HELD_COLOR: Color = Color::from_rgb8(0xf9, 0x73, 0x16);
/// Fill for seats in the host-supplied selection set.
pub const SELECTED_COLOR: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
/// Highlight fill for the hovered seat.
pub const HOVERED_COLOR: Color = Color::from_rgb8(0x60, 0xa5, 0xfa);
/// Neutral fallback for an unrecognized status.
pub const UNKNOWN_COLOR: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
/// Outline color for selected/hovered seats.
pub const OUTLINE_COLOR: Color = Color::WHITE;

/// Maps a seat status to its fill color.
///
/// [`SeatStatus::Unknown`] maps to the neutral fallback. It is the caller's
/// job to surface the defect signal (the paint pass logs once per frame);
/// this function stays pure.
#[must_use]
pub fn status_color(status: SeatStatus) -> Color {
    match status {
        SeatStatus::Available => AVAILABLE_COLOR,
        SeatStatus::Reserved => RESERVED_COLOR,
        SeatStatus::Sold => SOLD_COLOR,
        SeatStatus::Held => HELD_COLOR,
        SeatStatus::Unknown => UNKNOWN_COLOR,
    }
}

/// Resolves the fill color for one seat.
///
/// Resolution order: hovered, then selected, then status-derived.
#[must_use]
pub fn resolve_seat_color(status: SeatStatus, selected: bool, hovered: bool) -> Color {
    if hovered {
        HOVERED_COLOR
    } else if selected {
        SELECTED_COLOR
    } else {
        status_color(status)
    }
}

#[cfg(test)]
mod tests {
    use seatmap_venue::SeatStatus;

    use super::*;

    #[test]
    fn hover_takes_precedence_over_selection() {
        let color = resolve_seat_color(SeatStatus::Available, true, true);
        assert_eq!(color, HOVERED_COLOR);
        assert_ne!(color, SELECTED_COLOR);
    }

    #[test]
    fn selection_takes_precedence_over_status() {
        assert_eq!(
            resolve_seat_color(SeatStatus::Sold, true, false),
            SELECTED_COLOR
        );
    }

    #[test]
    fn status_maps_to_expected_fills() {
        assert_eq!(status_color(SeatStatus::Available), AVAILABLE_COLOR);
        assert_eq!(status_color(SeatStatus::Reserved), RESERVED_COLOR);
        assert_eq!(status_color(SeatStatus::Sold), SOLD_COLOR);
        assert_eq!(status_color(SeatStatus::Held), HELD_COLOR);
        assert_eq!(status_color(SeatStatus::Unknown), UNKNOWN_COLOR);
    }
}

// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue model types: sections, rows, seats, and their placement.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

/// Identifier of a single seat, e.g. `"A-1-1"`.
///
/// Seat identifiers are opaque to the engine; they exist so that hosts can
/// key selection state and seat events without holding references into the
/// venue structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SeatId(pub String);

impl SeatId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeatId {
    fn from(value: &str) -> Self {
        Self(String::from(value))
    }
}

impl core::fmt::Display for SeatId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sale status of a seat.
///
/// Status is supplied by the host and never mutated by the engine. Inputs
/// outside the four known states map to [`SeatStatus::Unknown`]; rendering
/// treats that as a defect signal but keeps drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeatStatus {
    /// Open for selection.
    #[default]
    Available,
    /// Reserved by another party.
    Reserved,
    /// Already sold.
    Sold,
    /// Temporarily held (e.g. in another buyer's cart).
    Held,
    /// Any status value this engine does not recognize.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// A single seat with section-local coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    /// Unique seat identifier.
    pub id: SeatId,
    /// Column index within the row (1-based in typical venue data).
    pub col: u32,
    /// Section-local X coordinate.
    pub x: f64,
    /// Section-local Y coordinate.
    pub y: f64,
    /// Price tier this seat belongs to. Pricing itself lives with the host.
    #[cfg_attr(feature = "serde", serde(rename = "priceTier"))]
    pub price_tier: u8,
    /// Current sale status.
    pub status: SeatStatus,
}

/// An ordered run of seats within a section.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Ordinal row index as given by the venue data.
    pub index: u32,
    /// Seats in this row, in input order. Absent lists deserialize as empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seats: Vec<Seat>,
}

/// Placement of a section on the venue map: offset plus uniform scale.
///
/// A seat's world position is `offset + local * scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionTransform {
    /// World-space X offset.
    pub x: f64,
    /// World-space Y offset.
    pub y: f64,
    /// Uniform scale applied to local coordinates.
    pub scale: f64,
}

impl Default for SectionTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

/// A named group of rows sharing one placement transform.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Section identifier, e.g. `"A"`.
    pub id: String,
    /// Human-readable label, e.g. `"Lower Bowl A"`.
    pub label: String,
    /// Placement applied to every seat in this section.
    #[cfg_attr(feature = "serde", serde(default))]
    pub transform: SectionTransform,
    /// Rows in this section, in input order. Absent lists deserialize as empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rows: Vec<Row>,
}

/// Logical map extent. Used only as a layout hint when a venue has no seats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSize {
    /// Logical map width.
    pub width: f64,
    /// Logical map height.
    pub height: f64,
}

/// A complete venue: identity, map extent hint, and ordered sections.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Venue {
    /// Venue identifier.
    #[cfg_attr(feature = "serde", serde(rename = "venueId"))]
    pub venue_id: String,
    /// Display name.
    pub name: String,
    /// Logical map size, a fallback layout hint only.
    pub map: MapSize,
    /// Sections in input order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<Section>,
}

impl Venue {
    /// Returns the logical map extent as a rectangle anchored at the origin.
    ///
    /// This is the fallback used for view fitting when the venue carries no
    /// seats at all.
    #[must_use]
    pub fn map_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.map.width, self.map.height)
    }

    /// Total number of seats across all sections and rows.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|r| r.seats.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_transform_defaults_to_identity() {
        let t = SectionTransform::default();
        assert_eq!(t.x, 0.0);
        assert_eq!(t.y, 0.0);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn map_rect_is_origin_anchored() {
        let venue = Venue {
            venue_id: String::from("v"),
            name: String::from("Empty"),
            map: MapSize {
                width: 1024.0,
                height: 768.0,
            },
            sections: Vec::new(),
        };
        assert_eq!(venue.map_rect(), Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_eq!(venue.seat_count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_status_string_maps_to_unknown() {
        let status: SeatStatus = serde_json::from_str("\"vip-only\"").unwrap();
        assert_eq!(status, SeatStatus::Unknown);
        let known: SeatStatus = serde_json::from_str("\"held\"").unwrap();
        assert_eq!(known, SeatStatus::Held);
    }
}

// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame seat painting pass.

use alloc::format;

use seatmap_cull::{labels_visible, seat_radius_px};
use seatmap_venue::{FlatIndex, SeatSlot, SeatStatus};
use seatmap_view2d::Camera;

use crate::color::{OUTLINE_COLOR, resolve_seat_color};
use crate::surface::Surface;

/// Outline stroke width for selected/hovered seats, in pixels.
pub const OUTLINE_WIDTH_PX: f64 = 2.0;

/// Paints the visible seats through the camera transform.
///
/// Pushes the composed camera transform once and draws every seat in
/// `visible` (slots into `index`, as produced by the culling query) in
/// world coordinates:
///
/// - a filled circle whose on-screen radius follows the level-of-detail
///   policy regardless of zoom,
/// - a 2px white outline when the seat is selected or hovered,
/// - a centered column label when the level-of-detail policy allows.
///
/// Colors resolve hovered > selected > status. Seats with an unrecognized
/// status paint neutral and are reported with a single `warn` per pass;
/// painting never fails.
///
/// The transform is popped before returning. Returns the painted count,
/// which is by construction never more than the index size.
pub fn paint_seats<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    index: &FlatIndex,
    visible: &[SeatSlot],
    mut is_selected: impl FnMut(SeatSlot) -> bool,
    hovered: Option<SeatSlot>,
) -> usize {
    let scale = camera.scale();
    let radius_px = seat_radius_px(scale);
    // The camera transform scales world units up to pixels; divide pixel
    // metrics back down so they stay constant on screen.
    let radius = radius_px / scale;
    let outline_width = OUTLINE_WIDTH_PX / scale;
    let with_labels = labels_visible(scale, radius_px);

    surface.push_transform(camera.transform());

    let mut painted = 0;
    let mut unknown = 0_usize;
    for &slot in visible {
        let Some(seat) = index.get(slot) else {
            continue;
        };
        if seat.status == SeatStatus::Unknown {
            unknown += 1;
        }
        let selected = is_selected(slot);
        let is_hovered = hovered == Some(slot);
        let color = resolve_seat_color(seat.status, selected, is_hovered);

        surface.fill_circle(seat.world, radius, color);
        if selected || is_hovered {
            surface.stroke_circle(seat.world, radius, outline_width, OUTLINE_COLOR);
        }
        if with_labels {
            surface.fill_label(
                seat.world,
                &format!("{}", seat.col),
                radius_px / scale,
                OUTLINE_COLOR,
            );
        }
        painted += 1;
    }

    surface.pop_transform();

    if unknown > 0 {
        log::warn!("painted {unknown} seat(s) with unrecognized status as neutral");
    }
    painted
}

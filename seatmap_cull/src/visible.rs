// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility queries over the flattened seat index.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use seatmap_venue::{FlatSeat, SeatSlot};
use seatmap_view2d::Camera;

/// Default pixel margin added around the view rect before culling.
///
/// The margin keeps seats from popping in at the edges during fast pans;
/// the returned set must always be a superset of what is painted.
pub const CULL_MARGIN_PX: f64 = 100.0;

/// Computes the world-space rectangle visible through the camera, expanded
/// by `margin_px` on every side of the screen rect first.
#[must_use]
pub fn visible_world_rect(camera: &Camera, margin_px: f64) -> Rect {
    let view = camera.view_size();
    let min = camera.screen_to_world(Point::new(-margin_px, -margin_px));
    let max = camera.screen_to_world(Point::new(
        view.width + margin_px,
        view.height + margin_px,
    ));
    Rect::from_points(min, max)
}

/// Visits every seat whose world position falls inside the expanded view
/// rect, in index order.
///
/// Bounds are inclusive: a seat exactly on the rect edge is visible.
pub fn visit_visible<F: FnMut(&FlatSeat)>(
    camera: &Camera,
    seats: &[FlatSeat],
    margin_px: f64,
    mut f: F,
) {
    let rect = visible_world_rect(camera, margin_px);
    for seat in seats {
        let p = seat.world;
        if p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1 {
            f(seat);
        }
    }
}

/// Returns the slots of all seats visible through the camera.
///
/// Pure function over its inputs; recomputed once per frame.
#[must_use]
pub fn visible_seats(camera: &Camera, seats: &[FlatSeat], margin_px: f64) -> Vec<SeatSlot> {
    let mut out = Vec::new();
    visit_visible(camera, seats, margin_px, |seat| out.push(seat.slot));
    out
}

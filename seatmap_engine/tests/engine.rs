// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests driving [`MapEngine`] the way a host would.

use kurbo::{Point, Size};

use seatmap_engine::{FrameOutcome, MapEngine, MapEvent, MapKey};
use seatmap_paint::{PaintOp, RecordingSurface, SELECTED_COLOR};
use seatmap_venue::{SeatId, sample};
use seatmap_view2d::{MAX_SCALE, MIN_SCALE};

const VIEW: Size = Size::new(800.0, 600.0);
const VIEW_CENTER: Point = Point::new(400.0, 300.0);

/// Engine with the 150-seat arena loaded and a sized view, before any
/// frame has run. The camera is still at its defaults (origin focal,
/// scale 1.0), which makes screen positions easy to reason about: seat
/// `A-1-1` at world (50, 40) sits at screen (450, 340).
fn arena_engine() -> MapEngine {
    let mut engine = MapEngine::new();
    engine.set_venue(&sample::grid_venue(15, 10));
    engine.resize(VIEW);
    engine
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn frame_lifecycle_skips_then_renders_then_stops() {
    let mut engine = MapEngine::new();
    engine.set_venue(&sample::grid_venue(15, 10));

    // No view size yet: nothing touches the surface.
    let mut surface = RecordingSurface::default();
    assert!(matches!(
        engine.render_frame(&mut surface),
        FrameOutcome::Skipped
    ));
    assert!(surface.ops.is_empty());

    engine.resize(VIEW);
    let FrameOutcome::Rendered(stats) = engine.render_frame(&mut surface) else {
        panic!("expected a rendered frame");
    };
    assert_eq!(stats.total_seats, 150);
    assert_eq!(stats.rendered_seats, 150);
    assert_eq!(engine.stats(), stats);
    assert_eq!(surface.ops[0], PaintOp::Clear);
    assert_eq!(surface.transform_depth(), 0);

    engine.stop();
    assert!(!engine.is_running());
    let mut after_stop = RecordingSurface::default();
    assert!(matches!(
        engine.render_frame(&mut after_stop),
        FrameOutcome::Stopped
    ));
    assert!(after_stop.ops.is_empty());
}

#[test]
fn first_sized_frame_fits_the_venue_once() {
    let mut engine = arena_engine();
    let mut surface = RecordingSurface::default();
    engine.render_frame(&mut surface);

    // Seat bounds are (50, 40)..(770, 600); with 40px padding the height
    // is the limiting axis: scale 520/560, centered on the bounds.
    let camera = engine.camera();
    approx(camera.scale(), 520.0 / 560.0);
    approx(camera.focal().x, 410.0);
    approx(camera.focal().y, 320.0);

    // Later frames leave host navigation alone.
    engine.key(MapKey::ArrowRight);
    let panned = engine.camera().focal();
    engine.render_frame(&mut surface);
    approx(engine.camera().focal().x, panned.x);
    approx(engine.camera().focal().y, panned.y);
}

#[test]
fn click_on_a_seat_reports_it_then_focuses_it() {
    let mut engine = arena_engine();

    let events = engine.click(Point::new(450.0, 340.0));
    let id = SeatId::from("A-1-1");
    assert_eq!(
        &events[..],
        &[
            MapEvent::SeatClicked(id.clone()),
            MapEvent::SeatFocused(Some(id)),
        ]
    );
    assert_eq!(engine.hovered_seat().map(SeatId::as_str), Some("A-1-1"));

    // Empty space: between-seat gaps are larger than the pick radius.
    let events = engine.click(VIEW_CENTER);
    assert!(events.is_empty());
}

#[test]
fn hover_emits_focus_transitions_only_on_change() {
    let mut engine = arena_engine();

    let events = engine.pointer_move(Point::new(450.0, 340.0));
    assert_eq!(
        &events[..],
        &[MapEvent::SeatFocused(Some(SeatId::from("A-1-1")))]
    );

    // Still within the same seat's pick radius: no repeat event.
    assert!(engine.pointer_move(Point::new(452.0, 341.0)).is_empty());

    let events = engine.pointer_move(VIEW_CENTER);
    assert_eq!(&events[..], &[MapEvent::SeatFocused(None)]);
    assert!(engine.hovered_seat().is_none());

    engine.pointer_move(Point::new(450.0, 340.0));
    let events = engine.pointer_leave();
    assert_eq!(&events[..], &[MapEvent::SeatFocused(None)]);
    assert!(engine.pointer_leave().is_empty());
}

#[test]
fn dragging_pans_the_world_against_pointer_motion() {
    let mut engine = arena_engine();

    engine.pointer_down(Point::new(100.0, 100.0));
    let events = engine.pointer_move(Point::new(110.0, 95.0));
    assert!(events.is_empty());
    // Dragging right/up moves the focal left/down: content follows the
    // pointer. At scale 1.0 the delta maps 1:1.
    approx(engine.camera().focal().x, -10.0);
    approx(engine.camera().focal().y, 5.0);

    engine.pointer_up();
    engine.pointer_move(Point::new(200.0, 200.0));
    approx(engine.camera().focal().x, -10.0);
    approx(engine.camera().focal().y, 5.0);
}

#[test]
fn zoom_clamps_at_the_scale_bounds() {
    let mut engine = arena_engine();

    for _ in 0..100 {
        engine.wheel(VIEW_CENTER, 1.0);
    }
    approx(engine.camera().scale(), MIN_SCALE);

    for _ in 0..100 {
        engine.wheel(VIEW_CENTER, -1.0);
    }
    approx(engine.camera().scale(), MAX_SCALE);

    for _ in 0..10 {
        engine.key(MapKey::ZoomIn);
    }
    approx(engine.camera().scale(), MAX_SCALE);

    for _ in 0..200 {
        engine.key(MapKey::ZoomOut);
    }
    approx(engine.camera().scale(), MIN_SCALE);
}

#[test]
fn activate_key_clicks_the_focused_seat() {
    let mut engine = arena_engine();

    // Nothing focused yet: activation is inert.
    assert!(engine.key(MapKey::Activate).is_empty());

    engine.pointer_move(Point::new(450.0, 340.0));
    let events = engine.key(MapKey::Activate);
    let id = SeatId::from("A-1-1");
    assert_eq!(
        &events[..],
        &[
            MapEvent::SeatClicked(id.clone()),
            MapEvent::SeatFocused(Some(id)),
        ]
    );

    // Focus cleared again: back to inert.
    engine.pointer_move(VIEW_CENTER);
    assert!(engine.key(MapKey::Activate).is_empty());
}

#[test]
fn zero_delta_wheel_is_a_no_op() {
    let mut engine = arena_engine();
    let anchor = Point::new(450.0, 340.0);

    engine.wheel(anchor, 0.0);
    approx(engine.camera().scale(), 1.0);
    approx(engine.camera().focal().x, 0.0);
    approx(engine.camera().focal().y, 0.0);
}

#[test]
fn wheel_zoom_keeps_the_anchor_point_fixed() {
    let mut engine = arena_engine();
    let anchor = Point::new(450.0, 340.0);

    let before = engine.camera().screen_to_world(anchor);
    engine.wheel(anchor, -1.0);
    let after = engine.camera().screen_to_world(anchor);
    approx(before.x, after.x);
    approx(before.y, after.y);
    approx(engine.camera().scale(), 1.1);
}

#[test]
fn keys_pan_scaled_to_zoom_and_refit_on_demand() {
    let mut engine = arena_engine();

    engine.key(MapKey::ArrowLeft);
    engine.key(MapKey::ArrowUp);
    approx(engine.camera().focal().x, -100.0);
    approx(engine.camera().focal().y, -100.0);

    // Pan distance shrinks as the view zooms in.
    engine.key(MapKey::ZoomIn);
    engine.key(MapKey::ArrowRight);
    approx(engine.camera().focal().x, -100.0 + 100.0 / 1.2);

    engine.key(MapKey::FitToContent);
    approx(engine.camera().focal().x, 410.0);
    approx(engine.camera().focal().y, 320.0);
    approx(engine.camera().scale(), 520.0 / 560.0);
}

#[test]
fn selection_snapshot_drives_fill_and_outline() {
    let mut engine = arena_engine();
    engine.set_selection([SeatId::from("A-1-1")]);

    let mut surface = RecordingSurface::default();
    engine.render_frame(&mut surface);

    let strokes: Vec<_> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::StrokeCircle { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    assert_eq!(strokes, [Point::new(50.0, 40.0)]);

    let selected_fill = surface.ops.iter().any(|op| {
        matches!(
            op,
            PaintOp::FillCircle { center, color, .. }
                if *center == Point::new(50.0, 40.0) && *color == SELECTED_COLOR
        )
    });
    assert!(selected_fill);

    // Dropping the snapshot drops the outline on the next frame.
    engine.set_selection(std::iter::empty::<SeatId>());
    surface.reset();
    engine.render_frame(&mut surface);
    assert!(
        !surface
            .ops
            .iter()
            .any(|op| matches!(op, PaintOp::StrokeCircle { .. }))
    );
}

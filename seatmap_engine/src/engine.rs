// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine proper: frame loop, interaction handlers, stats publication.

use std::time::Instant;

use hashbrown::HashSet;
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::smallvec;

use seatmap_cull::{CULL_MARGIN_PX, seat_radius_px, visible_seats};
use seatmap_paint::{Surface, paint_seats};
use seatmap_venue::{FlatIndex, SeatId, SeatSlot, Venue};
use seatmap_view2d::Camera;

use crate::events::{MapEvent, MapEvents, MapKey};
use crate::interact::DragState;
use crate::stats::{FrameClock, RenderStats};

/// Pixel padding kept around the venue when fitting it into the view.
pub const DEFAULT_FIT_PADDING_PX: f64 = 40.0;

/// Screen pixels panned per arrow-key press, before scale compensation.
const KEY_PAN_STEP_PX: f64 = 100.0;

/// Zoom factor applied per keyboard zoom step.
const KEY_ZOOM_STEP: f64 = 1.2;

/// What a [`MapEngine::render_frame`] call did.
#[derive(Clone, Debug)]
pub enum FrameOutcome {
    /// A frame was painted; stats describe it.
    Rendered(RenderStats),
    /// The view has no size yet, so nothing was painted. The host should
    /// keep scheduling frames.
    Skipped,
    /// The engine has been stopped. The host should stop scheduling.
    Stopped,
}

/// The interactive seating-map engine.
///
/// One instance per map view. All methods take `&mut self` and run to
/// completion; the host invokes them from a single execution context.
#[derive(Debug)]
pub struct MapEngine {
    index: FlatIndex,
    /// Declared map size from the venue, used as a fit fallback when the
    /// venue has no seats.
    map_hint: Rect,
    camera: Camera,
    selection: HashSet<SeatId>,
    hovered: Option<SeatSlot>,
    drag: DragState,
    running: bool,
    /// Set when a venue arrives; the next sized frame fits it into view.
    needs_fit: bool,
    clock: FrameClock,
    stats: RenderStats,
    margin_px: f64,
}

impl Default for MapEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MapEngine {
    /// Creates a running engine with no venue and a zero-sized view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: FlatIndex::default(),
            map_hint: Rect::ZERO,
            camera: Camera::new(Size::ZERO),
            selection: HashSet::new(),
            hovered: None,
            drag: DragState::default(),
            running: true,
            needs_fit: false,
            clock: FrameClock::default(),
            stats: RenderStats::default(),
            margin_px: CULL_MARGIN_PX,
        }
    }

    /// Supplies (or replaces) the venue to display.
    ///
    /// Rebuilds the flattened geometry index, drops the hovered seat, and
    /// arms a one-shot fit-to-content for the next sized frame. The host's
    /// selection snapshot is kept; stale ids simply stop matching.
    pub fn set_venue(&mut self, venue: &Venue) {
        self.index = FlatIndex::build(venue);
        self.map_hint = venue.map_rect();
        self.hovered = None;
        self.needs_fit = true;
        log::debug!(
            "venue {:?} loaded: {} seats",
            venue.venue_id,
            self.index.len()
        );
    }

    /// Replaces the selection snapshot read during painting.
    pub fn set_selection(&mut self, seats: impl IntoIterator<Item = SeatId>) {
        self.selection = seats.into_iter().collect();
    }

    /// Updates the view size in screen pixels.
    pub fn resize(&mut self, view_size: Size) {
        self.camera.resize(view_size);
    }

    /// Stops the loop. Every later [`render_frame`](Self::render_frame)
    /// call returns [`FrameOutcome::Stopped`] without touching the surface.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.clock.reset();
            log::debug!("render loop stopped");
        }
    }

    /// Whether the loop is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read access to the camera, for hosts that render overlays.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Stats from the most recent rendered frame.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Id of the currently hovered seat, if any.
    #[must_use]
    pub fn hovered_seat(&self) -> Option<&SeatId> {
        self.hovered
            .and_then(|slot| self.index.get(slot))
            .map(|seat| &seat.id)
    }

    /// Fits the venue into the current view.
    ///
    /// Uses the seat bounds when the venue has seats, otherwise the venue's
    /// declared map size. Returns `false` when there is nothing to fit or
    /// the view is too small.
    pub fn fit_to_content(&mut self) -> bool {
        let bounds = self.index.bounds().unwrap_or(self.map_hint);
        self.camera.fit_to_content(bounds, DEFAULT_FIT_PADDING_PX)
    }

    fn maybe_initial_fit(&mut self) {
        if self.needs_fit && !self.index.is_empty() && self.camera.has_view() {
            self.needs_fit = false;
            self.fit_to_content();
        }
    }

    /// Renders one frame onto `surface` and publishes stats for it.
    ///
    /// The host calls this from its paint scheduler and inspects the
    /// outcome to decide whether to schedule another frame.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) -> FrameOutcome {
        if !self.running {
            return FrameOutcome::Stopped;
        }
        if !self.camera.has_view() {
            return FrameOutcome::Skipped;
        }
        self.maybe_initial_fit();

        let start = Instant::now();
        let fps = self.clock.tick(start);

        surface.clear();
        let visible = visible_seats(&self.camera, self.index.seats(), self.margin_px);
        let index = &self.index;
        let selection = &self.selection;
        let rendered = paint_seats(
            surface,
            &self.camera,
            index,
            &visible,
            |slot| index.get(slot).is_some_and(|seat| selection.contains(&seat.id)),
            self.hovered,
        );

        self.stats = RenderStats {
            total_seats: self.index.len(),
            rendered_seats: rendered,
            fps,
            render_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        FrameOutcome::Rendered(self.stats)
    }

    /// Begins a pan drag at a screen position.
    pub fn pointer_down(&mut self, screen: Point) {
        self.drag.start(screen);
    }

    /// Handles pointer motion: pans while dragging, otherwise hit-tests
    /// for hover and reports focus changes.
    pub fn pointer_move(&mut self, screen: Point) -> MapEvents {
        if let Some(delta) = self.drag.update(screen) {
            let scale = self.camera.scale();
            self.camera
                .pan(Vec2::new(-delta.x / scale, -delta.y / scale));
            return MapEvents::new();
        }
        let hit = self.hit_test(screen);
        if hit == self.hovered {
            return MapEvents::new();
        }
        self.hovered = hit;
        let focused = hit
            .and_then(|slot| self.index.get(slot))
            .map(|seat| seat.id.clone());
        smallvec![MapEvent::SeatFocused(focused)]
    }

    /// Ends any active drag.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer left the view: ends any drag and clears the hover.
    pub fn pointer_leave(&mut self) -> MapEvents {
        self.drag.end();
        if self.hovered.take().is_some() {
            smallvec![MapEvent::SeatFocused(None)]
        } else {
            MapEvents::new()
        }
    }

    /// Handles a click at a screen position.
    ///
    /// A hit emits [`MapEvent::SeatClicked`] followed by
    /// [`MapEvent::SeatFocused`]; a miss emits nothing and leaves the
    /// camera alone.
    pub fn click(&mut self, screen: Point) -> MapEvents {
        let Some(slot) = self.hit_test(screen) else {
            return MapEvents::new();
        };
        self.hovered = Some(slot);
        let Some(seat) = self.index.get(slot) else {
            return MapEvents::new();
        };
        let id = seat.id.clone();
        smallvec![
            MapEvent::SeatClicked(id.clone()),
            MapEvent::SeatFocused(Some(id)),
        ]
    }

    /// Handles a wheel tick anchored at a screen position. Positive
    /// `delta_y` (scrolling down) zooms out, negative zooms in; a zero
    /// delta does nothing.
    pub fn wheel(&mut self, anchor: Point, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
        self.camera.zoom_at(anchor, factor);
    }

    /// Handles a keyboard input.
    ///
    /// [`MapKey::Activate`] treats the focused seat as clicked, matching
    /// the pointer path.
    pub fn key(&mut self, key: MapKey) -> MapEvents {
        let step = KEY_PAN_STEP_PX / self.camera.scale();
        match key {
            MapKey::ArrowUp => self.camera.pan(Vec2::new(0.0, -step)),
            MapKey::ArrowDown => self.camera.pan(Vec2::new(0.0, step)),
            MapKey::ArrowLeft => self.camera.pan(Vec2::new(-step, 0.0)),
            MapKey::ArrowRight => self.camera.pan(Vec2::new(step, 0.0)),
            MapKey::FitToContent => {
                self.fit_to_content();
            }
            MapKey::ZoomIn => self.camera.zoom(KEY_ZOOM_STEP),
            MapKey::ZoomOut => self.camera.zoom(1.0 / KEY_ZOOM_STEP),
            MapKey::Activate => return self.activate_hovered(),
        }
        MapEvents::new()
    }

    fn activate_hovered(&mut self) -> MapEvents {
        let Some(seat) = self.hovered.and_then(|slot| self.index.get(slot)) else {
            return MapEvents::new();
        };
        let id = seat.id.clone();
        smallvec![
            MapEvent::SeatClicked(id.clone()),
            MapEvent::SeatFocused(Some(id)),
        ]
    }

    /// Finds the seat under a screen position, if any.
    ///
    /// The pick radius follows the painted seat radius at the current
    /// zoom, so what looks clickable is clickable.
    fn hit_test(&self, screen: Point) -> Option<SeatSlot> {
        let scale = self.camera.scale();
        let world = self.camera.screen_to_world(screen);
        let radius = seat_radius_px(scale) / scale;
        self.index.nearest_within(world, radius)
    }
}

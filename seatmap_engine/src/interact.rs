// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state for pointer-driven panning.

use kurbo::{Point, Vec2};

/// Tracks an active drag gesture in screen coordinates.
///
/// Panning is incremental: each update returns the delta since the last
/// observed position and moves the anchor forward, so a long drag never
/// accumulates floating-point drift against a stale start point.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct DragState {
    last: Option<Point>,
}

impl DragState {
    /// Begins a drag at the given screen position.
    pub(crate) fn start(&mut self, screen: Point) {
        self.last = Some(screen);
    }

    /// Advances the drag to a new position, returning the screen-space
    /// delta since the previous one. `None` while no drag is active.
    pub(crate) fn update(&mut self, screen: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(screen);
        Some(screen - last)
    }

    /// Ends the drag unconditionally. Safe to call when idle.
    pub(crate) fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a drag gesture is active.
    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragState;

    #[test]
    fn updates_are_incremental() {
        let mut drag = DragState::default();
        assert!(!drag.is_active());
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);

        drag.start(Point::new(10.0, 10.0));
        assert_eq!(drag.update(Point::new(15.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
        assert_eq!(drag.update(Point::new(14.0, 16.0)), Some(Vec2::new(-1.0, 4.0)));

        drag.end();
        assert!(!drag.is_active());
        assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn end_is_idempotent() {
        let mut drag = DragState::default();
        drag.end();
        drag.end();
        assert!(!drag.is_active());
    }
}

// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame timing and render statistics.

use std::time::Instant;

/// Snapshot of the most recent frame's throughput.
///
/// Recomputed every rendered frame; it has no identity beyond "latest".
/// Hosts poll it (or read the value returned by
/// [`MapEngine::render_frame`](crate::MapEngine::render_frame)) to drive an
/// observability panel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Seats in the geometry index.
    pub total_seats: usize,
    /// Seats actually painted after culling. Never exceeds `total_seats`.
    pub rendered_seats: usize,
    /// Instantaneous frames per second, from the delta between the last two
    /// frame invocations. Zero until a second frame has run.
    pub fps: f64,
    /// Wall-clock duration of the last render pass, in milliseconds.
    pub render_time_ms: f64,
}

impl RenderStats {
    /// Fraction of seats culled away, in `0.0..=1.0`.
    #[must_use]
    pub fn culling_ratio(&self) -> f64 {
        if self.total_seats == 0 {
            0.0
        } else {
            1.0 - self.rendered_seats as f64 / self.total_seats as f64
        }
    }
}

/// Derives instantaneous frames-per-second from frame invocation times.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    /// Records a frame invocation at `now` and returns the fps implied by
    /// the delta to the previous invocation, or `0.0` for the first frame.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let fps = match self.last_frame {
            Some(last) => {
                let delta = now.duration_since(last).as_secs_f64();
                if delta > 0.0 { 1.0 / delta } else { 0.0 }
            }
            None => 0.0,
        };
        self.last_frame = Some(now);
        fps
    }

    /// Forgets the previous invocation, so the next tick reports `0.0`.
    ///
    /// Called when the loop stops; a later restart should not derive fps
    /// across the gap.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

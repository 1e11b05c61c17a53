// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events produced for the host and the keyboard vocabulary.

use smallvec::SmallVec;

use seatmap_venue::SeatId;

/// Event emitted synchronously from an interaction handler.
///
/// Selection-state ownership lives with the host: the engine reports what
/// was clicked or hovered and the host decides what to do about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapEvent {
    /// A qualifying click (or key activation) landed on a seat.
    SeatClicked(SeatId),
    /// The hovered/focused seat changed; `None` clears it.
    SeatFocused(Option<SeatId>),
}

/// Small event buffer returned from interaction handlers.
///
/// Handlers emit at most two events, so this never allocates in practice.
pub type MapEvents = SmallVec<[MapEvent; 2]>;

/// Keyboard inputs the engine understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MapKey {
    /// Pan the view up.
    ArrowUp,
    /// Pan the view down.
    ArrowDown,
    /// Pan the view left.
    ArrowLeft,
    /// Pan the view right.
    ArrowRight,
    /// Fit the whole venue into the view.
    FitToContent,
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
    /// Activate the focused seat, as a click would.
    Activate,
}

impl MapKey {
    /// Maps a DOM-style key name onto an engine key.
    ///
    /// `+` and `=` both zoom in, matching an unshifted `+` on common
    /// layouts. Unrecognized names are simply not for this engine.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "0" => Some(Self::FitToContent),
            "+" | "=" => Some(Self::ZoomIn),
            "-" => Some(Self::ZoomOut),
            "Enter" | " " => Some(Self::Activate),
            _ => None,
        }
    }
}

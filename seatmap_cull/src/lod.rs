// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-of-detail policy: seat radius and label visibility by zoom scale.

/// Resolved seat radius in pixels for the given camera scale.
///
/// A step function rather than a continuous ramp: seats stay readable
/// across the whole zoom range without shimmering during zoom animations.
#[must_use]
pub fn seat_radius_px(scale: f64) -> f64 {
    if scale < 0.5 {
        2.0
    } else if scale < 1.0 {
        4.0
    } else if scale < 2.0 {
        8.0
    } else {
        12.0
    }
}

/// Whether seat-number labels should render.
///
/// Labels appear only once the view is zoomed in (`scale > 1.5`) and the
/// resolved radius leaves room for legible text (`radius > 6px`).
#[must_use]
pub fn labels_visible(scale: f64, radius_px: f64) -> bool {
    scale > 1.5 && radius_px > 6.0
}

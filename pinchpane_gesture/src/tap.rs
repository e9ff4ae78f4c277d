// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap detection over host-supplied timestamps.
//!
//! ## Usage
//!
//! 1) Call [`TapTracker::on_down`] with the event timestamp on every
//!    pointer-down.
//! 2) Call [`TapTracker::on_up`] on the matching pointer-up; it returns `true`
//!    when a double tap completed within the timing window.
//!
//! ## Minimal example
//!
//! ```
//! use pinchpane_gesture::TapTracker;
//!
//! let mut taps = TapTracker::new();
//!
//! // Two quick taps: 40 ms down, 60 ms gap, 30 ms down.
//! taps.on_down(1000);
//! assert!(!taps.on_up(1040));
//! taps.on_down(1100);
//! assert!(taps.on_up(1130));
//! ```

/// Maximum cumulative down-to-up duration, in milliseconds, for two taps to
/// count as a double tap.
pub const MAX_DOUBLE_TAP_MILLIS: u64 = 200;

/// Debounced double-tap detector.
///
/// The window tracks *cumulative down-to-up durations* across taps, not the
/// gap between taps: a slow first hold can exhaust the window on its own, even
/// if the second tap is fast. Gaps between taps are not counted at all. The
/// tracker never polls a clock; all timing comes from the host's per-event
/// timestamps (monotonic or wall, as long as they are consistent).
#[derive(Clone, Copy, Debug, Default)]
pub struct TapTracker {
    pending: u8,
    window_start: u64,
    accumulated: u64,
}

impl TapTracker {
    /// Creates a tracker with no taps pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-down at `now_ms`.
    ///
    /// At most two taps are pending within one evaluation window; a third
    /// down before evaluation does not grow the count further.
    pub fn on_down(&mut self, now_ms: u64) {
        self.window_start = now_ms;
        if self.pending < 2 {
            self.pending += 1;
        }
    }

    /// Records the matching pointer-up at `now_ms`.
    ///
    /// Returns `true` when this up completes a double tap: two taps are
    /// pending and their cumulative held duration is at most
    /// [`MAX_DOUBLE_TAP_MILLIS`]. Whenever two taps are evaluated the tracker
    /// resets, successful or not, so a third tap starts a fresh window.
    pub fn on_up(&mut self, now_ms: u64) -> bool {
        self.accumulated += now_ms.saturating_sub(self.window_start);
        if self.pending < 2 {
            return false;
        }
        let complete = self.accumulated <= MAX_DOUBLE_TAP_MILLIS;
        self.pending = 0;
        self.accumulated = 0;
        complete
    }

    /// Number of taps pending in the current window (0, 1, or 2).
    ///
    /// Inspection hook; surfaced through
    /// `PinchZoomController::debug_info` as `tap_pending`.
    #[must_use]
    pub fn pending(&self) -> u8 {
        self.pending
    }
}

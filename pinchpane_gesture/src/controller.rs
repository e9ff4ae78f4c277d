// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use pinchpane_surface::{SurfaceTransform, clamp_drag_delta, fit};

use crate::mode::GestureMode;
use crate::tap::TapTracker;

/// Host-assigned pointer identifier.
pub type PointerId = u64;

/// Pointer-gesture-driven pan/zoom controller for one content/viewport
/// pairing.
///
/// The controller owns the live [`SurfaceTransform`], the [`GestureMode`],
/// and the double-tap state. It consumes a normalized pointer/gesture event
/// stream from the host and produces a transform for the host renderer to
/// apply; it performs no rendering, hit testing, or clock polling of its own.
///
/// Pointer roles (primary vs secondary) are tracked by an explicit
/// pointer-id mapping rather than event order, so events from untracked
/// pointers are ignored rather than misattributed.
///
/// All state is private to one instance; the host is expected to deliver
/// events serialized on a single logical timeline.
#[derive(Clone, Debug)]
pub struct PinchZoomController {
    viewport: Size,
    content: Size,
    fitted: Size,
    transform: SurfaceTransform,
    user_scale: f64,
    min_scale: f64,
    max_scale: f64,
    mode: GestureMode,
    tap: TapTracker,
    primary: Option<PointerId>,
    secondary: Option<PointerId>,
    reference: Option<Point>,
}

impl PinchZoomController {
    /// Creates a controller with the identity transform, no active gesture,
    /// and user-scale limits of `(0.5, 2.0)`.
    ///
    /// The transform stays identity until the first [`Self::on_layout`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Size::ZERO,
            content: Size::ZERO,
            fitted: Size::ZERO,
            transform: SurfaceTransform::IDENTITY,
            user_scale: 1.0,
            min_scale: 0.5,
            max_scale: 2.0,
            mode: GestureMode::None,
            tap: TapTracker::new(),
            primary: None,
            secondary: None,
            reference: None,
        }
    }

    /// Sets the user-scale limits.
    ///
    /// Rejects the pair unless both values are finite and
    /// `min_scale < max_scale` strictly; on rejection the prior limits are
    /// retained. Returns whether the new limits were accepted. Limits apply
    /// to future scale proposals; an already-committed user scale is left
    /// untouched.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) -> bool {
        if !(min_scale.is_finite() && max_scale.is_finite() && min_scale < max_scale) {
            return false;
        }
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        true
    }

    /// Supplies fresh viewport and content dimensions and commits the fit
    /// transform.
    ///
    /// Called whenever the host (re)measures the viewport or swaps content.
    /// Resets the user scale to `1.0` ("fit, no additional zoom").
    /// Idempotent: identical inputs produce an identical transform.
    ///
    /// Precondition: both sizes have positive, finite dimensions (see
    /// [`pinchpane_surface::fit`]).
    pub fn on_layout(&mut self, viewport: Size, content: Size) {
        self.viewport = viewport;
        self.content = content;
        self.reset_to_fit();
    }

    /// Primary pointer down: enters [`GestureMode::Drag`] and records the
    /// drag reference point. Feeds the double-tap tracker.
    pub fn on_pointer_down(&mut self, id: PointerId, pos: Point, now_ms: u64) {
        self.tap.on_down(now_ms);
        self.primary = Some(id);
        self.reference = Some(pos);
        self.mode = GestureMode::Drag;
    }

    /// A second pointer down while the first is held: enters
    /// [`GestureMode::Zoom`] and resets the reference to the secondary
    /// pointer's position.
    pub fn on_secondary_pointer_down(&mut self, id: PointerId, pos: Point) {
        self.secondary = Some(id);
        self.reference = Some(pos);
        self.mode = GestureMode::Zoom;
    }

    /// Pointer move for a tracked pointer.
    ///
    /// While zooming, or while dragging with the user scale above the
    /// minimum, the move delta is clamped against content edges and applied
    /// to the translation — but only when the user scale is above `1.0`;
    /// dragging at or below fit scale never pans. Moves outside those modes
    /// mutate nothing, and the reference point is left as-is until the next
    /// eligible move.
    pub fn on_pointer_move(&mut self, id: PointerId, pos: Point) {
        if self.primary != Some(id) && self.secondary != Some(id) {
            return;
        }
        let eligible = self.mode == GestureMode::Zoom
            || (self.mode == GestureMode::Drag && self.user_scale > self.min_scale);
        if !eligible {
            return;
        }
        let Some(reference) = self.reference else {
            self.reference = Some(pos);
            return;
        };

        let delta = clamp_drag_delta(
            pos - reference,
            self.transform.translation,
            self.fitted,
            self.user_scale,
            self.viewport,
        );
        if self.user_scale > 1.0 {
            self.transform.then_translate(delta);
        }
        self.reference = Some(pos);
    }

    /// Primary pointer up (last pointer lifted).
    ///
    /// Evaluates the double-tap tracker and, on completion, resets to the fit
    /// transform. Unconditionally returns to [`GestureMode::None`] and clears
    /// pointer tracking. An up for the secondary pointer is routed to
    /// [`Self::on_secondary_pointer_up`] instead.
    pub fn on_pointer_up(&mut self, id: PointerId, now_ms: u64) {
        if self.secondary == Some(id) {
            self.on_secondary_pointer_up(id);
            return;
        }
        if self.primary != Some(id) {
            return;
        }
        self.primary = None;
        self.secondary = None;
        self.reference = None;
        if self.tap.on_up(now_ms) {
            self.reset_to_fit();
        }
        self.mode = GestureMode::None;
    }

    /// Secondary pointer up with the primary still held.
    ///
    /// Drops to [`GestureMode::None`], not back to `Drag`: single-finger
    /// panning only resumes on a fresh pointer-down.
    pub fn on_secondary_pointer_up(&mut self, id: PointerId) {
        if self.secondary != Some(id) {
            return;
        }
        self.secondary = None;
        self.mode = GestureMode::None;
    }

    /// Pinch recognizer began: forces [`GestureMode::Zoom`] regardless of the
    /// current mode.
    pub fn on_scale_begin(&mut self) {
        self.mode = GestureMode::Zoom;
    }

    /// Pinch scale update from the host's gesture recognizer.
    ///
    /// The proposal `user_scale * factor` is accepted only strictly inside
    /// the configured limits — a proposal exactly at a bound is rejected, not
    /// clamped. On acceptance the scale is composed about a pivot: the
    /// viewport center while the scaled content still fits the viewport on
    /// either axis, the gesture focus point otherwise. On rejection nothing
    /// mutates; a later factor may bring the proposal back into range.
    ///
    /// Returns whether the proposal was accepted.
    pub fn on_scale(&mut self, focus: Point, factor: f64) -> bool {
        let proposed = self.user_scale * factor;
        if !(proposed > self.min_scale && proposed < self.max_scale) {
            return false;
        }
        self.user_scale = proposed;

        let scaled_w = self.fitted.width * self.user_scale;
        let scaled_h = self.fitted.height * self.user_scale;
        let pivot = if scaled_w <= self.viewport.width || scaled_h <= self.viewport.height {
            Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
        } else {
            focus
        };
        self.transform.scale_about(factor, pivot);
        true
    }

    /// The live content-to-viewport transform, for the host renderer to apply
    /// each frame.
    #[must_use]
    pub fn transform(&self) -> SurfaceTransform {
        self.transform
    }

    /// The currently active gesture mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// The zoom multiplier on top of the fit scale (`1.0` = no zoom).
    #[must_use]
    pub fn user_scale(&self) -> f64 {
        self.user_scale
    }

    /// The configured `(min, max)` user-scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Content size at fit scale, before any user zoom.
    #[must_use]
    pub fn fitted_size(&self) -> Size {
        self.fitted
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            viewport: self.viewport,
            content: self.content,
            fitted: self.fitted,
            transform: self.transform,
            user_scale: self.user_scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            mode: self.mode,
            tap_pending: self.tap.pending(),
            overflow: Vec2::new(
                self.fitted.width * self.user_scale - self.viewport.width,
                self.fitted.height * self.user_scale - self.viewport.height,
            ),
        }
    }

    fn reset_to_fit(&mut self) {
        let result = fit(self.content, self.viewport);
        self.transform = result.transform;
        self.fitted = result.fitted;
        self.user_scale = 1.0;
    }
}

impl Default for PinchZoomController {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`PinchZoomController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Viewport size from the last layout.
    pub viewport: Size,
    /// Intrinsic content size from the last layout.
    pub content: Size,
    /// Content size at fit scale.
    pub fitted: Size,
    /// Live content-to-viewport transform.
    pub transform: SurfaceTransform,
    /// Zoom multiplier on top of the fit scale.
    pub user_scale: f64,
    /// Minimum user scale (exclusive bound for proposals).
    pub min_scale: f64,
    /// Maximum user scale (exclusive bound for proposals).
    pub max_scale: f64,
    /// Currently active gesture mode.
    pub mode: GestureMode,
    /// Taps pending in the current double-tap window (0, 1, or 2).
    pub tap_pending: u8,
    /// Excess of scaled content over viewport per axis; zero or negative
    /// means the content fits on that axis.
    pub overflow: Vec2,
}

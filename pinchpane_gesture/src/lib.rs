// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchpane_gesture --heading-base-level=0

//! Pinchpane Gesture: a pointer gesture state machine for pan/zoom surfaces.
//!
//! This crate interprets a normalized pointer/gesture event stream into
//! updates of a `pinchpane_surface` transform:
//!
//! - [`PinchZoomController`]: the top-level state machine. Owns the live
//!   transform, the [`GestureMode`], and the double-tap state for one
//!   content/viewport pairing.
//! - [`TapTracker`]: debounced double-tap detection over host-supplied
//!   timestamps.
//!
//! The controller is headless and synchronous: every event is processed to
//! completion before the next, no clock is polled, and no rendering happens
//! here. Hosts are expected to:
//! - Capture platform pointer events, classify primary vs secondary
//!   pointers, and deliver them with per-event millisecond timestamps.
//! - Run a platform pinch recognizer and forward its focus point and scale
//!   factor (the controller does not infer pinch geometry from raw
//!   positions).
//! - Read [`PinchZoomController::transform`] each frame and apply it to the
//!   rendered surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinchpane_gesture::{GestureMode, PinchZoomController};
//!
//! let mut ctl = PinchZoomController::new();
//! ctl.on_layout(Size::new(800.0, 600.0), Size::new(400.0, 400.0));
//!
//! // Pinch in to 1.5x, then drag.
//! ctl.on_scale_begin();
//! assert!(ctl.on_scale(Point::new(400.0, 300.0), 1.5));
//!
//! ctl.on_pointer_down(1, Point::new(400.0, 300.0), 1000);
//! ctl.on_pointer_move(1, Point::new(380.0, 290.0));
//! ctl.on_pointer_up(1, 1100);
//! assert_eq!(ctl.mode(), GestureMode::None);
//! ```
//!
//! ## Gesture lifecycle
//!
//! - Primary pointer down enters [`GestureMode::Drag`]; a second pointer (or
//!   the pinch recognizer) enters [`GestureMode::Zoom`].
//! - Drag deltas are clamped so content never scrolls fully out of view, and
//!   only pan at all once the user scale exceeds `1.0`.
//! - Pinch proposals are accepted only strictly inside the configured scale
//!   limits; a proposal exactly at a bound is rejected, not clamped.
//! - Two taps whose cumulative held duration fits a 200 ms window reset the
//!   transform to the fit-to-viewport state.
//! - Releasing the secondary pointer drops the mode to `None`, not back to
//!   `Drag`; a fresh pointer-down restarts panning.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod mode;
mod tap;

pub use controller::{ControllerDebugInfo, PinchZoomController, PointerId};
pub use mode::GestureMode;
pub use tap::{MAX_DOUBLE_TAP_MILLIS, TapTracker};

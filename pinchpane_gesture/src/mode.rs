// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Active gesture classification for a [`crate::PinchZoomController`].
///
/// Exactly one mode is active at a time. The mode is transient, driven solely
/// by pointer-event arrival, and returns to `None` whenever all pointers are
/// lifted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureMode {
    /// No pointers are active.
    #[default]
    None,
    /// One pointer is down; eligible to pan.
    Drag,
    /// Two or more pointers are down (or the pinch recognizer fired);
    /// eligible to pinch-scale.
    Zoom,
}

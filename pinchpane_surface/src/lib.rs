// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pinchpane_surface --heading-base-level=0

//! Pinchpane Surface: transform primitives for panning/zooming image surfaces.
//!
//! This crate provides the headless geometry side of a pinch-zoom surface:
//! - [`SurfaceTransform`]: a uniform scale + translation mapping content
//!   coordinates into viewport coordinates, with scale-about-pivot
//!   composition and conversion to [`kurbo::Affine`].
//! - [`fit`]: the transform that places content centered in the viewport at
//!   the initial "no zoom" scale.
//! - [`clamp_drag_delta`]: clamps a proposed pan delta so the content never
//!   scrolls fully out of view.
//!
//! It does **not** interpret input events or own gesture state. Callers are
//! expected to:
//! - Track pointer/gesture lifecycles at a higher layer (for example with
//!   `pinchpane_gesture`).
//! - Apply the resulting [`SurfaceTransform`] to their own rendered surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchpane_surface::{clamp_drag_delta, fit};
//!
//! // 400x400 content in an 800x600 viewport.
//! let result = fit(Size::new(400.0, 400.0), Size::new(800.0, 600.0));
//! assert_eq!(result.transform.scale, 1.5);
//! assert_eq!(result.transform.translation, Vec2::new(100.0, 0.0));
//!
//! // At 2x user zoom the content overflows; a large drag is edge-pinned.
//! let delta = clamp_drag_delta(
//!     Vec2::new(-1000.0, 0.0),
//!     Vec2::ZERO,
//!     result.fitted,
//!     2.0,
//!     Size::new(800.0, 600.0),
//! );
//! assert_eq!(delta.x, -400.0);
//! ```
//!
//! ## Design notes
//!
//! - The fit scale comes from a single axis selected by whichever viewport
//!   dimension is larger (see [`fit`]); it is deliberately not a "contain"
//!   fit.
//! - Scaled dimensions are rounded to whole pixels before edge comparisons,
//!   and an axis only counts as "free" under a strict `<` test. Both choices
//!   are load-bearing for the clamp behavior and pinned by tests.
//! - All inputs are assumed well-formed; zero-sized viewports or content are
//!   a documented precondition violation and produce non-finite results.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod fit;
mod transform;

pub use clamp::clamp_drag_delta;
pub use fit::{FitResult, fit};
pub use transform::SurfaceTransform;

// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::transform::SurfaceTransform;

/// Result of fitting content into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// Transform placing the fitted content centered in the viewport.
    pub transform: SurfaceTransform,
    /// Content size after the fit scale is applied.
    pub fitted: Size,
}

/// Computes the transform that places `content` centered in `viewport` at the
/// "no zoom" fit scale.
///
/// The fit scale is taken from a single axis, chosen by whichever *viewport*
/// dimension is larger: `viewport.height / content.height` for landscape
/// viewports, `viewport.width / content.width` otherwise. This is **not** an
/// aspect-ratio-preserving "contain" rule — content whose aspect ratio differs
/// from the viewport's may overflow the other axis at fit scale. The rule is
/// kept as-is because every downstream clamp and reset scenario is calibrated
/// against it; callers wanting true letterbox fitting must adapt.
///
/// Precondition: both sizes have positive, finite dimensions. Degenerate input
/// produces non-finite components which persist until the next valid fit.
#[must_use]
pub fn fit(content: Size, viewport: Size) -> FitResult {
    let scale = if viewport.width > viewport.height {
        viewport.height / content.height
    } else {
        viewport.width / content.width
    };

    let fitted = Size::new(content.width * scale, content.height * scale);
    let translation = Vec2::new(
        (viewport.width - fitted.width) / 2.0,
        (viewport.height - fitted.height) / 2.0,
    );

    FitResult {
        transform: SurfaceTransform::new(scale, translation),
        fitted,
    }
}

// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale + translation mapping content coordinates into viewport
/// coordinates.
///
/// A content point `(x, y)` maps to the viewport point
/// `(x * scale + translation.x, y * scale + translation.y)`. Rotation and
/// skew are intentionally not representable; pan/zoom surfaces only ever
/// compose uniform scales and translations, and keeping the components
/// explicit makes clamping against content edges direct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    /// Uniform scale factor applied to both axes.
    pub scale: f64,
    /// Translation applied after scaling, in viewport coordinates.
    pub translation: Vec2,
}

impl SurfaceTransform {
    /// The identity transform: scale `1.0`, zero translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a scale factor and a translation.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Maps a content-space point into viewport coordinates.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translation.x,
            pt.y * self.scale + self.translation.y,
        )
    }

    /// Post-composes a translation by `delta` in viewport coordinates.
    pub fn then_translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Post-composes a uniform scale by `factor` about `pivot` (in viewport
    /// coordinates).
    ///
    /// The pivot's mapped location is preserved: any content point that
    /// currently lands on `pivot` still lands on `pivot` afterwards.
    pub fn scale_about(&mut self, factor: f64, pivot: Point) {
        let pivot = pivot.to_vec2();
        self.scale *= factor;
        self.translation = (self.translation - pivot) * factor + pivot;
    }

    /// Returns the equivalent [`kurbo::Affine`], for hosts that hand the
    /// transform straight to a renderer.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

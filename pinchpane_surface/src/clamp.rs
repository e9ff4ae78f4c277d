// Copyright 2025 the Pinchpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Size, Vec2};

/// Clamps a proposed drag delta so scaled content never scrolls fully out of
/// the viewport.
///
/// `translation` is the transform's current translation, `fitted` the content
/// size at fit scale, and `user_scale` the zoom multiplier on top of fit.
/// The scaled dimensions are rounded to whole device pixels before the
/// comparisons below.
///
/// An axis is "free" only when its rounded scaled dimension is strictly less
/// than the viewport dimension (`<`, not `<=`). When both axes are free no
/// clamping applies. When exactly one is free, the free axis's delta is forced
/// to zero and the other axis is edge-pinned; when neither is free, both are
/// edge-pinned: a delta that would push the leading content edge past the
/// viewport origin lands it exactly at `0`, and one that would pull the
/// trailing edge inside the viewport lands it exactly at `-overflow`, where
/// `overflow = scaled_dim - viewport_dim`.
///
/// Guarantee: on any axis where scaled content exceeds the viewport, the
/// clamped translation stays within `[-overflow, 0]` — the viewport remains
/// fully covered, with no gap at either edge.
#[must_use]
pub fn clamp_drag_delta(
    delta: Vec2,
    translation: Vec2,
    fitted: Size,
    user_scale: f64,
    viewport: Size,
) -> Vec2 {
    let scaled_w = (fitted.width * user_scale).round();
    let scaled_h = (fitted.height * user_scale).round();

    let mut dx = delta.x;
    let mut dy = delta.y;
    let mut limit_x = false;
    let mut limit_y = false;

    if !(scaled_w < viewport.width && scaled_h < viewport.height) {
        if scaled_w < viewport.width {
            dx = 0.0;
            limit_y = true;
        } else if scaled_h < viewport.height {
            dy = 0.0;
            limit_x = true;
        } else {
            limit_x = true;
            limit_y = true;
        }
    }

    if limit_y {
        let overflow = scaled_h - viewport.height;
        if translation.y + dy > 0.0 {
            dy = -translation.y;
        } else if translation.y + dy < -overflow {
            dy = -(translation.y + overflow);
        }
    }

    if limit_x {
        let overflow = scaled_w - viewport.width;
        if translation.x + dx > 0.0 {
            dx = -translation.x;
        } else if translation.x + dx < -overflow {
            dx = -(translation.x + overflow);
        }
    }

    Vec2::new(dx, dy)
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::clamp_drag_delta;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[test]
    fn both_axes_fit_passes_delta_through() {
        // 500x300 scaled content inside an 800x600 viewport: unconstrained.
        let delta = clamp_drag_delta(
            Vec2::new(40.0, -25.0),
            Vec2::new(150.0, 150.0),
            Size::new(500.0, 300.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta, Vec2::new(40.0, -25.0));
    }

    #[test]
    fn overshoot_pins_to_trailing_edge() {
        // scaled_w = 1000, overflow = 200; from -50, a -300 drag pins to -200.
        let delta = clamp_drag_delta(
            Vec2::new(-300.0, 0.0),
            Vec2::new(-50.0, 0.0),
            Size::new(1000.0, 600.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta.x, -150.0);
        assert_eq!(-50.0 + delta.x, -200.0);
    }

    #[test]
    fn overshoot_pins_to_leading_edge() {
        // From -50, a +120 drag would leave a gap at the left edge; pin to 0.
        let delta = clamp_drag_delta(
            Vec2::new(120.0, 0.0),
            Vec2::new(-50.0, 0.0),
            Size::new(1000.0, 600.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta.x, 50.0);
    }

    #[test]
    fn in_range_delta_is_untouched() {
        let delta = clamp_drag_delta(
            Vec2::new(-60.0, 0.0),
            Vec2::new(-50.0, 0.0),
            Size::new(1000.0, 600.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta.x, -60.0);
    }

    #[test]
    fn free_horizontal_axis_zeroes_horizontal_delta() {
        // Width fits (700 < 800), height overflows (700 > 600): the
        // horizontal delta is dropped and the vertical axis is pinned.
        let delta = clamp_drag_delta(
            Vec2::new(30.0, -500.0),
            Vec2::new(50.0, -20.0),
            Size::new(700.0, 700.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta.x, 0.0);
        // overflow = 100; from -20, pin to -100.
        assert_eq!(delta.y, -80.0);
    }

    #[test]
    fn free_vertical_axis_zeroes_vertical_delta() {
        let delta = clamp_drag_delta(
            Vec2::new(-500.0, 30.0),
            Vec2::new(-20.0, 50.0),
            Size::new(900.0, 500.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta.y, 0.0);
        assert_eq!(delta.x, -80.0);
    }

    #[test]
    fn exact_viewport_size_is_limited_not_free() {
        // Strict `<`: content exactly the viewport size counts as limited,
        // so translation is pinned to [0, 0] with zero overflow.
        let delta = clamp_drag_delta(
            Vec2::new(10.0, -10.0),
            Vec2::ZERO,
            Size::new(800.0, 600.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn scaled_dimensions_are_rounded() {
        // 799.6 rounds to 800, flipping the width from free to limited.
        let delta = clamp_drag_delta(
            Vec2::new(10.0, 0.0),
            Vec2::ZERO,
            Size::new(799.6, 600.0),
            1.0,
            VIEWPORT,
        );
        assert_eq!(delta.x, 0.0);
    }

    #[test]
    fn user_scale_drives_the_overflow() {
        // fitted 600x600 at user_scale 2.0 -> 1200x1200; overflow 400/600.
        let delta = clamp_drag_delta(
            Vec2::new(-1000.0, -1000.0),
            Vec2::ZERO,
            Size::new(600.0, 600.0),
            2.0,
            VIEWPORT,
        );
        assert_eq!(delta, Vec2::new(-400.0, -600.0));
    }

    #[test]
    fn no_gap_invariant_over_random_walk() {
        // Repeated arbitrary drags keep translation within [-overflow, 0] on
        // both axes once content overflows the viewport.
        let fitted = Size::new(600.0, 600.0);
        let user_scale = 2.0;
        let overflow_x = 1200.0 - VIEWPORT.width;
        let overflow_y = 1200.0 - VIEWPORT.height;

        let mut translation = Vec2::ZERO;
        let mut seed = 0x2545_f491_4f6c_dd1d_u64;
        for _ in 0..200 {
            // xorshift; spread into [-250, 250).
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let dx = ((seed % 500) as f64) - 250.0;
            let dy = (((seed >> 16) % 500) as f64) - 250.0;

            let clamped = clamp_drag_delta(
                Vec2::new(dx, dy),
                translation,
                fitted,
                user_scale,
                VIEWPORT,
            );
            translation += clamped;

            assert!(translation.x <= 0.0, "gap opened at left edge");
            assert!(translation.x >= -overflow_x, "gap opened at right edge");
            assert!(translation.y <= 0.0, "gap opened at top edge");
            assert!(translation.y >= -overflow_y, "gap opened at bottom edge");
        }
    }
}

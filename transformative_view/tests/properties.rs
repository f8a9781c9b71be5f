// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for drag composition and bounds correction.

use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use proptest::prelude::*;
use transformative_view::{
    PointerEvent, PointerEventKind, RevertToggles, TransformConfig, TransformativeView,
};

const VIEWPORT: Size = Size::new(100.0, 100.0);

type Sink = fn(Affine, Rect);

fn view(content: Size) -> TransformativeView<Sink> {
    let config = TransformConfig::default().with_revert(RevertToggles::all());
    let mut view = TransformativeView::new(config, (|_, _| {}) as Sink);
    view.set_content(Some(content));
    view.layout(VIEWPORT);
    view
}

fn event(kind: PointerEventKind, points: &[Point]) -> PointerEvent {
    PointerEvent::new(kind, points.iter().copied())
}

fn content_strategy() -> impl Strategy<Value = Size> {
    (20.0f64..=400.0, 20.0f64..=400.0).prop_map(|(w, h)| Size::new(w, h))
}

fn drag_path_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-200.0f64..=200.0, -200.0f64..=200.0), 1..20)
}

/// Checks that on each axis the content either covers the viewport or is
/// centered in it.
fn assert_at_rest(rect: Rect) -> Result<(), TestCaseError> {
    for (min, max, extent) in [
        (rect.x0, rect.x1, VIEWPORT.width),
        (rect.y0, rect.y1, VIEWPORT.height),
    ] {
        if max - min >= extent - 1e-6 {
            prop_assert!(min <= 1e-6 && max >= extent - 1e-6, "gap in {rect:?}");
        } else {
            prop_assert!(((min + max) / 2.0 - extent / 2.0).abs() < 1e-6, "off center {rect:?}");
        }
    }
    Ok(())
}

proptest! {
    /// Property: a single finger only ever translates, by the total finger motion.
    #[test]
    fn prop_single_finger_translation(content in content_strategy(), path in drag_path_strategy()) {
        let mut v = view(content);
        let home = v.transform();
        let start = Point::new(50.0, 50.0);

        v.on_pointer_event(&event(PointerEventKind::Down, &[start]));
        let mut last = start;
        for &(x, y) in &path {
            last = Point::new(x, y);
            v.on_pointer_event(&event(PointerEventKind::Move, &[last]));
        }

        let [a0, b0, c0, d0, e0, f0] = home.as_coeffs();
        let [a, b, c, d, e, f] = v.transform().as_coeffs();
        prop_assert_eq!([a, b, c, d], [a0, b0, c0, d0]);
        let moved = Vec2::new(e - e0, f - f0);
        prop_assert!((moved - (last - start)).hypot() < 1e-6);
    }

    /// Property: after a revert the content is at rest, and releasing again
    /// without moving does not start another revert.
    #[test]
    fn prop_correction_is_idempotent(
        content in content_strategy(),
        (dx, dy) in (-300.0f64..=300.0, -300.0f64..=300.0),
        spread in 10.0f64..=200.0,
        angle in -179.0f64..=179.0,
    ) {
        let mut v = view(content);
        let center = Point::new(50.0, 50.0);

        v.on_pointer_event(&event(PointerEventKind::Down, &[center]));
        v.on_pointer_event(&event(PointerEventKind::Move, &[center + Vec2::new(dx, dy)]));

        let before = Vec2::new(20.0, 0.0);
        let after = Vec2::from_angle(angle.to_radians()) * (spread / 2.0);
        v.on_pointer_event(&event(PointerEventKind::Down, &[center - before, center + before]));
        v.on_pointer_event(&event(PointerEventKind::Move, &[center - after, center + after]));
        v.on_pointer_event(&event(PointerEventKind::Up, &[center]));

        let mut frames = 0;
        while v.tick(Duration::from_millis(16)) {
            frames += 1;
            prop_assert!(frames < 1000);
        }
        assert_at_rest(v.content_rect())?;

        let rested = v.transform();
        v.on_pointer_event(&event(PointerEventKind::Down, &[center]));
        v.on_pointer_event(&event(PointerEventKind::Up, &[center]));
        prop_assert!(!v.is_reverting());
        prop_assert_eq!(v.transform(), rested);
    }
}

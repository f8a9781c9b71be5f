// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use transformative_bounds::{BoundsInput, BoundsPolicy, RevertToggles, ScaleLimits};
use transformative_gesture::{GestureRecognizer, GestureStep, PointerEvent, PointerEventKind};
use transformative_view::ScaleCenter;

const CONTENT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

/// Two fingers circling the content center while spreading apart.
fn pinch_rotate_path(steps: usize) -> Vec<PointerEvent> {
    let center = Point::new(200.0, 150.0);
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let half = Vec2::from_angle(t * core::f64::consts::PI) * (40.0 + 60.0 * t);
            PointerEvent::new(PointerEventKind::Move, [center - half, center + half])
        })
        .collect()
}

fn drag_path(steps: usize) -> Vec<PointerEvent> {
    (0..steps)
        .map(|i| {
            let x = i as f64 * 1.5;
            PointerEvent::new(PointerEventKind::Move, [Point::new(x, x * 0.5)])
        })
        .collect()
}

fn run(recognizer: &mut GestureRecognizer, down: &PointerEvent, moves: &[PointerEvent]) -> Affine {
    let mut transform = Affine::IDENTITY;
    recognizer.handle(down, transform, Some(CONTENT));
    for event in moves {
        if let GestureStep::Moved { transform: next, .. } =
            recognizer.handle(event, transform, Some(CONTENT))
        {
            transform = next;
        }
    }
    transform
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformative_gesture");

    for &steps in &[16_usize, 256] {
        let moves = drag_path(steps);
        let down = PointerEvent::new(PointerEventKind::Down, [Point::ZERO]);
        group.bench_function(format!("drag(moves={steps})"), |b| {
            b.iter_batched(
                GestureRecognizer::default,
                |mut recognizer| black_box(run(&mut recognizer, &down, &moves)),
                BatchSize::SmallInput,
            );
        });

        let moves = pinch_rotate_path(steps);
        let down = PointerEvent::new(
            PointerEventKind::Down,
            [Point::new(160.0, 150.0), Point::new(240.0, 150.0)],
        );
        for (label, center) in [
            ("content_center", ScaleCenter::ContentCenter),
            ("finger_midpoint", ScaleCenter::FingerMidpoint),
        ] {
            group.bench_function(format!("pinch_rotate({label},moves={steps})"), |b| {
                b.iter_batched(
                    || GestureRecognizer::new(center),
                    |mut recognizer| black_box(run(&mut recognizer, &down, &moves)),
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformative_bounds");
    let viewport = Size::new(320.0, 480.0);
    let mut limits = ScaleLimits::default();
    limits.fit(CONTENT.size(), viewport);
    let policy = BoundsPolicy::new(limits, RevertToggles::all(), ScaleCenter::ContentCenter);

    let released = Affine::rotate_about(0.7, CONTENT.center())
        .then_scale_about(2.6, CONTENT.center())
        .then_translate(Vec2::new(-90.0, 40.0));
    let input = BoundsInput {
        transform: released,
        scale_factor: 2.6,
        content_bounds: CONTENT,
        viewport,
        finger_midpoint: Point::new(160.0, 240.0),
    };

    group.bench_function("correct(all_toggles)", |b| {
        b.iter(|| black_box(policy.correct(black_box(&input))));
    });

    let at_rest = policy.correct(&input);
    let input = BoundsInput {
        transform: at_rest.transform,
        scale_factor: at_rest.scale_factor,
        ..input
    };
    group.bench_function("correct(at_rest)", |b| {
        b.iter(|| black_box(policy.correct(black_box(&input))));
    });

    group.finish();
}

criterion_group!(benches, bench_gesture, bench_bounds);
criterion_main!(benches);

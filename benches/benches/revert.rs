// Copyright 2025 the Transformative Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Size};
use transformative_view::{
    PointerEvent, PointerEventKind, RevertToggles, TransformConfig, TransformativeView,
};

type Sink = fn(Affine, Rect);

/// A view released off to the side, with a revert about to run.
fn released_view(duration: Duration) -> TransformativeView<Sink> {
    let config = TransformConfig::default()
        .with_revert(RevertToggles::all())
        .with_revert_duration(duration);
    let mut view = TransformativeView::new(config, (|_, _| {}) as Sink);
    view.set_content(Some(Size::new(400.0, 300.0)));
    view.layout(Size::new(320.0, 480.0));

    let at = |x, y| [Point::new(x, y)];
    view.on_pointer_event(&PointerEvent::new(PointerEventKind::Down, at(100.0, 100.0)));
    view.on_pointer_event(&PointerEvent::new(PointerEventKind::Move, at(260.0, 300.0)));
    view.on_pointer_event(&PointerEvent::new(PointerEventKind::Up, at(260.0, 300.0)));
    view
}

fn bench_revert(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformative_revert");
    let frame = Duration::from_micros(16_667);

    for &millis in &[300_u64, 1_000] {
        group.bench_function(format!("tick_to_completion(duration={millis}ms)"), |b| {
            b.iter_batched(
                || released_view(Duration::from_millis(millis)),
                |mut view| {
                    let mut frames = 0_u32;
                    while view.tick(frame) {
                        frames += 1;
                    }
                    black_box((frames, view.transform()));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_revert);
criterion_main!(benches);

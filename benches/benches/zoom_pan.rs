// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_zoom_pan::{
    AnchorBasis, ZoomPanConfig, ZoomPanController, ZoomTransform, legal_translation_bounds,
};

fn controller(basis: AnchorBasis) -> ZoomPanController {
    let config = ZoomPanConfig::builder(Size::new(1_170.0, 2_532.0))
        .scale_limits(1.0, 5.0)
        .double_tap_scale(2.0)
        .anchor_basis(basis)
        .build()
        .expect("valid benchmark configuration");
    let mut c = ZoomPanController::new(config);
    c.set_content_size(Size::new(1_170.0, 877.5));
    c
}

/// Sequence of `n` pinch magnifications sweeping past both scale limits.
fn pinch_samples(n: u32) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| 0.5 + 6.0 * f64::from(i) / f64::from(n))
}

fn bench_zoom_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom_pan");
    group.sample_size(50);

    group.bench_function("anchored_rescale", |b| {
        let basis = ZoomTransform::from_scale_translation(2.0, Vec2::new(-300.0, -120.0));
        b.iter(|| {
            black_box(ZoomTransform::anchored_rescale(
                black_box(1.37),
                black_box(Point::new(412.0, 980.0)),
                black_box(basis),
            ))
        });
    });

    group.bench_function("legal_translation_bounds", |b| {
        b.iter(|| {
            black_box(legal_translation_bounds(
                black_box(Size::new(1_170.0, 877.5)),
                black_box(Size::new(1_170.0, 2_532.0)),
                black_box(3.2),
                AnchorBasis::NaturalLayout,
            ))
        });
    });

    for basis in [AnchorBasis::NaturalLayout, AnchorBasis::Viewport] {
        for &n in &[16_u32, 256_u32] {
            group.bench_function(format!("pinch_gesture({basis:?},samples={n})"), |b| {
                b.iter_batched(
                    || controller(basis),
                    |mut zoom| {
                        let anchor = Point::new(585.0, 1_266.0);
                        for m in pinch_samples(n) {
                            zoom.on_pinch_changed(m, anchor);
                        }
                        zoom.on_pinch_ended(6.5, anchor);
                        black_box(zoom.settled_transform());
                    },
                    BatchSize::SmallInput,
                );
            });

            group.bench_function(format!("pan_gesture({basis:?},samples={n})"), |b| {
                b.iter_batched(
                    || {
                        let mut zoom = controller(basis);
                        zoom.on_double_tap(Point::new(585.0, 1_266.0));
                        zoom
                    },
                    |mut zoom| {
                        for i in 0..n {
                            let d = f64::from(i) * 3.0;
                            zoom.on_pan_changed(Vec2::new(d, -d));
                        }
                        zoom.on_pan_ended();
                        black_box(zoom.settled_transform());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_zoom_pan);
criterion_main!(benches);

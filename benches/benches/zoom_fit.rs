// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use easel_zoom::{
    Viewport, ZoomConfig, ZoomDirection, ZoomLadder, ZoomMode, compute_zoom_config,
    lock_root_height,
};
use kurbo::Size;

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_zoom");

    let viewports = [
        Viewport::auto(360.0),
        Viewport::auto(768.0),
        Viewport::new(1280.0, Some(800.0)),
    ];
    // Frame widths a window drag sweeps through.
    let widths: Vec<f64> = (0..256).map(|i| 240.0 + f64::from(i) * 7.5).collect();

    group.bench_function("compute_zoom_config/sweep", |b| {
        b.iter(|| {
            let mut config = ZoomConfig::default();
            for viewport in viewports {
                for &w in &widths {
                    config = compute_zoom_config(
                        black_box(viewport),
                        black_box(Size::new(w, 600.0)),
                        config,
                        ZoomMode::AutoFit,
                    );
                }
            }
            black_box(config)
        });
    });

    group.bench_function("lock_root_height", |b| {
        let config = compute_zoom_config(
            Viewport::auto(375.0),
            Size::new(320.0, 600.0),
            ZoomConfig::default(),
            ZoomMode::AutoFit,
        );
        b.iter(|| lock_root_height(black_box(config), black_box(1536.0)));
    });

    let ladder = ZoomLadder::default();
    group.bench_function("ladder/options", |b| {
        b.iter(|| ladder.options(black_box(320.0 / 375.0)));
    });
    group.bench_function("ladder/step", |b| {
        b.iter(|| {
            ladder.step(
                black_box(1.0),
                black_box(320.0 / 375.0),
                ZoomDirection::Out,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);

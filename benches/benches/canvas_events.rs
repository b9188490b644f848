// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel_canvas::resize::{ResizeObserver, ResizeWatcher};
use easel_canvas::{Canvas, LayoutEvent, UiAction, UiLayoutState};
use easel_zoom::Viewport;
use kurbo::Size;

struct Detached;

impl ResizeObserver for Detached {
    fn observe(&mut self) {}

    fn disconnect(&mut self) {}
}

fn mounted(width: f64) -> (Canvas, UiLayoutState) {
    let mut ui = UiLayoutState::default();
    ui.viewports.current = Viewport::auto(375.0);
    let mut canvas = Canvas::default();
    canvas.mount(&ui, &Size::new(width, 800.0));
    (canvas, ui)
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_canvas");
    let mut sink = |_: UiAction| {};

    group.bench_function("resize_storm", |b| {
        b.iter_batched(
            || (mounted(320.0), ResizeWatcher::observe(Detached)),
            |((mut canvas, ui), mut watcher)| {
                for i in 0..512 {
                    // Every other report repeats the previous size.
                    let width = 300.0 + f64::from(i / 2);
                    let size = Size::new(width, 800.0);
                    if let Some(event) = watcher.on_resize(size) {
                        let _ = canvas.handle(event, &ui, &size, &mut sink);
                    }
                }
                black_box(canvas.zoom_config())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("select_then_lock_in", |b| {
        let options = easel_zoom::default_viewports();
        b.iter_batched(
            || mounted(1024.0),
            |(mut canvas, ui)| {
                for option in &options {
                    let frame = Size::new(1024.0, 800.0);
                    let _ = canvas.handle(
                        LayoutEvent::viewport_selected(option.clone()),
                        &ui,
                        &frame,
                        &mut sink,
                    );
                    canvas.after_layout(&ui, &frame);
                }
                black_box(canvas.root_style(&ui))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_canvas);
criterion_main!(benches);

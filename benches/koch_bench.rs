//! Benchmark für den Koch-Umriss und die Render-Übergabe.
//!
//! Misst:
//! - Build des Umrisses pro Tiefe (inkl. Vorgänger-Overlay)
//! - Rundung auf Pixel-Segmente in der RenderScene

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use koch_snowflake::{build_koch_outline, AppController, AppIntent, AppState};
use std::hint::black_box;

fn bench_outline_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_build");
    let start = DVec2::new(200.0, 500.0);
    let end = DVec2::new(600.0, 500.0);

    for &depth in &[3i64, 5, 7] {
        group.bench_with_input(BenchmarkId::new("with_previous", depth), &depth, |b, &d| {
            b.iter(|| {
                let outline = build_koch_outline(black_box(start), black_box(end), d, true)
                    .expect("Build fehlgeschlagen");
                black_box(outline.len())
            })
        });
    }

    group.finish();
}

fn bench_pixel_lines(c: &mut Criterion) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 6 })
        .expect("Build fehlgeschlagen");
    let scene = controller.build_render_scene(&state);

    c.bench_function("pixel_lines_depth_6", |b| {
        b.iter(|| black_box(scene.pixel_lines().len()))
    });
}

criterion_group!(benches, bench_outline_build, bench_pixel_lines);
criterion_main!(benches);

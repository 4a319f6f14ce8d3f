use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractal_explorer::{
    CanvasDimensions, ColourSchemeKinds, FractalKinds, RenderConfig, render, render_serial,
};

fn bench_render_variants(c: &mut Criterion) {
    let dims = CanvasDimensions::new(320, 240).unwrap();
    let mut group = c.benchmark_group("render");

    for &variant in FractalKinds::ALL {
        let config = RenderConfig {
            variant,
            max_iterations: 256,
            colour_scheme: ColourSchemeKinds::Rainbow,
            ..RenderConfig::default()
        };

        group.bench_with_input(BenchmarkId::new("parallel", variant.id()), &config, |b, config| {
            b.iter(|| render(black_box(config), dims).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("serial", variant.id()), &config, |b, config| {
            b.iter(|| render_serial(black_box(config), dims).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_variants);
criterion_main!(benches);

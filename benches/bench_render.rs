use criterion::{Criterion, criterion_group, criterion_main};

fn bench_render_license(c: &mut Criterion) {
    c.bench_function("render_license", |b| {
        b.iter(|| {
            let _ = bsdgen_lib::render::render_license("2024", "Jane Doe");
        })
    });
}

criterion_group!(benches, bench_render_license);
criterion_main!(benches);

//! LUT Transform Benchmarks
//!
//! Single-color lookup cost, whole-buffer throughput, and composition.

use colorcube_core::{Lattice, Lut3dTransform, Rgb, algebra, parallel, simd};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Generate test data for benchmarks
fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            Rgb::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

fn generate_rgba8_data(count: usize) -> Vec<u8> {
    (0..count * 4).map(|i| ((i * 37) % 256) as u8).collect()
}

fn graded_lut(size: usize) -> Lut3dTransform {
    let lattice = Lattice::identity(size)
        .expect("valid size")
        .map(|c| Rgb::new(c.r.powf(0.8), c.g, c.b * 0.9 + 0.05));
    Lut3dTransform::new(lattice)
}

// ============================================================================
// Single Color Benchmarks
// ============================================================================

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    for size in [2usize, 17, 33, 65].iter() {
        let lut = graded_lut(*size);
        let color = Rgb::new(0.3, 0.6, 0.9);

        group.bench_with_input(BenchmarkId::new("transform", size), size, |b, _| {
            b.iter(|| lut.transform(black_box(color)))
        });
    }

    let lut = graded_lut(17);
    group.bench_function("transform_rgba8888", |b| {
        b.iter(|| lut.transform_rgba8888(black_box([77, 150, 230, 255])))
    });

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let lut = graded_lut(17);

    for count in [1000, 10000, 100000].iter() {
        let input = generate_rgb_data(*count);
        let mut output = vec![Rgb::BLACK; *count];
        let src8 = generate_rgba8_data(*count);
        let mut dst8 = vec![0u8; src8.len()];

        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("rgb", count), count, |b, _| {
            b.iter(|| {
                simd::transform_rgb_batch(&lut, black_box(&input), black_box(&mut output))
            })
        });

        group.bench_with_input(BenchmarkId::new("rgba8", count), count, |b, _| {
            b.iter(|| simd::transform_rgba8_batch(&lut, black_box(&src8), black_box(&mut dst8)))
        });

        group.bench_with_input(BenchmarkId::new("par_rgb", count), count, |b, _| {
            b.iter(|| {
                parallel::par_transform_rgb(
                    &lut,
                    black_box(&input),
                    parallel::DEFAULT_PARALLEL_CHUNK,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("par_rgba8", count), count, |b, _| {
            b.iter(|| parallel::par_transform_rgba8(&lut, black_box(&src8), black_box(&mut dst8)))
        });
    }

    group.finish();
}

// ============================================================================
// Composition Benchmarks
// ============================================================================

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for size in [17usize, 33].iter() {
        let outer = graded_lut(*size);
        let inner = Lattice::identity(*size)
            .expect("valid size")
            .map(|c| Rgb::WHITE - c);

        group.bench_with_input(BenchmarkId::new("compose", size), size, |b, _| {
            b.iter(|| algebra::compose(black_box(&outer), black_box(&inner)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch, bench_compose);

criterion_main!(benches);

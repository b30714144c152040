use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gray_recolor_rs::image_pipeline::{run_parallel, run_sequential};
use image::{Rgb, RgbImage};

fn generate_mock_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let value = ((x + y) % 256) as u8;
        // every third column is strongly colored, the rest near gray
        if x % 3 == 0 {
            Rgb([value, value.wrapping_add(90), value])
        } else {
            Rgb([value, value.wrapping_add(5), value.wrapping_sub(5)])
        }
    })
}

fn benchmark_sequential_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let source = generate_mock_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &source, |b, source| {
            b.iter(|| run_sequential(black_box(source)));
        });
    }

    group.finish();
}

fn benchmark_worker_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("workers_1000x1000");
    let source = generate_mock_image(1000, 1000);

    group.bench_function("sequential", |b| {
        b.iter(|| run_sequential(black_box(&source)));
    });

    for workers in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("parallel", workers), &workers, |b, &workers| {
            b.iter(|| run_parallel(black_box(&source), workers));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sequential_by_size, benchmark_worker_counts);
criterion_main!(benches);

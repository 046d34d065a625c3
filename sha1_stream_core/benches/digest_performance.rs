//! Performance benchmarks for the streaming digest
//!
//! Measures what the wrapper adds on top of the raw compression function:
//! chunked writes, the snapshot taken by `sum`, and registry dispatch.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha1_stream_core::{HashAlgorithm, HashCalculator, Sha1StreamingHasher};
use std::hint::black_box;

/// Whole-input hashing at a few sizes
fn benchmark_calculate_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_bytes");
    let calculator = HashCalculator::new();

    for size in [1_024, 65_536, 1_048_576] {
        let data = generate_test_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("sha1", format_size(size)),
            &data,
            |b, data| {
                b.iter(|| {
                    let result = calculator
                        .calculate_bytes(HashAlgorithm::SHA1, black_box(data))
                        .unwrap();
                    black_box(result.hash);
                })
            },
        );
    }

    group.finish();
}

/// Same input, different write sizes
fn benchmark_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_sizes");
    let data = generate_test_data(1_048_576);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [1, 63, 64, 4_096, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut digest = Sha1StreamingHasher::new();
                for piece in data.chunks(chunk) {
                    digest.write(black_box(piece)).unwrap();
                }
                black_box(digest.sum(Vec::new()).unwrap());
            })
        });
    }

    group.finish();
}

/// Cost of a mid-stream `sum`
fn benchmark_sum_snapshot(c: &mut Criterion) {
    let mut digest = Sha1StreamingHasher::new();
    digest.write(&generate_test_data(100)).unwrap();

    c.bench_function("sum_mid_stream", |b| {
        b.iter(|| black_box(digest.sum(Vec::with_capacity(20)).unwrap()))
    });
}

fn generate_test_data(size: usize) -> Vec<u8> {
    // Deterministic data for reproducible runs
    let mut data = Vec::with_capacity(size);
    let mut seed = 0x12345678u32;

    for _ in 0..size {
        data.push((seed & 0xFF) as u8);
        seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    }

    data
}

fn format_size(size: usize) -> String {
    if size >= 1_048_576 {
        format!("{}MB", size / 1_048_576)
    } else if size >= 1_024 {
        format!("{}KB", size / 1_024)
    } else {
        format!("{size}B")
    }
}

criterion_group!(
    benches,
    benchmark_calculate_bytes,
    benchmark_chunk_sizes,
    benchmark_sum_snapshot
);

criterion_main!(benches);

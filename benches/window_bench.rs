//! Benchmarks for rollbuf.
//!
//! Run with:
//!     cargo bench

use std::io::Cursor;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rollbuf::{WindowBuffer, WindowConfig};

fn bench_rolling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("get_next_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let config = WindowConfig::new(64 * 1024, 48).unwrap();
                let mut buf = WindowBuffer::from_reader(Cursor::new(data), config).unwrap();
                let mut sum = 0u64;
                while let Some(byte) = buf.get_next().unwrap() {
                    sum = sum.wrapping_add(byte as u64);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_capacities(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacities");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    // Small capacity means frequent compaction
    for capacity in [64, 1024, 64 * 1024] {
        group.bench_function(format!("capacity_{}", capacity), |b| {
            let config = WindowConfig::new(capacity, 32).unwrap();
            b.iter(|| {
                let mut buf = WindowBuffer::from_reader(Cursor::new(&data), config).unwrap();
                let mut count = 0usize;
                while buf.get_next().unwrap().is_some() {
                    count += 1;
                }
                black_box(count)
            });
        });
    }

    group.bench_function("skip", |b| {
        let config = WindowConfig::new(64 * 1024, 32).unwrap();
        b.iter(|| {
            let mut buf = WindowBuffer::from_reader(Cursor::new(&data), config).unwrap();
            black_box(buf.skip(usize::MAX).unwrap())
        });
    });

    group.finish();
}

fn bench_window_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_hashing");
    let size = 256 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("blake3_every_window", |b| {
        let config = WindowConfig::new(64 * 1024, 64).unwrap();
        b.iter(|| {
            let mut buf = WindowBuffer::from_reader(Cursor::new(&data), config).unwrap();
            let mut last = None;
            while let Some(window) = buf.get_window().unwrap() {
                last = Some(blake3::hash(window));
            }
            black_box(last)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rolling, bench_capacities, bench_window_hashing);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use longest_exec::{pipeline, Config};
use std::hint::black_box;

/// Build-log-like input: every fourth line is noise.
fn synthetic_log(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("   Compiling crate-{i} v0.1.0\n"),
            1 => format!("/usr/bin/cc -O2 -c src/file_{i}.c -o out/file_{i}.o -> {}ms\n", i % 997),
            2 => format!("rustc --crate-name dep_{i} -> {}.{}s\n", i % 60, i % 1000),
            _ => format!("link target_{i} -> {}m{}s\n", i % 5, i % 60),
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let small = synthetic_log(100);
    let large = synthetic_log(100_000);
    let config = Config::default();

    c.bench_function("sequential (100 lines)", |b| {
        b.iter(|| pipeline::collect_sequential(black_box(small.as_bytes())).unwrap())
    });
    c.bench_function("worker pool (100 lines)", |b| {
        b.iter(|| pipeline::collect(black_box(small.as_bytes()), &config).unwrap())
    });
    c.bench_function("sequential (100000 lines)", |b| {
        b.iter(|| pipeline::collect_sequential(black_box(large.as_bytes())).unwrap())
    });
    c.bench_function("worker pool (100000 lines)", |b| {
        b.iter(|| pipeline::collect(black_box(large.as_bytes()), &config).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

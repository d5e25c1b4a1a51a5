use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sluice_streams_rs::core::Buffer;

fn fill_and_drain(buffer: &mut Buffer<u64>, rounds: u64) {
  for round in 0..rounds {
    while !buffer.is_full() {
      buffer.enqueue(black_box(round));
    }
    while !buffer.is_empty() {
      black_box(buffer.dequeue());
    }
  }
}

fn bench_fill_drain(c: &mut Criterion) {
  let mut group = c.benchmark_group("fill_drain");
  for capacity in [16usize, 100, 128] {
    group.bench_with_input(BenchmarkId::new("fixed", capacity), &capacity, |b, &capacity| {
      let mut buffer = Buffer::with_capacity(capacity).unwrap();
      b.iter(|| fill_and_drain(&mut buffer, 64));
    });
  }
  group.bench_function("growable_512", |b| {
    let mut buffer = Buffer::new(512, 256).unwrap();
    b.iter(|| fill_and_drain(&mut buffer, 64));
  });
  group.finish();
}

fn bench_steady_state(c: &mut Criterion) {
  let mut group = c.benchmark_group("steady_state");
  for capacity in [64usize, 100] {
    group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
      let mut buffer = Buffer::with_capacity(capacity).unwrap();
      for elem in 0..capacity as u64 / 2 {
        buffer.enqueue(elem);
      }
      b.iter(|| {
        buffer.enqueue(black_box(1));
        black_box(buffer.dequeue());
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_steady_state);
criterion_main!(benches);

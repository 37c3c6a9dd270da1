//! Criterion benchmark: slot_lru vs hashlink::LruCache
//! Criterion 基准：slot_lru 对比 hashlink::LruCache

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashlink::LruCache;
use slot_lru::{Conf, Lru};

const SEED: u64 = 42;
const OPS: usize = 100_000;

/// Skewed key stream, hot keys repeat / 偏斜键流，热键重复
fn keys(n: usize, range: u64) -> Vec<u64> {
  let mut rng = fastrand::Rng::with_seed(SEED);
  (0..n)
    .map(|_| {
      if rng.u8(..) < 200 {
        rng.u64(..range / 8 + 1)
      } else {
        rng.u64(..range)
      }
    })
    .collect()
}

fn bench_set_get(c: &mut Criterion) {
  let mut group = c.benchmark_group("set_get");
  group.throughput(Throughput::Elements(OPS as u64));

  for cap in [1_000usize, 100_000] {
    let stream = keys(OPS, cap as u64 * 4);

    group.bench_with_input(BenchmarkId::new("slot_lru", cap), &stream, |b, stream| {
      let mut cache: Lru<u64, u64> = Conf::new(cap).prealloc().build().unwrap();
      b.iter(|| {
        for &k in stream {
          if cache.get(&k).is_none() {
            cache.set(k, k);
          }
        }
        black_box(cache.len())
      })
    });

    group.bench_with_input(BenchmarkId::new("hashlink", cap), &stream, |b, stream| {
      let mut cache: LruCache<u64, u64> = LruCache::new(cap);
      b.iter(|| {
        for &k in stream {
          if cache.get(&k).is_none() {
            cache.insert(k, k);
          }
        }
        black_box(cache.len())
      })
    });
  }

  group.finish();
}

fn bench_churn(c: &mut Criterion) {
  let mut group = c.benchmark_group("set_rm");
  group.throughput(Throughput::Elements(OPS as u64));

  let cap: usize = 4096;
  let stream = keys(OPS, cap as u64 * 2);

  group.bench_function("slot_lru", |b| {
    let mut cache: Lru<u64, usize> = Lru::new(cap);
    b.iter(|| {
      for (i, &k) in stream.iter().enumerate() {
        if i % 4 == 0 {
          cache.rm(&k);
        } else {
          cache.set(k, i);
        }
      }
      black_box(cache.idle())
    })
  });

  group.bench_function("hashlink", |b| {
    let mut cache: LruCache<u64, usize> = LruCache::new(cap);
    b.iter(|| {
      for (i, &k) in stream.iter().enumerate() {
        if i % 4 == 0 {
          cache.remove(&k);
        } else {
          cache.insert(k, i);
        }
      }
      black_box(cache.len())
    })
  });

  group.finish();
}

criterion_group!(benches, bench_set_get, bench_churn);
criterion_main!(benches);

//! Benchmarks for routed subscripts vs direct slice access
//!
//! Run with: `cargo bench --bench subscript`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use subscriptable_core::{Accessor, At, field, intercept};

struct Series {
    data: Vec<u64>,
}

impl At for Series {
    type Element = u64;

    fn at(&self, index: i64) -> Option<&u64> {
        self.data.get(usize::try_from(index).ok()?)
    }
}

fn series(len: u64) -> Series {
    Series {
        data: (0..len).collect(),
    }
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_by_index");

    for len in [16u64, 256, 4096] {
        let direct = series(len);
        let by_field = intercept(series(len), field!(Series, data));
        let by_accessor = intercept(series(len), Accessor);

        group.bench_with_input(BenchmarkId::new("direct", len), &len, |b, &len| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..len as usize {
                    sum += direct.data.get(black_box(i)).copied().unwrap_or(0);
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("field", len), &len, |b, &len| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..len as usize {
                    sum += by_field.get(black_box(i)).copied().unwrap_or(0);
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("accessor", len), &len, |b, &len| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..len as usize {
                    sum += by_accessor.get(black_box(i)).copied().unwrap_or(0);
                }
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_keyed_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_read");
    let wrapped = intercept(series(64), field!(Series, data));

    for key in ["7", "7.0", "0x7", "name"] {
        group.bench_with_input(BenchmarkId::new("read", key), &key, |b, &key| {
            b.iter(|| black_box(wrapped.read(black_box(key)).element().copied()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_keyed_read);
criterion_main!(benches);

//! Cost of one harness cell, end to end: construction, the six timed
//! operations and averaging.

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqbench_core::SeqKind;
use seqbench_harness::UnitTest;

fn bench_unit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_test");
    for size in [100usize, 1_000, 10_000] {
        for kind in SeqKind::ALL {
            group.bench_function(BenchmarkId::new(kind.label(), size), |b| {
                let mut cell = UnitTest::new(size, 1, kind);
                b.iter(|| {
                    cell.run().expect("cell run");
                    black_box(cell.timings());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(100))
        .measurement_time(Duration::from_secs(1))
        .sample_size(30);
    targets = bench_unit_test
);
criterion_main!(benches);

use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_base: usize,
    n_remove: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}_base/n_remove", v.n_base), v.n_remove)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("subtract");

    // Base set size
    for n_base in [100, 1_000, 10_000] {
        // Number of intervals removed from the base set
        for n_remove in [10, 100, 1_000] {
            bench_param(&mut g, n_base, n_remove)
        }
    }
}

/// Measure the time needed to subtract `n_remove` short random intervals from
/// a base set of `n_base` short random intervals.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_base: usize, n_remove: usize)
where
    M: Measurement,
{
    let bench_name = BenchName { n_base, n_remove };

    let mut rand = Lfsr::default();
    let base = (0..n_base)
        .map(|_| rand.next_short_interval(64))
        .collect::<Vec<_>>();
    let to_remove = (0..n_remove)
        .map(|_| rand.next_short_interval(256))
        .collect::<Vec<_>>();

    g.throughput(Throughput::Elements(n_remove as _)); // Subtrahends per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (base.clone(), to_remove.clone()),
            |(base, to_remove)| interdiff::subtract(base, to_remove),
            BatchSize::SmallInput,
        );
    });
}

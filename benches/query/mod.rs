use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interdiff::{Interval, IntervalTree};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let t = (0..n_values)
        .map(|_| rand.next_interval())
        .collect::<IntervalTree<_>>();

    let query = Interval::new(4_200, 10_000).unwrap();

    bench_iter(n_values, g, &t, &query);
    bench_overlapping(n_values, g, &t, &query);
    bench_contains(n_values, g, &t, &query);
}

macro_rules! query_bench {
    (
        $name:ident,
        |$t:ident, $query:ident| $body:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                n_values: usize,
                g: &mut BenchmarkGroup<M>,
                $t: &IntervalTree<u16>,
                $query: &Interval<u16>,
            )
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box($body))
                });
            }
        }
    };
}

query_bench!(iter, |t, _query| t.iter().count());
query_bench!(overlapping, |t, query| t.overlapping(query).count());
query_bench!(contains, |t, query| t.contains(query));

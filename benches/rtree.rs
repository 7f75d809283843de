use bulk_rtree::evaluation::compare_strategies;
use bulk_rtree::rtree::{build, PagedRTree, Rect, Strategy};
use bulk_rtree::workload::{random_data, random_queries, DEFAULT_NUM_QUERIES};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Node size of a 4KiB page of 32-byte entries.
const NODE_SIZE: usize = 124;

const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 17];

fn load_data(n: usize) -> (Vec<Rect<i32>>, Vec<Rect<i32>>) {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let rects = random_data(&mut rng, n);
    let queries = random_queries(&mut rng, DEFAULT_NUM_QUERIES);
    (rects, queries)
}

pub fn construction(c: &mut Criterion) {
    // RUST_LOG=bulk_rtree=debug shows the levels packed by each build
    let _ = env_logger::try_init();

    let mut group = c.benchmark_group("construction");
    for &n in SIZES {
        let (rects, _) = load_data(n);
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &rects, |b, rects| {
                b.iter(|| build(strategy, NODE_SIZE, rects.iter().copied()).unwrap())
            });
        }
    }
    group.finish();
}

pub fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &n in SIZES {
        let (rects, queries) = load_data(n);
        for strategy in Strategy::ALL {
            let tree = build(strategy, NODE_SIZE, rects.iter().copied()).unwrap();
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &queries, |b, qs| {
                b.iter(|| qs.iter().map(|q| tree.search(q).disk_accesses).sum::<usize>())
            });

            let paged = PagedRTree::from_tree(&tree).unwrap();
            let id = BenchmarkId::new(format!("{} (paged)", strategy.name()), n);
            group.bench_with_input(id, &queries, |b, qs| {
                b.iter(|| {
                    qs.iter()
                        .map(|q| paged.search(q).unwrap().disk_accesses)
                        .sum::<usize>()
                })
            });
        }
    }
    group.finish();

    // Print the disk-access summary alongside the timings
    for &n in SIZES {
        let (rects, queries) = load_data(n);
        for (strategy, stats) in compare_strategies(&rects, &queries, NODE_SIZE).unwrap() {
            println!("n = {n}, {strategy}:\n{stats}");
        }
    }
}

criterion_group!(benches, construction, search);
criterion_main!(benches);

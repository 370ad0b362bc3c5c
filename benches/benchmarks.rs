//! Performance benchmarks for hydrate

use std::io;
use std::path::PathBuf;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hydrate::test_utils::TestTree;
use hydrate::{Console, RunConfig, TreeWalker, WalkerConfig, WorkQueue, run_traversal, sanitize};

fn bench_sanitize(c: &mut Criterion) {
    let clean = "/home/user/Dropbox/photos/2024/summer/beach.jpg";
    let doubled = "/home/user//Dropbox//photos//2024//summer//beach.jpg";

    let mut group = c.benchmark_group("sanitize");
    group.bench_function("clean_path", |b| b.iter(|| sanitize(black_box(clean))));
    group.bench_function("doubled_separators", |b| {
        b.iter(|| sanitize(black_box(doubled)))
    });
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(50, 20, 0);
    let walker = TreeWalker::new(WalkerConfig::default());

    c.bench_function("walk_1000_files", |b| {
        b.iter(|| {
            let mut count = 0usize;
            walker
                .walk(black_box(tree.path()), &mut |_: PathBuf| count += 1)
                .unwrap();
            count
        })
    });
}

fn bench_queue_handoff(c: &mut Criterion) {
    c.bench_function("queue_push_drain_10k", |b| {
        b.iter(|| {
            let queue = WorkQueue::new();
            for i in 0..10_000u32 {
                queue.push(i);
            }
            queue.signal_done();
            std::iter::from_fn(|| queue.pop_or_wait()).count()
        })
    });
}

fn bench_traversal(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(20, 25, 4096);
    let console = Console::new(io::sink(), io::sink());

    let mut group = c.benchmark_group("traversal_500_files");
    for workers in [1, 4, 16] {
        let config = RunConfig {
            workers,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(workers), &config, |b, cfg| {
            b.iter(|| run_traversal(tree.path(), cfg, &console).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_walk,
    bench_queue_handoff,
    bench_traversal
);
criterion_main!(benches);

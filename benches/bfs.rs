use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use costar::{
    build_graph, find_shortest_path_with, resolve, Appearance, GraphStore, PersonId, PersonRecord,
    SearchConstraints, WorkRecord,
};

/// A grid of `side * side` people; each row and each column is one work.
fn grid(side: usize) -> GraphStore {
    let people = (0..side * side)
        .map(|i| PersonRecord::new(format!("p{i}"), format!("Person {i}"), None));
    let works = (0..side)
        .flat_map(|i| [format!("row{i}"), format!("col{i}")])
        .map(|id| WorkRecord::new(id.clone(), id, None));
    let stars = (0..side * side).flat_map(|i| {
        let (r, c) = (i / side, i % side);
        [
            Appearance::new(format!("p{i}"), format!("row{r}")),
            Appearance::new(format!("p{i}"), format!("col{c}")),
        ]
    });
    build_graph(people, works, stars)
}

/// A path graph where only neighbors share a work; worst case for hop count.
fn chain(len: usize) -> GraphStore {
    let people = (0..len).map(|i| PersonRecord::new(format!("p{i}"), format!("Person {i}"), None));
    let works = (0..len - 1).map(|i| WorkRecord::new(format!("w{i}"), format!("Work {i}"), None));
    let stars = (0..len - 1).flat_map(|i| {
        [
            Appearance::new(format!("p{i}"), format!("w{i}")),
            Appearance::new(format!("p{}", i + 1), format!("w{i}")),
        ]
    });
    build_graph(people, works, stars)
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs/shortest_path");
    for len in [100usize, 1_000, 10_000] {
        let graph = chain(len);
        let source = PersonId::new("p0");
        let target = PersonId::new(format!("p{}", len - 1));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("chain", len), &graph, |b, g| {
            b.iter(|| {
                let unbounded = SearchConstraints::unbounded();
                find_shortest_path_with(g, black_box(&source), black_box(&target), unbounded)
                    .unwrap()
            });
        });
    }

    let graph = grid(60);
    let source = PersonId::new("p0");
    let target = PersonId::new(format!("p{}", 60 * 60 - 1));
    group.bench_function("grid_60", |b| {
        b.iter(|| {
            let unbounded = SearchConstraints::unbounded();
            find_shortest_path_with(&graph, black_box(&source), black_box(&target), unbounded)
                .unwrap()
        });
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let graph = grid(60);
    c.bench_function("resolve/unique", |b| {
        b.iter(|| resolve(&graph, black_box("person 1234")));
    });
}

criterion_group!(benches, bench_shortest_path, bench_resolve);
criterion_main!(benches);

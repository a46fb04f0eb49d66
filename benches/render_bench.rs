use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gremlin_dsl::prelude::*;

fn long_traversal(hops: usize) -> GraphTraversal {
    let mut traversal = g();
    traversal.v(1);
    for _ in 0..hops {
        traversal.out("'knows'").has(("'age'", "gt(30)"));
    }
    traversal.values("'name'").assign("result = ");
    traversal
}

fn render_benchmark(c: &mut Criterion) {
    let short = long_traversal(2);
    let long = long_traversal(200);

    c.bench_function("render short traversal", |b| {
        b.iter(|| black_box(&short).render())
    });
    c.bench_function("render long traversal", |b| {
        b.iter(|| black_box(&long).render())
    });
    c.bench_function("build and render", |b| {
        b.iter(|| {
            g().v(black_box(1))
                .out("'created'")
                .in_("'created'")
                .dedup(())
                .render()
        })
    });
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);

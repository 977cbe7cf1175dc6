//! Criterion micro-benchmarks for the per-voxel topology invariant tests,
//! the hot inner loop of every propagation pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use topo_topology::patch::index_of;
use topo_topology::{cc_invariant, euler_invariant, Patch};

fn surface_dent_patch() -> Patch {
    let mut patch: Patch = [true; 27];
    for dx in -1..=1 {
        for dy in -1..=1 {
            patch[index_of(dx, dy, 1)] = false;
        }
    }
    patch
}

fn bench_euler_invariant(c: &mut Criterion) {
    let patch = surface_dent_patch();
    c.bench_function("euler_invariant_surface_dent", |b| {
        b.iter(|| black_box(euler_invariant(black_box(&patch), true)));
    });
}

fn bench_cc_invariant(c: &mut Criterion) {
    let patch = surface_dent_patch();
    c.bench_function("cc_invariant_surface_dent", |b| {
        b.iter(|| black_box(cc_invariant(black_box(&patch), true)));
    });
}

fn bench_simple_point_test_combined(c: &mut Criterion) {
    let patch = surface_dent_patch();
    c.bench_function("simple_point_test_combined", |b| {
        b.iter(|| {
            let simple = euler_invariant(black_box(&patch), true)
                && cc_invariant(black_box(&patch), true)
                && cc_invariant(black_box(&patch), false);
            black_box(simple)
        });
    });
}

criterion_group!(
    benches,
    bench_euler_invariant,
    bench_cc_invariant,
    bench_simple_point_test_combined
);
criterion_main!(benches);

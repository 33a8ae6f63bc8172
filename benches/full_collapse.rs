//! Performance measurement for complete grid solves at varying dimensions

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavegrid::algorithm::solver::{NoHooks, Solver, SolverConfig};
use wavegrid::spatial::TileCatalog;

/// Measures full solve cost as the grid side length grows
fn bench_full_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_collapse");

    for dimensions in &[4usize, 8, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimensions),
            dimensions,
            |b, &dims| {
                b.iter(|| {
                    let config = SolverConfig {
                        dimensions: dims,
                        backup_tile: 0,
                        seed: 12345,
                    };
                    let Ok(mut solver) = Solver::new(TileCatalog::pipe_maze(), &config) else {
                        return;
                    };
                    if solver.run(&mut NoHooks).is_ok() {
                        black_box(solver.grid().is_fully_collapsed());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_collapse);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifeboard_core::grid::Grid;
use lifeboard_core::rules::advance;
use lifeboard_core::simulation::Simulation;
use lifeboard_core::RuleParameters;

fn bench_advance_max_board(c: &mut Criterion) {
    let mut grid = Grid::new(99).unwrap();
    grid.populate_random(42);
    let rules = RuleParameters::conway();

    c.bench_function("advance_99x99", |b| {
        b.iter(|| black_box(advance(&grid, &rules).unwrap()))
    });
}

fn bench_step_with_history(c: &mut Criterion) {
    c.bench_function("step_50x50_64_generations", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(50, RuleParameters::conway(), 7).unwrap();
            let summary = sim.run(Some(64), |_| {}).unwrap();
            black_box(summary.iterations)
        })
    });
}

criterion_group!(benches, bench_advance_max_board, bench_step_with_history);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nonet::solver::{
    engine::SolverEngine,
    grid::Grid,
    heuristics::variable::{FirstOpen, MinimumRemainingValues},
};

// The classic 30-clue newspaper puzzle.
const EASY: &str = "\
    53--7----\
    6--195---\
    -98----6-\
    8---6---3\
    4--8-3--1\
    7---2---6\
    -6----28-\
    ---419--5\
    ----8--79";

// Arto Inkala's "AI Escargot", 23 clues.
const HARD: &str = "\
    1....7.9.\
    .3..2...8\
    ..96..5..\
    ..53..9..\
    .1..8...2\
    6....4...\
    3......1.\
    .4......7\
    ..7...3..";

fn heuristic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sudoku Heuristics");

    for (name, puzzle) in [("easy", EASY), ("hard", HARD)] {
        let grid: Grid = puzzle.parse().unwrap();

        group.bench_function(format!("{name}, MinimumRemainingValues"), |b| {
            let solver = SolverEngine::new(Box::new(MinimumRemainingValues));
            b.iter(|| {
                let (solution, _stats) = solver.solve(black_box(&grid));
                assert!(solution.is_some());
            })
        });

        // FirstOpen degrades badly on the hard puzzle; only compare on easy.
        if name == "easy" {
            group.bench_function(format!("{name}, FirstOpen"), |b| {
                let solver = SolverEngine::new(Box::new(FirstOpen));
                b.iter(|| {
                    let (solution, _stats) = solver.solve(black_box(&grid));
                    assert!(solution.is_some());
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, heuristic_benchmarks);
criterion_main!(benches);

//! Performance measurement for single moves across all four directions

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mergetile::{Board, Direction, SeededRandom, apply_move, shift};
use std::hint::black_box;

/// A mid-game board with merges available in every direction
fn dense_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 4],
        [8, 8, 16, 16],
        [2, 0, 2, 0],
        [32, 32, 64, 64],
    ])
    .unwrap_or_else(|_| Board::empty())
}

fn bench_shift_directions(c: &mut Criterion) {
    let board = dense_board();
    let mut group = c.benchmark_group("shift");

    for direction in Direction::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{direction:?}")),
            &direction,
            |b, &direction| {
                b.iter(|| shift(black_box(board), direction));
            },
        );
    }

    group.finish();
}

fn bench_apply_move(c: &mut Criterion) {
    let board = dense_board();

    c.bench_function("apply_move", |b| {
        let mut rng = SeededRandom::new(12345);
        b.iter(|| apply_move(black_box(board), Direction::Left, &mut rng));
    });
}

criterion_group!(benches, bench_shift_directions, bench_apply_move);
criterion_main!(benches);

//! Benchmarks for move application and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chain_reaction::{Board, Cell, Heuristic, Player, Pos, Searcher};

/// Crowded midgame position with several cells one orb from exploding
fn midgame() -> Board {
    let mut cells = Vec::new();
    for pos in Pos::all() {
        let owner = if (pos.row + pos.col) % 3 == 0 {
            Player::Blue
        } else {
            Player::Red
        };
        let count = (pos.critical_mass() - 1).max(1);
        if (pos.row * 7 + pos.col) % 4 != 0 {
            cells.push((pos, Cell::new(owner, count)));
        }
    }
    Board::from_cells(cells)
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    let empty = Board::new();
    group.bench_function("quiet", |b| {
        b.iter(|| empty.apply_move(Player::Red, black_box(Pos::new(4, 3))))
    });

    let board = midgame();
    group.bench_function("cascade", |b| {
        b.iter(|| board.apply_move(Player::Red, black_box(Pos::new(4, 3))))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    group.sample_size(10);

    let board = midgame();
    for heuristic in Heuristic::ALL {
        group.bench_with_input(
            BenchmarkId::new(heuristic.key(), 3),
            &heuristic,
            |b, &heuristic| {
                b.iter(|| {
                    let mut searcher = Searcher::new(3, heuristic);
                    black_box(searcher.search(&board, Player::Red, true))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_apply_move, bench_search);
criterion_main!(benches);

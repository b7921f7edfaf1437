//! Benchmarks for move generation and playouts.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use logic_ccg::{GameBuilder, LogicGame, RulesEngine};

/// Play `moves` greedy moves: place when possible, otherwise discard.
fn playout(game: &mut LogicGame, moves: usize) {
    for _ in 0..moves {
        let active = game.active_player();
        let actions = game.legal_actions(active);
        let action = actions
            .iter()
            .find(|a| a.is_place())
            .copied()
            .unwrap_or(actions[0]);
        let _ = game.apply_action(active, &action);
    }
}

fn benchmark_legal_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal actions");

    for columns in [4, 6, 10] {
        let mut game = GameBuilder::new().columns(columns).build(42).unwrap();
        playout(&mut game, columns * 4);

        group.bench_with_input(BenchmarkId::new("columns", columns), &game, |b, game| {
            b.iter(|| black_box(game.legal_actions(game.active_player())));
        });
    }
    group.finish();
}

fn benchmark_playout(c: &mut Criterion) {
    c.bench_function("playout_200", |b| {
        b.iter(|| {
            let mut game = LogicGame::new(black_box(7));
            playout(&mut game, 200);
            black_box(game.lattice().placed_count())
        });
    });
}

criterion_group!(benches, benchmark_legal_actions, benchmark_playout);
criterion_main!(benches);

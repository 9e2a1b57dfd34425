use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use tiles_core::board::Board;
use tiles_core::eval::evaluate_monotonicity;
use tiles_core::rng::Xorshift128;
use tiles_core::search::{Searcher, Strategy};

fn midgame_board() -> Board {
    Board {
        cells: [
            5, 4, 2, 1, //
            4, 3, 2, 0, //
            2, 2, 1, 0, //
            1, 0, 0, 0,
        ],
    }
}

fn bench_strategies(c: &mut Criterion) {
    let board = midgame_board();
    let rng = Xorshift128::new(1);

    let mut group = c.benchmark_group("search_lookahead3");
    for strategy in [
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::CachingMinimax,
        Strategy::CachingAlphaBeta,
    ] {
        group.bench_function(format!("{strategy:?}"), |b| {
            let mut searcher = Searcher::new(strategy);
            b.iter(|| searcher.search(evaluate_monotonicity, black_box(&board), &rng, 3))
        });
    }
    group.finish();
}

fn bench_deep_caching(c: &mut Criterion) {
    let board = midgame_board();
    let rng = Xorshift128::new(1);

    c.bench_function("caching_alpha_beta_lookahead5", |b| {
        let mut searcher = Searcher::new(Strategy::CachingAlphaBeta);
        b.iter(|| searcher.search(evaluate_monotonicity, black_box(&board), &rng, 5))
    });
}

criterion_group!(benches, bench_strategies, bench_deep_caching);
criterion_main!(benches);

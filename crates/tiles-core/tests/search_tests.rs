//! Cross-variant agreement: every fair searcher must return the same score
//! and first move as plain minimax for the same position and lookahead.
//! Node counts may differ (that is the point of pruning and caching).

use tiles_core::board::{Board, Direction};
use tiles_core::eval::evaluate_monotonicity;
use tiles_core::search::{Searcher, Strategy};

fn board(cells: [u8; 16]) -> Board {
    Board { cells }
}

/// One quadrant filled, plenty of open space.
fn quadrant_board() -> Board {
    board([
        1, 2, 0, 0, //
        2, 3, 0, 0, //
        1, 2, 0, 0, //
        2, 1, 0, 0,
    ])
}

/// Every row carries two merge-ready pairs.
fn merge_ready_board() -> Board {
    board([
        1, 1, 2, 2, //
        3, 3, 4, 4, //
        5, 5, 6, 6, //
        1, 1, 2, 2,
    ])
}

/// A single free cell; the adversary's reply is nearly forced.
fn near_full_board() -> Board {
    board([
        1, 2, 1, 2, //
        2, 1, 2, 1, //
        1, 2, 1, 2, //
        2, 1, 2, 0,
    ])
}

const FAIR_VARIANTS: [Strategy; 3] = [
    Strategy::AlphaBeta,
    Strategy::CachingMinimax,
    Strategy::CachingAlphaBeta,
];

fn assert_agreement(b: &Board, lookaheads: &[u32]) {
    let rng = tiles_core::rng::Xorshift128::new(1);
    let mut reference = Searcher::new(Strategy::Minimax);
    for &lookahead in lookaheads {
        let want = reference.search(evaluate_monotonicity, b, &rng, lookahead);
        for strategy in FAIR_VARIANTS {
            let mut searcher = Searcher::new(strategy);
            let got = searcher.search(evaluate_monotonicity, b, &rng, lookahead);
            assert_eq!(
                (got.score, got.best_move),
                (want.score, want.best_move),
                "{strategy:?} diverged at lookahead {lookahead} on key {:#018x}",
                b.pack()
            );
        }
    }
}

#[test]
fn test_agreement_on_quadrant_board() {
    assert_agreement(&quadrant_board(), &[1, 2, 3]);
}

#[test]
fn test_agreement_on_merge_ready_board() {
    assert_agreement(&merge_ready_board(), &[1, 2, 3]);
}

#[test]
fn test_agreement_on_near_full_board() {
    assert_agreement(&near_full_board(), &[1, 2, 3, 4]);
}

/// Deeper sweep over the open boards; heavy for plain minimax, so opt-in.
#[test]
#[ignore = "minutes of plain-minimax tree in debug builds"]
fn test_agreement_exhaustive_depth4() {
    assert_agreement(&quadrant_board(), &[4]);
    assert_agreement(&merge_ready_board(), &[4]);
}

/// Recorded reference values pin the shared result, not just the agreement.
#[test]
fn test_near_full_reference_values() {
    let rng = tiles_core::rng::Xorshift128::new(1);
    let mut searcher = Searcher::new(Strategy::CachingAlphaBeta);
    let expectations: [(u32, i32); 4] = [(1, 4), (2, 7), (3, 10), (4, 12)];
    for (lookahead, score) in expectations {
        let got = searcher.search(evaluate_monotonicity, &near_full_board(), &rng, lookahead);
        assert_eq!(got.score, score, "lookahead {lookahead}");
        assert_eq!(got.best_move, Some(Direction::Right));
    }
}

/// The searchers explore clones; the input board must come back untouched.
#[test]
fn test_search_does_not_mutate_inputs() {
    let b = quadrant_board();
    let rng = tiles_core::rng::Xorshift128::new(9);
    for strategy in [
        Strategy::Oracle,
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::CachingMinimax,
        Strategy::CachingAlphaBeta,
    ] {
        let mut searcher = Searcher::new(strategy);
        let copy = b;
        let rng_copy = rng;
        searcher.search(evaluate_monotonicity, &copy, &rng_copy, 2);
        assert_eq!(copy, b);
        assert_eq!(rng_copy, rng);
    }
}

/// A board with no legal tilt yields no move from every variant.
#[test]
fn test_dead_board_yields_no_move_everywhere() {
    let dead = board([
        1, 2, 1, 2, //
        2, 1, 2, 1, //
        1, 2, 1, 2, //
        2, 1, 2, 1,
    ]);
    assert!(dead.finished());
    let rng = tiles_core::rng::Xorshift128::new(1);
    for strategy in [
        Strategy::Oracle,
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::CachingMinimax,
        Strategy::CachingAlphaBeta,
    ] {
        let mut searcher = Searcher::new(strategy);
        let result = searcher.search(evaluate_monotonicity, &dead, &rng, 3);
        assert_eq!(result.best_move, None, "{strategy:?}");
    }
}

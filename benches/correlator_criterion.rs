use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_tracker::correlation::change_correlator::{ChangeCorrelator, MoveResult};
use chess_tracker::game_state::game_state::GameState;
use chess_tracker::move_generation::legal_move_generator::{is_checkmate, legal_moves};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    touched: &'static [&'static str],
    expect_valid: bool,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening_push",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        touched: &["e2", "e4"],
        expect_valid: true,
    },
    BenchCase {
        name: "kingside_castle",
        fen: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        touched: &["e1", "g1", "f1", "h1"],
        expect_valid: true,
    },
    BenchCase {
        name: "en_passant",
        fen: "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        touched: &["e5", "d5", "d6"],
        expect_valid: true,
    },
    BenchCase {
        name: "parallax_capture",
        fen: "3qk3/8/8/8/8/8/8/3RK3 w - - 0 1",
        touched: &["d1:40", "d7:8", "d8:35"],
        expect_valid: true,
    },
    BenchCase {
        name: "illegal_touch",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        touched: &["e2", "e5"],
        expect_valid: false,
    },
];

fn bench_correlate(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(50);

    let correlator = ChangeCorrelator::default();

    for case in CASES {
        let base = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        let mut warmup = base.clone();
        let result = correlator
            .correlate_names(&mut warmup, case.touched)
            .expect("benchmark squares should parse");
        assert_eq!(result.is_valid(), case.expect_valid, "unexpected result for {}", case.name);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &base, |b, base| {
            b.iter(|| {
                let mut game = base.clone();
                let result = correlator
                    .correlate_names(&mut game, black_box(case.touched))
                    .expect("benchmark squares should parse");
                black_box(matches!(result, MoveResult::Valid { .. }))
            });
        });
    }

    group.finish();
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    group.sample_size(50);

    let middlegame = GameState::from_fen("r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10")
        .expect("benchmark FEN should parse");
    assert_eq!(legal_moves(&middlegame).len(), 46);

    group.bench_function("legal_moves_middlegame", |b| {
        b.iter(|| black_box(legal_moves(black_box(&middlegame)).len()))
    });
    group.bench_function("checkmate_probe_middlegame", |b| {
        b.iter(|| black_box(is_checkmate(black_box(&middlegame), middlegame.side_to_move)))
    });

    group.finish();
}

criterion_group!(correlator_benches, bench_correlate, bench_rules);
criterion_main!(correlator_benches);

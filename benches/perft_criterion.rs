use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::chess_types::{PieceId, PieceKind, Square, Team};
use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::perft::perft_legal;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    build: fn() -> GameState,
    expected_nodes: &'static [u64],
}

fn start_position() -> GameState {
    GameState::new_game()
}

/// 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -
fn rook_pawn_endgame() -> GameState {
    let pieces: [(Square, Team, PieceKind); 10] = [
        (50, Team::Second, PieceKind::Pawn),
        (43, Team::Second, PieceKind::Pawn),
        (32, Team::First, PieceKind::King),
        (33, Team::First, PieceKind::Pawn),
        (39, Team::Second, PieceKind::Rook),
        (25, Team::First, PieceKind::Rook),
        (29, Team::Second, PieceKind::Pawn),
        (31, Team::Second, PieceKind::King),
        (12, Team::First, PieceKind::Pawn),
        (14, Team::First, PieceKind::Pawn),
    ];
    let mut game = GameState::new_empty();
    for (square, team, kind) in pieces {
        game.place_piece(square, PieceId::new(team, kind))
            .expect("benchmark square should be on the board");
    }
    game
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start_position",
        build: start_position,
        expected_nodes: &[20, 400],
    },
    BenchCase {
        name: "rook_pawn_endgame",
        build: rook_pawn_endgame,
        expected_nodes: &[14, 191],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start_position",
        build: start_position,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "rook_pawn_endgame",
        build: rook_pawn_endgame,
        expected_nodes: &[14, 191, 2812],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = (case.build)();

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft_legal(&game, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft_legal(black_box(&bench_game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);

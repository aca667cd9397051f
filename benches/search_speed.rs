use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use searchlab::core::{Player, PlayerMark};
use searchlab::game::connect_four::C4Board;
use searchlab::game::knights_tour::{tour, Square};
use searchlab::game::tictactoe::TTTBoard;
use searchlab::player::{c4_heuristic, ABAi, MinMaxAi};

fn alpha_beta_move() {
    let mut ai = ABAi::new(PlayerMark::Naught, c4_heuristic, 5);
    let board = C4Board::default();
    black_box(ai.play(&board).ok());
}

fn minimax_move() {
    let mut ai = MinMaxAi::new(PlayerMark::Naught);
    let board = TTTBoard::default();
    black_box(ai.play(&board).ok());
}

fn knights_tour() {
    black_box(tour(Square { row: 0, col: 0 }).ok());
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.measurement_time(Duration::from_secs(15));
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(20);
    group.bench_function("alpha-beta-c4-depth-5", |b| b.iter(alpha_beta_move));
    group.bench_function("minimax-ttt-empty", |b| b.iter(minimax_move));
    group.sample_size(100);
    group.bench_function("knights-tour-corner", |b| b.iter(knights_tour));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use board_games::chess::{find_best_move, Board};
use board_games::connect_four::{best_column, Grid, Player};

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let mut startpos = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| find_best_move(&mut startpos, black_box(depth)))
        });
    }

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame_depth_3", |b| {
        b.iter(|| find_best_move(&mut middlegame, black_box(3)))
    });

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.evaluate())));

    group.finish();
}

fn bench_connect_four(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect_four");
    group.sample_size(10);

    let mut grid = Grid::new();
    grid.drop(3, Player::One).expect("open column");
    grid.drop(3, Player::Two).expect("open column");
    grid.drop(2, Player::One).expect("open column");

    for depth in [3, 5] {
        group.bench_with_input(
            BenchmarkId::new("best_column", depth),
            &depth,
            |b, &depth| b.iter(|| best_column(&mut grid, black_box(depth), Player::Two)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_evaluation,
    bench_connect_four
);
criterion_main!(benches);

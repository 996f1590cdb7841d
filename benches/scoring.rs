use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bowling::core::{score_rolls, BowlingGame};
use tui_bowling::term::{ScoreboardView, Viewport};

fn bench_score_perfect_game(c: &mut Criterion) {
    let rolls = [10u8; 12];

    c.bench_function("score_perfect_game", |b| {
        b.iter(|| score_rolls(black_box(&rolls)))
    });
}

fn bench_score_all_spares(c: &mut Criterion) {
    let rolls = [5u8; 21];

    c.bench_function("score_all_spares", |b| {
        b.iter(|| score_rolls(black_box(&rolls)))
    });
}

fn bench_replay_full_game(c: &mut Criterion) {
    c.bench_function("replay_full_game", |b| {
        b.iter(|| {
            let mut game = BowlingGame::new();
            for _ in 0..12 {
                game.record_roll(black_box(10)).unwrap();
            }
            game.score().unwrap()
        })
    });
}

fn bench_render_scoreboard(c: &mut Criterion) {
    let mut game = BowlingGame::new();
    for _ in 0..12 {
        game.record_roll(10).unwrap();
    }
    let snap = game.snapshot();
    let view = ScoreboardView;

    c.bench_function("render_scoreboard_80x24", |b| {
        b.iter(|| view.render(black_box(&snap), None, Viewport::new(80, 24)))
    });
}

criterion_group!(
    benches,
    bench_score_perfect_game,
    bench_score_all_spares,
    bench_replay_full_game,
    bench_render_scoreboard
);
criterion_main!(benches);

//! Criterion benchmarks for the scoring hot path

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use padel_score::core::ScoreEngine;
use padel_score::types::{GameMode, Player, ScoreAction, ScoringVariant};

fn bench_vinnarbana_set(c: &mut Criterion) {
    c.bench_function("vinnarbana_full_set", |b| {
        b.iter(|| {
            let mut engine = ScoreEngine::new();
            engine.apply(ScoreAction::SetScoringVariant(ScoringVariant::GoldenPoint));
            // 24 straight points: six 6-0 games, one set
            for _ in 0..24 {
                engine.apply(ScoreAction::PointWon(black_box(Player::One)));
            }
            black_box(engine.state().sets.p1)
        })
    });
}

fn bench_mexicano_match(c: &mut Criterion) {
    c.bench_function("mexicano_match_to_24", |b| {
        b.iter(|| {
            let mut engine = ScoreEngine::new();
            engine.apply(ScoreAction::SetGameMode(GameMode::Mexicano));
            for i in 0..24u16 {
                let player = if i % 2 == 0 { Player::One } else { Player::Two };
                engine.apply(ScoreAction::PointWon(black_box(player)));
            }
            black_box(engine.state().points.total())
        })
    });
}

fn bench_undo_walkback(c: &mut Criterion) {
    c.bench_function("undo_full_history", |b| {
        b.iter(|| {
            let mut engine = ScoreEngine::new();
            for _ in 0..20 {
                engine.apply(ScoreAction::PointWon(Player::One));
            }
            while engine.can_undo() {
                engine.apply(ScoreAction::Undo);
            }
            black_box(engine.state().points.p1)
        })
    });
}

criterion_group!(
    benches,
    bench_vinnarbana_set,
    bench_mexicano_match,
    bench_undo_walkback
);
criterion_main!(benches);

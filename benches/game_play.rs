//! Full-game and tournament throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_ludo::core::RulesConfig;
use rust_ludo::game::Game;
use rust_ludo::strategy::{StrategyFactory, StrategyRegistry};
use rust_ludo::tournament::{Tournament, TournamentConfig};

fn bench_single_game(c: &mut Criterion) {
    let registry = StrategyRegistry::with_builtins();
    let names = ["random", "striker", "first", "last"];
    let mut seed = 0u64;

    c.bench_function("game_4_players", |b| {
        b.iter(|| {
            seed += 1;
            let strategies = names
                .iter()
                .map(|name| registry.get_strategy(name, seed))
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            let outcome = Game::new(RulesConfig::default(), strategies, seed).unwrap().play();
            black_box(outcome.turns)
        })
    });
}

fn bench_tournament(c: &mut Criterion) {
    let registry = StrategyRegistry::with_builtins();
    let brackets: Vec<Vec<String>> = (0..8)
        .map(|_| vec!["random".to_string(), "striker".to_string(), "last".to_string()])
        .collect();
    let tournament = Tournament::new(
        TournamentConfig::new().with_games(10),
        RulesConfig::default(),
        brackets,
    );

    c.bench_function("tournament_8x10", |b| {
        b.iter(|| black_box(tournament.run(&registry).unwrap().total()))
    });
}

criterion_group!(benches, bench_single_game, bench_tournament);
criterion_main!(benches);

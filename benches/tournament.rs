use criterion::BenchmarkId;
use criterion::Criterion;

use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tourney::arena::{RngDiceMatchEngine, TournamentResult, run_tournament};
use tourney::core::RosterEntry;
use tourney::schedule::TournamentKind;

const TARGET_SCORE: u32 = 10;

fn run_one(kind: TournamentKind, num_players: usize) -> TournamentResult {
    let entries = (0..num_players).map(|i| RosterEntry::new(format!("Player{i}"), "CZ"));
    let engine = RngDiceMatchEngine::new(6, StdRng::seed_from_u64(420)).unwrap();
    run_tournament(kind, entries, TARGET_SCORE, engine).unwrap()
}

fn bench_tournaments(c: &mut Criterion) {
    for kind in TournamentKind::ALL {
        let mut group = c.benchmark_group(format!("tournament_{kind}"));
        for num_players in [4, 8, 13, 24] {
            group.bench_with_input(
                BenchmarkId::from_parameter(num_players),
                &num_players,
                |b, num_players| {
                    b.iter(|| run_one(kind, *num_players));
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_tournaments);
criterion_main!(benches);

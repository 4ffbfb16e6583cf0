use criterion::BenchmarkId;
use criterion::Criterion;

use criterion::criterion_group;
use criterion::criterion_main;
use tourney::core::CompetitorId;
use tourney::schedule::round_robin;
use tourney::schedule::{RoundGenerator, Scheduler, TournamentKind};

const FIELD_SIZES: [usize; 5] = [4, 13, 32, 101, 256];

fn ids(n: usize) -> Vec<CompetitorId> {
    (0..n).map(CompetitorId).collect()
}

/// Walk a bracket to the end with the home side always advancing.
fn walk_bracket(n: usize) -> usize {
    let mut scheduler = Scheduler::new(TournamentKind::Elimination, ids(n));
    let mut rounds = 0;
    while let Some(round) = scheduler.next_round().unwrap() {
        let advancing: Vec<CompetitorId> = round.pairings.iter().map(|p| p.first()).collect();
        scheduler.advance(&advancing).unwrap();
        rounds += 1;
    }
    rounds
}

fn bench_round_robin(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_schedule");
    for n in FIELD_SIZES {
        let competitors = ids(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &competitors, |b, competitors| {
            b.iter(|| round_robin::schedule(competitors));
        });
    }
    group.finish();
}

fn bench_elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination_bracket");
    for n in FIELD_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, n| {
            b.iter(|| walk_bracket(*n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_round_robin, bench_elimination);
criterion_main!(benches);

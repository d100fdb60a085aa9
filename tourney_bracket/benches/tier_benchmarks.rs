use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tourney_bracket::{BracketGraph, Match, ResolverConfig, TierResolver, resolve_tiers};

/// Single-elimination bracket with `rounds` rounds, final id 1
fn knockout(rounds: u32) -> Vec<Match> {
    let total = (1i64 << rounds) - 1;
    (1..=total)
        .map(|id| {
            let m = Match::new(id, format!("Match {id}"));
            if id == 1 { m } else { m.with_winner_parent(id / 2) }
        })
        .collect()
}

/// Knockout plus a losers bracket chain where every winners-bracket match
/// also sends its loser into the chain
fn double_elimination(rounds: u32) -> Vec<Match> {
    let mut matches = knockout(rounds);
    let winners = matches.len() as i64;
    let chain_start = winners + 1;

    for (offset, m) in matches.iter_mut().enumerate().skip(1) {
        m.loser_parent = Some(chain_start + offset as i64);
    }
    for offset in 0..winners {
        let id = chain_start + offset;
        let m = Match::new(id, format!("Losers {offset}"));
        matches.push(if offset == 0 {
            m.with_loser_parent(1)
        } else {
            m.with_winner_parent(id - 1)
        });
    }
    matches
}

/// Benchmark resolution of plain knockouts of growing size
fn bench_resolve_knockout(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_knockout");

    for rounds in [3u32, 6, 9] {
        let matches = knockout(rounds);
        group.bench_with_input(BenchmarkId::from_parameter(matches.len()), &matches, |b, m| {
            b.iter(|| resolve_tiers(black_box(m)));
        });
    }

    group.finish();
}

/// Benchmark resolution with shared feeders kept at their nearest tier
fn bench_resolve_double_elimination(c: &mut Criterion) {
    let resolver = TierResolver::new(ResolverConfig::double_elimination());
    let matches = double_elimination(7);

    c.bench_function("resolve_double_elimination_254", |b| {
        b.iter(|| resolver.resolve(black_box(&matches)));
    });
}

/// Benchmark graph construction and cycle check alone
fn bench_graph_build(c: &mut Criterion) {
    let matches = knockout(9);

    c.bench_function("graph_build_and_cycle_check_511", |b| {
        b.iter(|| {
            let graph = BracketGraph::build(black_box(&matches)).unwrap();
            graph.find_cycle()
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_knockout,
    bench_resolve_double_elimination,
    bench_graph_build
);
criterion_main!(benches);

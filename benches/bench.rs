//! Criterion benchmarks for the shortlist matching engine.
//!
//! Covers the two hot paths: the scoring inner loop over a full-size
//! profile pool, and both ranking strategies over the scored output.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shortlist::config::{EngineConfig, SortStrategy};
use shortlist::rank::Ranker;
use shortlist::record::{Posting, Profile};
use shortlist::scoring::{ScoringEngine, SkillSelection};
use shortlist::skill_set::SkillSet;
use shortlist::store::RecordStore;

const SKILLS: &[&str] = &[
    "sql", "excel", "python", "java", "html", "css", "javascript", "rust", "go", "c++",
    "bookkeeping", "care", "triage", "writing", "design", "testing", "networking", "linux",
    "docker", "kubernetes",
];

fn sample_pool(count: usize) -> RecordStore<Profile> {
    let mut pool = RecordStore::array(count);
    for i in 0..count {
        // Deterministic, varied skill subsets.
        let skills: SkillSet = SKILLS
            .iter()
            .enumerate()
            .filter(|(j, _)| (i + j) % 3 != 0)
            .map(|(_, s)| *s)
            .collect();
        pool.insert(Profile::new(format!("profile {i}"), skills))
            .expect("pool has room");
    }
    pool
}

fn bench_scoring(c: &mut Criterion) {
    let posting = Posting::new("Platform Engineer", SkillSet::from_line("rust,go,linux,docker,kubernetes"));
    let pool = sample_pool(500);
    let engine = ScoringEngine::new(&EngineConfig::default());
    let selection = SkillSelection::weighted(vec![0, 1, 2, 3, 4], vec![5, 3, 2, 4, 6]);

    let mut group = c.benchmark_group("scoring");
    group.throughput(Throughput::Elements(500));
    group.bench_function("score_500_profiles", |b| {
        b.iter(|| {
            let scored = engine
                .score(black_box(&posting), black_box(&selection), black_box(&pool))
                .expect("valid selection");
            black_box(scored)
        })
    });
    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let posting = Posting::new("Platform Engineer", SkillSet::from_line("rust,go,linux,docker,kubernetes"));
    let pool = sample_pool(500);
    let engine = ScoringEngine::new(&EngineConfig::default());
    let selection = SkillSelection::weighted(vec![0, 1, 2, 3, 4], vec![5, 3, 2, 4, 6]);
    let scored = engine
        .score(&posting, &selection, &pool)
        .expect("valid selection");

    let mut group = c.benchmark_group("ranking");
    group.throughput(Throughput::Elements(500));
    for strategy in [SortStrategy::Insertion, SortStrategy::Merge] {
        let ranker = Ranker::new(strategy);
        group.bench_function(format!("rank_500_{strategy:?}").to_lowercase(), |b| {
            b.iter(|| black_box(ranker.rank(black_box(scored.clone()))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scoring, bench_ranking);
criterion_main!(benches);

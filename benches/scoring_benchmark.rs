use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use word_game_engine::similarity::{cosine_similarity, jaccard_chars};
use word_game_engine::{SimilarityScorer, StaticVectorSource};

fn bench_cosine(c: &mut Criterion) {
    let u: Vec<f32> = (0..300).map(|i| (i as f32 * 0.37).sin()).collect();
    let v: Vec<f32> = (0..300).map(|i| (i as f32 * 0.11).cos()).collect();

    c.bench_function("cosine_300d", |b| {
        b.iter(|| black_box(cosine_similarity(black_box(&u), black_box(&v))));
    });
}

fn bench_jaccard(c: &mut Criterion) {
    c.bench_function("jaccard_chars", |b| {
        b.iter(|| black_box(jaccard_chars(black_box("lighthouse"), black_box("mountain"))));
    });
}

fn bench_scorer(c: &mut Criterion) {
    let source = StaticVectorSource::new()
        .with_vector("ocean", (0..300).map(|i| (i as f32 * 0.37).sin()).collect())
        .with_vector("sea", (0..300).map(|i| (i as f32 * 0.35).sin()).collect());
    let with_model = SimilarityScorer::new(Arc::new(source));
    let without_model = SimilarityScorer::without_model();

    c.bench_function("score_embedding", |b| {
        b.iter(|| black_box(with_model.score("ocean", "sea")));
    });

    c.bench_function("score_fallback", |b| {
        b.iter(|| black_box(without_model.score("ocean", "sea")));
    });

    c.bench_function("score_exact", |b| {
        b.iter(|| black_box(with_model.score("Ocean", "ocean ")));
    });
}

criterion_group!(benches, bench_cosine, bench_jaccard, bench_scorer);
criterion_main!(benches);

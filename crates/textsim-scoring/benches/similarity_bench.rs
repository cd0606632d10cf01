use criterion::{criterion_group, criterion_main, Criterion};

use textsim_core::models::{Token, WeightedToken};
use textsim_scoring::algorithms::cosine;
use textsim_scoring::algorithms::weighting::{tag_weights, RawFrequency};
use textsim_scoring::engine::SimilarityEngine;
use textsim_scoring::segmenters::WhitespaceSegmenter;

/// Build two overlapping weighted sequences over a shared vocabulary.
fn build_sequences(len: usize, vocab: usize) -> (Vec<WeightedToken>, Vec<WeightedToken>) {
    let make = |offset: usize| -> Vec<WeightedToken> {
        (0..len)
            .map(|i| {
                let name = format!("t{}", (i * 7 + offset) % vocab);
                WeightedToken::unweighted(Token::new(name, "n"))
            })
            .collect()
    };
    tag_weights(make(0), make(3), &RawFrequency)
}

fn bench_cosine_sequential(c: &mut Criterion) {
    // 64-name vocabulary stays below the parallel threshold.
    let (a, b) = build_sequences(200, 64);
    c.bench_function("cosine_200_tokens_64_vocab", |bencher| {
        bencher.iter(|| cosine::score(&a, &b));
    });
}

fn bench_cosine_parallel(c: &mut Criterion) {
    // 2K-name vocabulary crosses the parallel threshold.
    let (a, b) = build_sequences(5_000, 2_000);
    c.bench_function("cosine_5k_tokens_2k_vocab", |bencher| {
        bencher.iter(|| cosine::score(&a, &b));
    });
}

fn bench_similarity_end_to_end(c: &mut Criterion) {
    let engine = SimilarityEngine::new(Box::new(WhitespaceSegmenter));
    let text1: String = (0..200)
        .map(|i| format!("word{} ", i % 50))
        .collect();
    let text2: String = (0..200)
        .map(|i| format!("word{} ", (i + 25) % 60))
        .collect();

    c.bench_function("similarity_text_200_words", |bencher| {
        bencher.iter(|| engine.similarity(&text1, &text2).unwrap());
    });
}

criterion_group!(
    benches,
    bench_cosine_sequential,
    bench_cosine_parallel,
    bench_similarity_end_to_end
);
criterion_main!(benches);

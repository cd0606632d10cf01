//! Cosine scoring across the union vocabulary of two weighted sequences.

use std::collections::HashSet;

use rayon::prelude::*;

use textsim_core::config::defaults;
use textsim_core::constants::QUOTIENT_SCALE;
use textsim_core::models::WeightedToken;

use super::rounding::round_half_up;
use super::vector_index::index;

/// Dot product and the two squared magnitudes, accumulated together.
type Accumulators = (f32, f32, f32);

/// Cosine similarity of two weight-tagged sequences, using the default
/// parallelism threshold.
pub fn score(seq_a: &[WeightedToken], seq_b: &[WeightedToken]) -> f64 {
    score_with_threshold(seq_a, seq_b, defaults::DEFAULT_PARALLEL_THRESHOLD)
}

/// Cosine similarity of two weight-tagged sequences.
///
/// Accumulation runs in `f32` (the weighting precision); magnitudes and
/// the quotient use `f64`. Vocabularies of `parallel_threshold` entries
/// or more are folded on rayon workers into per-worker partial triples
/// merged by a final reduction, so results are reproducible only up to
/// floating-point summation order. With integer-valued raw-count weights
/// every partial sum is integral and the result is exact for any worker
/// count.
///
/// A zero magnitude on either side yields `0.0`: a zero vector is
/// maximally dissimilar by convention, never a division error.
pub fn score_with_threshold(
    seq_a: &[WeightedToken],
    seq_b: &[WeightedToken],
    parallel_threshold: usize,
) -> f64 {
    let index_a = index(seq_a);
    let index_b = index(seq_b);

    // Union of distinct token names across both sides.
    let vocabulary: HashSet<&str> = seq_a
        .iter()
        .chain(seq_b.iter())
        .map(WeightedToken::name)
        .collect();

    let contribution = |name: &str| -> Accumulators {
        let x1 = index_a.get(name);
        let x2 = index_b.get(name);
        let dot = match (x1, x2) {
            (Some(x1), Some(x2)) => x1 * x2,
            _ => 0.0,
        };
        let aa = x1.map_or(0.0, |x| x * x);
        let bb = x2.map_or(0.0, |x| x * x);
        (dot, aa, bb)
    };

    fn add(a: Accumulators, b: Accumulators) -> Accumulators {
        (a.0 + b.0, a.1 + b.1, a.2 + b.2)
    }

    let (dot, sum_sq_a, sum_sq_b) = if vocabulary.len() >= parallel_threshold {
        let names: Vec<&str> = vocabulary.into_iter().collect();
        names
            .par_iter()
            .fold(
                || (0.0, 0.0, 0.0),
                |acc, name| add(acc, contribution(name)),
            )
            .reduce(|| (0.0, 0.0, 0.0), add)
    } else {
        vocabulary
            .iter()
            .fold((0.0, 0.0, 0.0), |acc, name| add(acc, contribution(name)))
    };

    // Precision boundary: single-precision sums, double-precision magnitudes.
    let mag_a = f64::from(sum_sq_a).sqrt();
    let mag_b = f64::from(sum_sq_b).sqrt();
    let denominator = mag_a * mag_b;

    if denominator == 0.0 {
        return 0.0;
    }

    round_half_up(f64::from(dot) / denominator, QUOTIENT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::weighting::{tag_weights, RawFrequency};
    use textsim_core::models::Token;

    fn tagged(names: &[&str]) -> Vec<WeightedToken> {
        let seq = names
            .iter()
            .map(|n| WeightedToken::unweighted(Token::new(*n, "n")))
            .collect();
        let (seq, _) = tag_weights(seq, vec![], &RawFrequency);
        seq
    }

    #[test]
    fn strawberry_scenario_scores_four_fifths() {
        // weights A = {草莓: 2, 特别: 1}, B = {草莓: 1, 特别: 2}
        // dot = 2*1 + 1*2 = 4, |A|² = 5, |B|² = 5, cosine = 4/5.
        let a = tagged(&["草莓", "草莓", "特别"]);
        let b = tagged(&["草莓", "特别", "特别"]);
        assert_eq!(score(&a, &b), 0.8);
    }

    #[test]
    fn identical_sequences_score_one() {
        let a = tagged(&["草莓", "草莓", "特别"]);
        assert_eq!(score(&a, &a), 1.0);
    }

    #[test]
    fn disjoint_vocabularies_score_zero() {
        let a = tagged(&["a", "b"]);
        let b = tagged(&["c", "d"]);
        assert_eq!(score(&a, &b), 0.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        let a = tagged(&["a", "b"]);
        assert_eq!(score(&a, &[]), 0.0);
        assert_eq!(score(&[], &a), 0.0);
        assert_eq!(score(&[], &[]), 0.0);
    }

    #[test]
    fn untagged_tokens_contribute_nothing() {
        let a: Vec<WeightedToken> = ["a", "b"]
            .iter()
            .map(|n| WeightedToken::unweighted(Token::new(*n, "n")))
            .collect();
        // No weights anywhere: both magnitudes are zero.
        assert_eq!(score(&a, &a), 0.0);
    }

    #[test]
    fn parallel_and_sequential_paths_agree() {
        let names: Vec<String> = (0..300).map(|i| format!("tok{}", i % 90)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let a = tagged(&refs[..200]);
        let b = tagged(&refs[100..]);

        let sequential = score_with_threshold(&a, &b, usize::MAX);
        let parallel = score_with_threshold(&a, &b, 1);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn symmetric() {
        let a = tagged(&["x", "y", "y", "z"]);
        let b = tagged(&["y", "z", "z"]);
        assert_eq!(score(&a, &b), score(&b, &a));
    }
}

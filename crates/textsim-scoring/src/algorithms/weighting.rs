//! Weight tagging: annotate each token with a weight derived from its
//! own sequence's term frequencies.

use std::collections::HashMap;

use tracing::debug;

use textsim_core::models::WeightedToken;
use textsim_core::traits::IWeightScheme;

use super::frequency::{frequency, frequency_listing};

/// Raw occurrence-count weighting.
///
/// No length normalization, no IDF: common tokens weigh exactly their
/// count. Changing this changes numeric outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFrequency;

impl IWeightScheme for RawFrequency {
    fn weight(&self, _name: &str, count: usize) -> f32 {
        count as f32
    }

    fn name(&self) -> &str {
        "raw-frequency"
    }
}

/// Assign each token's weight from its own sequence's frequency map.
///
/// Idempotence guard: if the first element of both sequences already
/// carries a weight, the inputs are returned unchanged. The guard
/// inspects only the first element of each side, so callers must not mix
/// partially-weighted and unweighted sequences.
///
/// Diagnostic side effect: the frequency-descending listing of each side
/// is emitted at DEBUG level. It never affects the returned sequences.
pub fn tag_weights(
    seq_a: Vec<WeightedToken>,
    seq_b: Vec<WeightedToken>,
    scheme: &dyn IWeightScheme,
) -> (Vec<WeightedToken>, Vec<WeightedToken>) {
    let a_tagged = seq_a.first().is_some_and(WeightedToken::is_weighted);
    let b_tagged = seq_b.first().is_some_and(WeightedToken::is_weighted);
    if a_tagged && b_tagged {
        return (seq_a, seq_b);
    }

    let freq_a = frequency(&seq_a);
    let freq_b = frequency(&seq_b);

    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!(
            scheme = scheme.name(),
            "token frequencies, side A:\n{}",
            frequency_listing(&freq_a)
        );
        debug!(
            scheme = scheme.name(),
            "token frequencies, side B:\n{}",
            frequency_listing(&freq_b)
        );
    }

    (
        assign(seq_a, &freq_a, scheme),
        assign(seq_b, &freq_b, scheme),
    )
}

fn assign(
    tokens: Vec<WeightedToken>,
    freq: &HashMap<String, usize>,
    scheme: &dyn IWeightScheme,
) -> Vec<WeightedToken> {
    tokens
        .into_iter()
        .map(|mut wt| {
            // Every name in the sequence is present in its frequency map.
            let count = freq.get(wt.name()).copied().unwrap_or(0);
            wt.weight = Some(scheme.weight(&wt.token.name, count));
            wt
        })
        .collect()
}

//! Name→weight lookup maps for O(1) access during scoring.

use std::collections::HashMap;

use tracing::warn;

use textsim_core::models::WeightedToken;

/// Build a direct name→weight lookup from a weighted sequence.
///
/// A token with no assigned weight is skipped and logged, a fallback for
/// malformed tagging output rather than an expected path. Empty input
/// yields an empty map.
pub fn index(tokens: &[WeightedToken]) -> HashMap<String, f32> {
    let mut map = HashMap::with_capacity(tokens.len());
    for wt in tokens {
        match wt.weight {
            Some(weight) => {
                map.insert(wt.name().to_string(), weight);
            }
            None => {
                warn!(token = wt.name(), "token has no weight, skipping");
            }
        }
    }
    map
}

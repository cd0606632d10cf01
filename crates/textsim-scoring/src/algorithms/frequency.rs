//! Term frequency counting over segmented token sequences.

use std::collections::HashMap;

use textsim_core::models::WeightedToken;

/// Count occurrences of each token name in the input sequence.
///
/// Input order is irrelevant to the output. Counts are strictly positive;
/// names absent from the input never appear in the map.
pub fn frequency(tokens: &[WeightedToken]) -> HashMap<String, usize> {
    let mut freq: HashMap<String, usize> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *freq.entry(token.name().to_string()).or_insert(0) += 1;
    }
    freq
}

/// Human-readable, frequency-descending listing of `name=count` pairs.
///
/// Ties are broken by map iteration order, which is unspecified; this is
/// diagnostic output only, never an input to scoring.
pub fn frequency_listing(freq: &HashMap<String, usize>) -> String {
    let mut entries: Vec<(&String, &usize)> = freq.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));

    let mut out = String::new();
    for (rank, (name, count)) in entries.iter().enumerate() {
        out.push_str(&format!("\t{}. {}={}\n", rank + 1, name, count));
    }
    out.pop();
    out
}

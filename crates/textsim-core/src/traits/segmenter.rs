use crate::errors::TextsimResult;
use crate::models::Token;

/// External text segmenter.
///
/// Implementations must be deterministic for a given text and dictionary
/// version. How text is split into tokens is entirely the implementation's
/// contract; the core does not validate tag values.
pub trait ISegmenter: Send + Sync {
    /// Segment text into an ordered sequence of tokens.
    fn segment(&self, text: &str) -> TextsimResult<Vec<Token>>;

    /// Human-readable segmenter name.
    fn name(&self) -> &str;
}

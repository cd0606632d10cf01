//! SimilarityEngine: facade over segmentation, weight tagging, and scoring.

use tracing::debug;

use textsim_core::config::ScoringConfig;
use textsim_core::constants::SCORE_SCALE;
use textsim_core::errors::TextsimResult;
use textsim_core::models::WeightedToken;
use textsim_core::traits::{ISegmenter, IWeightScheme};

use crate::algorithms::cosine;
use crate::algorithms::rounding::round_half_up;
use crate::algorithms::weighting::{tag_weights, RawFrequency};

/// The similarity facade.
///
/// Holds the injected segmenter and weighting scheme, handles degenerate
/// inputs, and rounds the final score to exactly 6 decimal digits.
pub struct SimilarityEngine {
    segmenter: Box<dyn ISegmenter>,
    weight_scheme: Box<dyn IWeightScheme>,
    config: ScoringConfig,
}

impl SimilarityEngine {
    /// Create an engine with raw-frequency weighting and default config.
    pub fn new(segmenter: Box<dyn ISegmenter>) -> Self {
        Self::with_config(segmenter, ScoringConfig::default())
    }

    pub fn with_config(segmenter: Box<dyn ISegmenter>, config: ScoringConfig) -> Self {
        Self {
            segmenter,
            weight_scheme: Box::new(RawFrequency),
            config,
        }
    }

    /// Replace the weighting scheme.
    pub fn with_weight_scheme(mut self, scheme: Box<dyn IWeightScheme>) -> Self {
        self.weight_scheme = scheme;
        self
    }

    /// Similarity of two texts, in `[0.0, 1.0]`.
    ///
    /// Two blank inputs are identical (1.0); exactly one blank input is
    /// maximally dissimilar (0.0). Identical non-blank texts take no
    /// string-equality shortcut: they are routed through segmentation
    /// and scoring like any other pair, so tokenization artifacts apply
    /// uniformly. A segmenter failure surfaces unchanged.
    pub fn similarity(&self, text1: &str, text2: &str) -> TextsimResult<f64> {
        let blank1 = text1.trim().is_empty();
        let blank2 = text2.trim().is_empty();
        if blank1 && blank2 {
            return Ok(1.0);
        }
        if blank1 || blank2 {
            return Ok(0.0);
        }

        let seq_a = self.segment(text1)?;
        let seq_b = self.segment(text2)?;
        Ok(self.similarity_of_tokens(seq_a, seq_b))
    }

    /// Similarity of two pre-segmented sequences, for callers who already
    /// tokenized or want to bypass segmentation.
    ///
    /// Two empty sequences score 0.0 under the scorer's zero-magnitude
    /// convention; the blank-input 1.0 rule applies to texts only.
    pub fn similarity_of_tokens(
        &self,
        seq_a: Vec<WeightedToken>,
        seq_b: Vec<WeightedToken>,
    ) -> f64 {
        let (seq_a, seq_b) = tag_weights(seq_a, seq_b, self.weight_scheme.as_ref());
        let raw = cosine::score_with_threshold(&seq_a, &seq_b, self.config.parallel_threshold);
        round_half_up(raw, SCORE_SCALE)
    }

    fn segment(&self, text: &str) -> TextsimResult<Vec<WeightedToken>> {
        let tokens = self.segmenter.segment(text)?;
        debug!(
            segmenter = self.segmenter.name(),
            count = tokens.len(),
            "segmented input"
        );
        Ok(tokens.into_iter().map(WeightedToken::unweighted).collect())
    }
}

use textsim_core::errors::TextsimResult;
use textsim_core::models::Token;
use textsim_core::traits::ISegmenter;

/// Tag applied to every token this segmenter produces.
const WORD_TAG: &str = "w";

/// Always-available fallback segmenter.
///
/// Treats contiguous alphanumeric runs (underscore included) as tokens
/// and tags everything `"w"`. Deterministic and infallible. Unspaced CJK
/// text comes back as one token per run; inject a dictionary-based
/// segmenter for those languages.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl ISegmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> TextsimResult<Vec<Token>> {
        Ok(text
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| !s.is_empty())
            .map(|s| Token::new(s, WORD_TAG))
            .collect())
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

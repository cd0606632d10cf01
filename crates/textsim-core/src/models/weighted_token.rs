use serde::{Deserialize, Serialize};

use super::Token;

/// A token plus the weight assigned by the weight tagger.
///
/// The weight starts unset and is assigned exactly once per distinct
/// token sequence. The tagger's idempotence guard inspects only the
/// first element of each sequence, so sequences must not mix weighted
/// and unweighted tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedToken {
    pub token: Token,
    /// Occurrence-count weight; `None` until tagged.
    pub weight: Option<f32>,
}

impl WeightedToken {
    /// Wrap a freshly segmented token with no weight assigned.
    pub fn unweighted(token: Token) -> Self {
        Self {
            token,
            weight: None,
        }
    }

    /// Surface form of the underlying token.
    pub fn name(&self) -> &str {
        &self.token.name
    }

    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }
}

impl From<Token> for WeightedToken {
    fn from(token: Token) -> Self {
        Self::unweighted(token)
    }
}

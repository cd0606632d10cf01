use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// One segmented unit of text plus its lexical category tag.
///
/// Equality and hashing are keyed by `name` alone: two tokens with the
/// same surface form but different tags occupy the same vocabulary
/// dimension. The tag is carried through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface form produced by the segmenter.
    pub name: String,
    /// Lexical category tag (e.g. a part-of-speech code).
    pub tag: String,
}

impl Token {
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

//! Trait seams between the core pipeline and its collaborators.

mod segmenter;
mod weight_scheme;

pub use segmenter::ISegmenter;
pub use weight_scheme::IWeightScheme;

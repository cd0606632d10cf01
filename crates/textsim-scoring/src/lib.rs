//! # textsim-scoring
//!
//! The vectorization-and-scoring pipeline: token sequences → term
//! frequencies → weighted vectors → cosine score.
//! Segmentation is an injected collaborator (`ISegmenter`); diagnostics
//! go through `tracing` and never affect returned values.

pub mod algorithms;
pub mod engine;
pub mod segmenters;

pub use engine::SimilarityEngine;
pub use segmenters::WhitespaceSegmenter;

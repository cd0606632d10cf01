//! Shipped segmenter implementations.
//!
//! Production callers inject a dictionary-based segmenter through
//! `ISegmenter`; the whitespace segmenter keeps the pipeline usable in
//! tests and air-gapped environments.

mod whitespace;

pub use whitespace::WhitespaceSegmenter;

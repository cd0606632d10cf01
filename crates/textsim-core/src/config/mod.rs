//! Configuration for the scoring pipeline.

pub mod defaults;

mod scoring_config;

pub use scoring_config::ScoringConfig;

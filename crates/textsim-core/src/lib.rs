//! # textsim-core
//!
//! Foundation crate for the textsim similarity pipeline.
//! Defines token models, traits, errors, config, and constants.
//! The scoring crate builds on top of this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{TextsimError, TextsimResult};
pub use models::{Token, WeightedToken};

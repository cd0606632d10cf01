/// Textsim system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scale for the final score rounding: 6 decimal digits.
pub const SCORE_SCALE: f64 = 1_000_000.0;

/// Scale for the raw cosine quotient rounding: 9 decimal digits.
pub const QUOTIENT_SCALE: f64 = 1_000_000_000.0;

//! Half-up rounding at fixed decimal scales.

/// Round a non-negative value half-up at the given decimal scale
/// (`1e6` keeps 6 fractional digits, `1e9` keeps 9).
///
/// Multiply by the scale, add 0.5, truncate toward zero, divide back.
/// Only correct for non-negative values, which holds here because weight
/// vectors are non-negative, so scores are too.
pub fn round_half_up(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).trunc() / scale
}

/// Errors surfaced by the similarity pipeline.
///
/// Degenerate inputs are handled by defined fallback values, not errors;
/// the only contract failure is a segmenter refusing its input, which the
/// facade surfaces unchanged.
#[derive(Debug, thiserror::Error)]
pub enum TextsimError {
    #[error("segmentation failed: {reason}")]
    SegmentationFailed { reason: String },
}

/// Result alias used across the workspace.
pub type TextsimResult<T> = Result<T, TextsimError>;

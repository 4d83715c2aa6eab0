use thiserror::Error;

/// Errors reported by the fallible range slider constructors.
///
/// Interaction handlers and setters never return errors; they fall back to
/// the previous valid state instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeSliderError {
    /// `min` is not strictly below `max`.
    #[error("empty range: min ({min}) must be less than max ({max})")]
    EmptyRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// `step` is zero or negative.
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    /// A configuration field was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

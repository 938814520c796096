//! # Errors
//!
//! Failures surfaced by the weight-update pipeline.

use thiserror::Error;

/// Errors raised by the projection and weight-update steps.
///
/// The estimator, tester and penalty never fail: degenerate inputs map to
/// neutral values there (autocorrelation 0, p-value 1, penalty 0).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutocorrError {
  /// Caller supplied an invalid parameter or weight vector.
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
  /// The computation reached a state it cannot recover from.
  #[error("numerical failure: {0}")]
  NumericalFailure(String),
}

pub type AutocorrResult<T> = Result<T, AutocorrError>;

//! # Autocorrelation-Adjusted Weights
//!
//! $$
//! \mathbf w_1 = \Pi_{\Delta_1}\big(\max(\tfrac{\mathbf w_0}{\mathbf 1^\top\mathbf w_0}(1-\pi),\ c)\big),
//! \qquad \pi = \operatorname{clip}_{[0,1]}\big(\lambda(1-p_{LB})\big)
//! $$
//!
//! Shrinks portfolio weights in proportion to the Ljung-Box evidence of serial
//! correlation in the recent cumulative-return history, then re-projects them
//! onto the unit simplex.

use tracing::debug;
use tracing::warn;

use super::simplex::project_to_simplex;
use crate::error::AutocorrError;
use crate::error::AutocorrResult;
use crate::stats::ljung_box::ljung_box_pvalue;

/// Configuration for the autocorrelation penalty.
#[derive(Debug, Clone, Copy)]
pub struct AutocorrPenaltyConfig {
  /// Multiplier applied to `1 - p`.
  pub penalty_scale: f64,
  /// Number of Ljung-Box lags.
  pub lb_lags: usize,
  /// Number of most recent observations tested.
  pub window: usize,
  /// Series shorter than this are never penalized.
  pub min_n: usize,
}

impl Default for AutocorrPenaltyConfig {
  fn default() -> Self {
    Self {
      penalty_scale: 0.05,
      lb_lags: 5,
      window: 200,
      min_n: 30,
    }
  }
}

/// Configuration for [`autocorr_adjusted_update`].
#[derive(Debug, Clone, Copy)]
pub struct AutocorrUpdateConfig {
  /// Penalty settings used for the Ljung-Box step.
  pub penalty: AutocorrPenaltyConfig,
  /// Element-wise floor applied before re-projection.
  pub clip_min: f64,
}

impl Default for AutocorrUpdateConfig {
  fn default() -> Self {
    Self {
      penalty: AutocorrPenaltyConfig::default(),
      clip_min: 1e-12,
    }
  }
}

/// Output of a single weight update.
#[derive(Debug, Clone)]
pub struct AutocorrUpdate {
  /// Updated weights, non-negative and summing to one.
  pub weights: Vec<f64>,
  /// Penalty that was applied, in [0, 1].
  pub penalty: f64,
}

/// Risk penalty in [0, 1] derived from the Ljung-Box p-value of `cum_returns`.
///
/// Returns `0.0` when the series has fewer than `cfg.min_n` observations.
pub fn autocorr_penalty(cum_returns: &[f64], cfg: &AutocorrPenaltyConfig) -> f64 {
  if cum_returns.len() < cfg.min_n {
    return 0.0;
  }

  let p = ljung_box_pvalue(cum_returns, cfg.lb_lags, cfg.window);
  let pen = cfg.penalty_scale * (1.0 - p);

  if !pen.is_finite() {
    warn!(
      penalty_scale = cfg.penalty_scale,
      p_value = p,
      "non-finite autocorrelation penalty, falling back to 0"
    );
    return 0.0;
  }

  let pen = pen.clamp(0.0, 1.0);
  debug!(p_value = p, penalty = pen, "autocorrelation penalty");
  pen
}

fn normalize_weights(weights: &[f64]) -> AutocorrResult<Vec<f64>> {
  if weights.iter().any(|w| *w < 0.0) {
    return Err(AutocorrError::InvalidConfig(
      "weights must be non-negative".into(),
    ));
  }

  let sum = weights.iter().sum::<f64>();
  if !(sum.is_finite() && sum > 0.0) {
    return Err(AutocorrError::InvalidConfig(format!(
      "weights must have positive, finite sum, got {sum}"
    )));
  }

  Ok(weights.iter().map(|w| w / sum).collect())
}

/// Penalize `weights` by the autocorrelation of `cum_returns` and project back
/// onto the unit simplex, reporting the penalty used.
///
/// # Errors
/// - [`AutocorrError::InvalidConfig`] for negative weights, a non-positive or
///   non-finite weight sum, or a negative or non-finite `clip_min`.
/// - [`AutocorrError::NumericalFailure`] if the final projection fails.
pub fn autocorr_adjusted_update_report(
  weights: &[f64],
  cum_returns: &[f64],
  cfg: &AutocorrUpdateConfig,
) -> AutocorrResult<AutocorrUpdate> {
  if !(cfg.clip_min.is_finite() && cfg.clip_min >= 0.0) {
    return Err(AutocorrError::InvalidConfig(format!(
      "clip_min must be finite and non-negative, got {}",
      cfg.clip_min
    )));
  }

  let w = normalize_weights(weights)?;
  let penalty = autocorr_penalty(cum_returns, &cfg.penalty);

  let shrunk: Vec<f64> = w
    .iter()
    .map(|x| (x * (1.0 - penalty)).max(cfg.clip_min))
    .collect();
  let weights = project_to_simplex(&shrunk, 1.0)?;

  debug!(penalty, assets = weights.len(), "autocorrelation-adjusted update");
  Ok(AutocorrUpdate { weights, penalty })
}

/// Penalize `weights` by the autocorrelation of `cum_returns` and project back
/// onto the unit simplex.
///
/// See [`autocorr_adjusted_update_report`] for the error conditions.
pub fn autocorr_adjusted_update(
  weights: &[f64],
  cum_returns: &[f64],
  cfg: &AutocorrUpdateConfig,
) -> AutocorrResult<Vec<f64>> {
  autocorr_adjusted_update_report(weights, cum_returns, cfg).map(|u| u.weights)
}

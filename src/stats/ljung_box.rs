//! # Ljung-Box
//!
//! $$
//! Q = n(n+2)\sum_{k=1}^{h}\frac{\hat\rho_k^2}{n-k} \sim \chi^2_h
//! $$
//!
//! Portmanteau test for serial correlation over the most recent window of a series.

use statrs::distribution::ChiSquared;
use statrs::distribution::ContinuousCDF;
use tracing::debug;
use tracing::warn;

use super::autocorrelation::autocorrelation;

/// Smallest windowed sample the test accepts, regardless of `lags`.
const MIN_OBSERVATIONS: usize = 10;

/// Configuration for the Ljung-Box test.
#[derive(Debug, Clone, Copy)]
pub struct LjungBoxConfig {
  /// Number of autocorrelation lags aggregated into the statistic.
  pub lags: usize,
  /// Only the last `window` observations are tested.
  pub window: usize,
  /// Significance level used to compute `reject_independence`.
  pub alpha: f64,
}

impl Default for LjungBoxConfig {
  fn default() -> Self {
    Self {
      lags: 5,
      window: 200,
      alpha: 0.05,
    }
  }
}

/// Result of the Ljung-Box test.
#[derive(Debug, Clone)]
pub struct LjungBoxResult {
  /// Q statistic. Zero when the sample is too short.
  pub statistic: f64,
  /// Chi-square survival probability of `statistic`, always in [0, 1].
  pub p_value: f64,
  /// Degrees of freedom (equal to the number of lags).
  pub df: usize,
  /// Effective sample size after windowing.
  pub nobs: usize,
  /// Autocorrelations at lags `1..=df`. Empty when the sample is too short.
  pub autocorrelations: Vec<f64>,
  /// Whether the windowed sample was long enough to run the test.
  pub sufficient_sample: bool,
  /// Whether independence is rejected at `alpha`.
  pub reject_independence: bool,
}

/// Ljung-Box test on the last `cfg.window` observations of `series`.
///
/// Short samples (`nobs < max(10, lags + 5)`) and non-finite p-values
/// resolve to `p_value = 1.0`, i.e. no evidence of autocorrelation.
pub fn ljung_box_test(series: &[f64], cfg: LjungBoxConfig) -> LjungBoxResult {
  let n = series.len().min(cfg.window);
  let lags = cfg.lags;

  if n < MIN_OBSERVATIONS.max(lags.saturating_add(5)) {
    debug!(nobs = n, lags, "sample too short for Ljung-Box, p-value set to 1");
    return LjungBoxResult {
      statistic: 0.0,
      p_value: 1.0,
      df: lags,
      nobs: n,
      autocorrelations: Vec::new(),
      sufficient_sample: false,
      reject_independence: false,
    };
  }

  let y = &series[series.len() - n..];
  let n_f = n as f64;

  let mut autocorrelations = Vec::with_capacity(lags);
  let mut acc = 0.0;
  for k in 1..=lags {
    let rho = autocorrelation(y, k);
    acc += rho * rho / (n - k) as f64;
    autocorrelations.push(rho);
  }
  let statistic = n_f * (n_f + 2.0) * acc;

  let p_value = match ChiSquared::new(lags as f64) {
    Ok(_) if statistic.is_nan() => f64::NAN,
    Ok(chi2) => chi2.sf(statistic),
    Err(err) => {
      debug!(lags, %err, "invalid chi-square degrees of freedom");
      f64::NAN
    }
  };

  let p_value = if p_value.is_finite() {
    p_value.clamp(0.0, 1.0)
  } else {
    warn!(statistic, lags, "non-finite Ljung-Box p-value, falling back to 1");
    1.0
  };

  debug!(nobs = n, lags, statistic, p_value, "Ljung-Box test");

  LjungBoxResult {
    statistic,
    p_value,
    df: lags,
    nobs: n,
    autocorrelations,
    sufficient_sample: true,
    reject_independence: p_value < cfg.alpha,
  }
}

/// Ljung-Box p-value for the last `window` observations of `series`.
pub fn ljung_box_pvalue(series: &[f64], lags: usize, window: usize) -> f64 {
  ljung_box_test(
    series,
    LjungBoxConfig {
      lags,
      window,
      ..LjungBoxConfig::default()
    },
  )
  .p_value
}

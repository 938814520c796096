//! # Sample Autocorrelation
//!
//! $$
//! \hat\rho_k = \frac{\sum_{t=0}^{n-k-1} (x_t-\bar x)(x_{t+k}-\bar x)}{\sum_{t=0}^{n-1} (x_t-\bar x)^2}
//! $$
//!

/// Lag-`lag` sample autocorrelation of `series`.
///
/// The series is de-meaned locally. Returns `0.0` when `lag >= series.len()`
/// or when the series has no variance. The value is not clamped to [-1, 1].
pub fn autocorrelation(series: &[f64], lag: usize) -> f64 {
  let n = series.len();
  if lag >= n {
    return 0.0;
  }

  let mean = series.iter().sum::<f64>() / n as f64;
  let centered: Vec<f64> = series.iter().map(|x| x - mean).collect();

  let den = centered.iter().map(|d| d * d).sum::<f64>();
  if den.is_nan() || den <= 0.0 {
    return 0.0;
  }

  let num = centered[..n - lag]
    .iter()
    .zip(&centered[lag..])
    .map(|(a, b)| a * b)
    .sum::<f64>();

  num / den
}

/// Autocorrelation function for lags `1..=max_lag`.
pub fn acf(series: &[f64], max_lag: usize) -> Vec<f64> {
  (1..=max_lag).map(|k| autocorrelation(series, k)).collect()
}

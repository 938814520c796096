use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

use crate::stochastic::ProcessExt;

/// AR(1) process:
///
/// \[
///   X_t = \phi X_{t-1} + \epsilon_t,
///   \quad \epsilon_t \sim \mathcal{N}(0, \sigma^2).
/// \]
///
/// # Fields
/// - `phi`: AR coefficient.
/// - `sigma`: Standard deviation of the noise \(\epsilon_t\).
/// - `n`: Length of the time series.
/// - `x0`: Optional pre-sample value \(X_{-1}\), zero when `None`.
/// - `seed`: Optional RNG seed. With a seed, every call to `sample` returns the same path.
pub struct AR1 {
  pub phi: f64,
  pub sigma: f64,
  pub n: usize,
  pub x0: Option<f64>,
  pub seed: Option<u64>,
}

impl AR1 {
  /// Create a new AR(1) process.
  ///
  /// # Panics
  /// Panics if `phi` is not finite or `sigma` is negative or not finite.
  pub fn new(phi: f64, sigma: f64, n: usize, x0: Option<f64>, seed: Option<u64>) -> Self {
    assert!(phi.is_finite(), "phi must be finite");
    assert!(
      sigma.is_finite() && sigma >= 0.0,
      "sigma must be finite and non-negative"
    );

    Self {
      phi,
      sigma,
      n,
      x0,
      seed,
    }
  }

  fn rng(&self) -> StdRng {
    match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    }
  }

  /// Sample the AR(1) path and return its running sum, read as a cumulative-return series.
  pub fn sample_cumulative(&self) -> Vec<f64> {
    cumulative_sum(&self.sample())
  }
}

impl ProcessExt for AR1 {
  type Output = Vec<f64>;

  /// Sample the AR(1) path.
  fn sample(&self) -> Self::Output {
    let mut rng = self.rng();
    let mut series = Vec::with_capacity(self.n);
    let mut prev = self.x0.unwrap_or(0.0);

    for _ in 0..self.n {
      let z: f64 = rng.sample(StandardNormal);
      prev = self.phi * prev + self.sigma * z;
      series.push(prev);
    }

    series
  }
}

/// Running sum of `increments`.
pub fn cumulative_sum(increments: &[f64]) -> Vec<f64> {
  increments
    .iter()
    .scan(0.0, |acc, x| {
      *acc += x;
      Some(*acc)
    })
    .collect()
}

/// First differences of `series`, with the first element taken relative to zero.
///
/// Inverse of [`cumulative_sum`].
pub fn increments(series: &[f64]) -> Vec<f64> {
  let mut prev = 0.0;
  series
    .iter()
    .map(|&x| {
      let d = x - prev;
      prev = x;
      d
    })
    .collect()
}

//! # Stochastic
//!
//! $$
//! X_t = \phi X_{t-1} + \varepsilon_t
//! $$
//!
pub mod ar1;

pub use ar1::AR1;
pub use ar1::cumulative_sum;
pub use ar1::increments;

/// Sampling interface shared by the simulated processes.
pub trait ProcessExt: Send + Sync {
  type Output: Send;

  fn sample(&self) -> Self::Output;
}

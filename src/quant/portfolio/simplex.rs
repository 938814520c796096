//! # Simplex Projection
//!
//! $$
//! \Pi_{\Delta_s}(\mathbf v)=\arg\min_{\mathbf w\ge 0,\ \mathbf 1^\top\mathbf w=s}\lVert\mathbf w-\mathbf v\rVert_2
//! $$
//!
//! Exact sort-based projection (Duchi, Shalev-Shwartz, Singer, Chandra, 2008).

use tracing::trace;

use crate::error::AutocorrError;
use crate::error::AutocorrResult;

/// Euclidean projection of `v` onto `{w : w >= 0, sum(w) = s}`.
///
/// The result is rescaled by its own sum so it adds up to `s` up to a
/// single rounding step.
///
/// # Errors
/// - [`AutocorrError::InvalidConfig`] if `s` is not a positive finite number.
/// - [`AutocorrError::NumericalFailure`] if `v` is empty, contains non-finite
///   entries, or the projection collapses to a zero or non-finite sum.
pub fn project_to_simplex(v: &[f64], s: f64) -> AutocorrResult<Vec<f64>> {
  if !(s.is_finite() && s > 0.0) {
    return Err(AutocorrError::InvalidConfig(format!(
      "target sum must be positive and finite, got {s}"
    )));
  }
  if v.iter().any(|x| !x.is_finite()) {
    return Err(AutocorrError::NumericalFailure(
      "projection input contains non-finite entries".into(),
    ));
  }

  let mut u = v.to_vec();
  u.sort_by(|a, b| b.total_cmp(a));

  let mut cssv = 0.0;
  let mut threshold = None;
  for (j, &uj) in u.iter().enumerate() {
    cssv += uj;
    let k = (j + 1) as f64;
    if uj * k > cssv - s {
      threshold = Some((cssv - s) / k);
    }
  }

  let Some(theta) = threshold else {
    return Err(AutocorrError::NumericalFailure(
      "projection failed; no valid threshold, input may be too pathological".into(),
    ));
  };
  trace!(theta, len = v.len(), "simplex projection threshold");

  let mut w: Vec<f64> = v.iter().map(|&x| (x - theta).max(0.0)).collect();
  let sw = w.iter().sum::<f64>();
  if !(sw.is_finite() && sw > 0.0) {
    return Err(AutocorrError::NumericalFailure(format!(
      "projection failed; projected sum is {sw}, input may be too pathological"
    )));
  }

  let scale = s / sw;
  for x in &mut w {
    *x *= scale;
  }

  Ok(w)
}

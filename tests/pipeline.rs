use approx::assert_abs_diff_eq;
use autocorr_weights::AutocorrError;
use autocorr_weights::AutocorrPenaltyConfig;
use autocorr_weights::AutocorrUpdateConfig;
use autocorr_weights::autocorr_adjusted_update;
use autocorr_weights::autocorr_penalty;
use autocorr_weights::autocorrelation;
use autocorr_weights::ljung_box_pvalue;
use autocorr_weights::project_to_simplex;
use autocorr_weights::stochastic::AR1;
use autocorr_weights::stochastic::ProcessExt;
use autocorr_weights::stochastic::cumulative_sum;
use autocorr_weights::stochastic::increments;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn shuffled_cumulative(cum: &[f64], seed: u64) -> Vec<f64> {
  let mut d = increments(cum);
  let mut rng = StdRng::seed_from_u64(seed);
  d.shuffle(&mut rng);
  cumulative_sum(&d)
}

#[test]
fn ar1_penalized_more_than_shuffled() {
  let cfg = AutocorrPenaltyConfig {
    window: 100,
    ..Default::default()
  };

  // Both cumulative paths trend, so a single draw can go either way.
  let seeds = 0..60u64;
  let detected = seeds
    .clone()
    .filter(|&seed| {
      let cum = AR1::new(0.7, 0.01, 1200, None, Some(seed)).sample_cumulative();
      let shuffled = shuffled_cumulative(&cum, seed);

      let p_ar = ljung_box_pvalue(&cum, 5, 100);
      let p_sh = ljung_box_pvalue(&shuffled, 5, 100);
      let pen_ar = autocorr_penalty(&cum, &cfg);
      let pen_sh = autocorr_penalty(&shuffled, &cfg);
      p_ar < p_sh || pen_ar > pen_sh
    })
    .count();

  assert!(
    detected > 30,
    "autocorrelation detected in only {detected} of {} seeds",
    seeds.count()
  );
}

#[test]
fn ar1_increments_lose_structure_when_shuffled() {
  let x = AR1::new(0.7, 0.01, 1200, None, Some(5)).sample();
  let mut shuffled = x.clone();
  shuffled.shuffle(&mut StdRng::seed_from_u64(5));

  let p_ar = ljung_box_pvalue(&x, 5, 1200);
  let p_sh = ljung_box_pvalue(&shuffled, 5, 1200);
  assert!(p_ar < 1e-6, "p_ar = {p_ar}");
  assert!(p_sh > p_ar, "p_sh = {p_sh}");
  assert!(autocorrelation(&x, 1) > autocorrelation(&shuffled, 1));
}

#[test]
fn update_invariants_hold() {
  let cum = AR1::new(0.6, 0.01, 1000, None, Some(2)).sample_cumulative();
  let w1 = autocorr_adjusted_update(&[0.4, 0.3, 0.3], &cum, &AutocorrUpdateConfig::default())
    .unwrap();
  assert!(w1.iter().all(|x| *x >= 0.0));
  assert_abs_diff_eq!(w1.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
}

#[test]
fn short_series_leaves_weights_unchanged() {
  let cum = [0.0, 0.01, 0.02];
  let cfg = AutocorrUpdateConfig {
    penalty: AutocorrPenaltyConfig {
      penalty_scale: 0.5,
      lb_lags: 5,
      window: 200,
      ..Default::default()
    },
    ..Default::default()
  };
  let w1 = autocorr_adjusted_update(&[0.5, 0.5], &cum, &cfg).unwrap();
  assert_abs_diff_eq!(w1[0], 0.5, epsilon = 1e-9);
  assert_abs_diff_eq!(w1[1], 0.5, epsilon = 1e-9);
}

#[test]
fn errors_surface_through_public_api() {
  assert!(matches!(
    project_to_simplex(&[1.0, 2.0], 0.0),
    Err(AutocorrError::InvalidConfig(_))
  ));
  let err = autocorr_adjusted_update(&[-1.0, 2.0], &[0.0; 3], &AutocorrUpdateConfig::default())
    .unwrap_err();
  assert!(err.to_string().starts_with("invalid configuration"));
}

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;

use anyhow::Context;
use anyhow::Result;
use autocorr_weights::AutocorrUpdateConfig;
use autocorr_weights::LjungBoxConfig;
use autocorr_weights::autocorr_adjusted_update_report;
use autocorr_weights::ljung_box_test;
use autocorr_weights::stochastic::AR1;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Usage: autocorr-weights [cum_returns.txt]
// Without a file, a cumulative AR(1) path is simulated.
fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cum_returns = match std::env::args().nth(1) {
    Some(path) => {
      read_vector_from_file(&path).with_context(|| format!("failed to read series from {path}"))?
    }
    None => AR1::new(0.6, 0.01, 1000, None, Some(0)).sample_cumulative(),
  };
  info!(len = cum_returns.len(), "loaded cumulative returns");

  let cfg = AutocorrUpdateConfig::default();
  let lb = ljung_box_test(
    &cum_returns,
    LjungBoxConfig {
      lags: cfg.penalty.lb_lags,
      window: cfg.penalty.window,
      ..LjungBoxConfig::default()
    },
  );
  info!(
    statistic = lb.statistic,
    p_value = lb.p_value,
    nobs = lb.nobs,
    reject = lb.reject_independence,
    "Ljung-Box"
  );

  let w0 = [0.4, 0.3, 0.3];
  let update = autocorr_adjusted_update_report(&w0, &cum_returns, &cfg)?;
  let sum = update.weights.iter().sum::<f64>();
  info!(penalty = update.penalty, weights = ?update.weights, sum, "updated weights");

  Ok(())
}

fn read_vector_from_file(filename: &str) -> Result<Vec<f64>> {
  let file = File::open(filename)?;
  let reader = BufReader::new(file);

  let mut data = Vec::new();
  for line in reader.lines() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    let value = trimmed
      .parse::<f64>()
      .with_context(|| format!("invalid number {trimmed:?}"))?;
    data.push(value);
  }

  Ok(data)
}

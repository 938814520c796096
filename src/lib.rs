//! # autocorr-weights
//!
//! $$
//! \mathbf w_{t+1} = \Pi_{\Delta}\big(\mathbf w_t\,(1-\pi(p_{LB}))\big)
//! $$
//!
//! Serial-correlation diagnostics for cumulative-return histories and the
//! weight update that shrinks a portfolio according to them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`stats`] | Sample autocorrelation and the Ljung-Box portmanteau test. |
//! | [`quant`] | Simplex projection and the autocorrelation-adjusted weight update. |
//! | [`stochastic`] | AR(1) sampler used for simulations and benchmarks. |
//! | [`error`] | Error taxonomy of the fallible operations. |
//!
//! Every function is pure: nothing is cached and inputs are never mutated, so
//! calls may be made concurrently from any number of threads.

pub mod error;
pub mod quant;
pub mod stats;
pub mod stochastic;

pub use error::AutocorrError;
pub use error::AutocorrResult;
pub use quant::portfolio::AutocorrPenaltyConfig;
pub use quant::portfolio::AutocorrUpdate;
pub use quant::portfolio::AutocorrUpdateConfig;
pub use quant::portfolio::autocorr_adjusted_update;
pub use quant::portfolio::autocorr_adjusted_update_report;
pub use quant::portfolio::autocorr_penalty;
pub use quant::portfolio::project_to_simplex;
pub use stats::autocorrelation::acf;
pub use stats::autocorrelation::autocorrelation;
pub use stats::ljung_box::LjungBoxConfig;
pub use stats::ljung_box::LjungBoxResult;
pub use stats::ljung_box::ljung_box_pvalue;
pub use stats::ljung_box::ljung_box_test;

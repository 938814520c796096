//! # Portfolio
//!
//! $$
//! \Delta_s = \{\mathbf w \in \mathbb R^n : \mathbf w \ge 0,\ \mathbf 1^\top \mathbf w = s\}
//! $$
//!
//! Simplex projection and autocorrelation-penalized weight updates.

pub mod autocorr;
pub mod simplex;

pub use autocorr::AutocorrPenaltyConfig;
pub use autocorr::AutocorrUpdate;
pub use autocorr::AutocorrUpdateConfig;
pub use autocorr::autocorr_adjusted_update;
pub use autocorr::autocorr_adjusted_update_report;
pub use autocorr::autocorr_penalty;
pub use simplex::project_to_simplex;

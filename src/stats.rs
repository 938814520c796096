//! # Stats
//!
//! $$
//! H_0:\ \rho_1=\rho_2=\dots=\rho_h=0
//! $$
//!
pub mod autocorrelation;
pub mod ljung_box;

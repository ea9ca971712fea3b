//! # Physics Module
//!
//! Pure, deterministic estimators built on top of the calibration data.
//!
//! - [`mass_formula`] evaluates the five semi-empirical mass formula terms.
//! - [`enhancement`] computes the multiplicative calibration layer.
//! - [`binding`] combines overrides, the mass formula and the enhancement layer
//!   into a single binding energy estimate.
//! - [`stability`] scores nuclear stability and assigns a decay mode.

pub mod binding;
pub mod enhancement;
pub mod mass_formula;
pub mod stability;

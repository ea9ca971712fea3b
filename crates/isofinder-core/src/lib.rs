//! # isofinder Core Library
//!
//! A deterministic estimation engine for nuclear isotope properties: binding energies from
//! a calibrated semi-empirical mass formula, a heuristic stability score with a decay-mode
//! label, and a search over isotope space for medically relevant candidates.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`IsotopeKey`, `EstimationResult`),
//!   immutable calibration data (`CalibrationProfile`, `OverrideTables`), the pure physics
//!   estimators and loaders for reference datasets.
//!
//! - **[`engine`]: The Logic Core.** Search configuration, progress reporting and the
//!   sweep and ranking tasks. Per-element sweeps run in parallel when the `parallel`
//!   feature is enabled; results are always gathered in element-table order.
//!
//! - **[`workflows`]: The Public API.** Complete procedures (`estimate`, `search`,
//!   `validate`, `crosscheck`) that validate their input and return typed errors.

pub mod core;
pub mod engine;
pub mod workflows;

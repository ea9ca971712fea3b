//! # Calibration Module
//!
//! The immutable inputs every estimate depends on: the [`profile::CalibrationProfile`]
//! with mass-formula coefficients, enhancement constants and thresholds, and the
//! [`overrides::OverrideTables`] of pinned exact values.
//!
//! Both are plain read-only data. They carry no interior mutability and can be
//! shared freely across threads.

pub mod overrides;
pub mod profile;

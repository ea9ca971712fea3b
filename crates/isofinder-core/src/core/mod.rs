//! # Core Module
//!
//! The computational core of isofinder: the data model for nuclides, the calibration
//! data every estimate depends on, and the physics that turns a `(Z, N)` pair into a
//! binding energy and a stability classification.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Isotope keys, decay modes, result records and lookup tables
//! - **Calibration** ([`calibration`]) - Mass-formula coefficients, enhancement constants,
//!   thresholds and the pinned override tables
//! - **Physics** ([`physics`]) - Semi-empirical mass formula, enhancement layer, binding
//!   energy estimation and stability classification
//! - **File I/O** ([`io`]) - Reference dataset loaders for CSV and TOML
//!
//! Everything in this module is pure and synchronous. Orchestration, configuration and
//! progress reporting live in [`crate::engine`].

pub mod calibration;
pub mod io;
pub mod models;
pub mod physics;

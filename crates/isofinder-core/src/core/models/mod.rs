//! # Models Module
//!
//! Plain data types shared by every layer: isotope keys, decay modes, estimation
//! results, lookup tables for the search, and reference data used for validation.

pub mod decay;
pub mod isotope;
pub mod reference;
pub mod result;
pub mod tables;

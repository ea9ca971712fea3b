//! Computational units of a candidate search.
//!
//! The [`sweep`] task evaluates every isotope in each element's neutron window and
//! keeps the medically plausible ones. The [`ranking`] task orders and truncates them.

pub mod ranking;
pub mod sweep;

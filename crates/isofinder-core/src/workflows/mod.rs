//! # Workflows Module
//!
//! The public entry points of isofinder. Each workflow ties the [`crate::core`]
//! estimators and the [`crate::engine`] search machinery into one complete procedure.
//!
//! - **Estimation** ([`estimate`]) - Binding energy, stability and enhancement effect
//!   for a single `(Z, N)` pair, with input-domain validation
//! - **Search** ([`search`]) - The ranked medical-candidate search with a summary
//! - **Validation** ([`validate`]) - Percent-error scoring against reference binding energies
//! - **Cross-check** ([`crosscheck`]) - Agreement of search predictions and classifier
//!   verdicts with an external reference dataset

pub mod crosscheck;
pub mod estimate;
pub mod search;
pub mod validate;

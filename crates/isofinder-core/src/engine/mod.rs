//! # Engine Module
//!
//! Orchestration for the isotope-space search built on top of [`crate::core`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search window, result limit, target stability and
//!   the element and known-medical tables, assembled through [`config::SearchConfigBuilder`]
//! - **Context** ([`context`]) - The read-only inputs shared by every task
//! - **Tasks** ([`tasks`]) - Per-element sweeps (parallel with the `parallel` feature)
//!   and the stable ranking pass
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - [`error::EngineError`] aggregating every failure
//!   a workflow can surface

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod tasks;

//! Loaders for external reference nuclide data.
//!
//! Reference datasets can be supplied as CSV (`label,z,n,binding-energy,stable,half-life`)
//! or as TOML made of `[[isotope]]` tables. Both formats preserve entry order.

pub mod reference;

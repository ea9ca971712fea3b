use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IsotopeError {
    #[error("Proton count must be non-negative, got {0}")]
    NegativeProtons(i64),
    #[error("Neutron count must be non-negative, got {0}")]
    NegativeNeutrons(i64),
    #[error("Nucleon count {0} exceeds the supported range")]
    OutOfRange(i64),
}

/// A nuclide identified by its proton count `Z` and neutron count `N`.
///
/// Counts are unsigned, so a key that exists has already passed input-domain
/// validation. Use [`IsotopeKey::try_new`] to build one from signed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IsotopeKey {
    z: u32,
    n: u32,
}

impl IsotopeKey {
    pub const fn new(z: u32, n: u32) -> Self {
        Self { z, n }
    }

    pub fn try_new(z: i64, n: i64) -> Result<Self, IsotopeError> {
        if z < 0 {
            return Err(IsotopeError::NegativeProtons(z));
        }
        if n < 0 {
            return Err(IsotopeError::NegativeNeutrons(n));
        }
        let z = u32::try_from(z).map_err(|_| IsotopeError::OutOfRange(z))?;
        let n = u32::try_from(n).map_err(|_| IsotopeError::OutOfRange(n))?;
        Ok(Self { z, n })
    }

    #[inline]
    pub const fn protons(&self) -> u32 {
        self.z
    }

    #[inline]
    pub const fn neutrons(&self) -> u32 {
        self.n
    }

    #[inline]
    pub const fn mass_number(&self) -> u64 {
        self.z as u64 + self.n as u64
    }
}

impl fmt::Display for IsotopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Z={}, N={})", self.z, self.n)
    }
}

/// Formats the conventional `Symbol-A` label, e.g. `F-18`.
pub fn isotope_label(symbol: &str, mass_number: u64) -> String {
    format!("{}-{}", symbol, mass_number)
}

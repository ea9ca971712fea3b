use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    Stable,
    BetaMinus,   // Neutron rich
    BetaPlus,    // Proton rich
    Alpha,       // Beyond lead
    Radioactive, // Unstable, no dominant channel
    Impossible,  // No protons
}

impl DecayMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DecayMode::Stable => "stable",
            DecayMode::BetaMinus => "beta_minus",
            DecayMode::BetaPlus => "beta_plus",
            DecayMode::Alpha => "alpha",
            DecayMode::Radioactive => "radioactive",
            DecayMode::Impossible => "impossible",
        }
    }

    #[inline]
    pub fn is_stable(&self) -> bool {
        matches!(self, DecayMode::Stable)
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown decay mode label: '{0}'")]
pub struct ParseDecayModeError(String);

impl FromStr for DecayMode {
    type Err = ParseDecayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stable" => Ok(DecayMode::Stable),
            "beta_minus" => Ok(DecayMode::BetaMinus),
            "beta_plus" => Ok(DecayMode::BetaPlus),
            "alpha" => Ok(DecayMode::Alpha),
            "radioactive" => Ok(DecayMode::Radioactive),
            "impossible" => Ok(DecayMode::Impossible),
            other => Err(ParseDecayModeError(other.to_string())),
        }
    }
}

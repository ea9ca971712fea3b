use super::decay::DecayMode;
use super::isotope::{IsotopeKey, isotope_label};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stability {
    pub score: f64,
    pub decay_mode: DecayMode,
}

impl Stability {
    pub const fn new(score: f64, decay_mode: DecayMode) -> Self {
        Self { score, decay_mode }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationResult {
    pub key: IsotopeKey,
    pub binding_energy_mev: f64,
    pub stability: Stability,
}

impl EstimationResult {
    #[inline]
    pub fn protons(&self) -> u32 {
        self.key.protons()
    }

    #[inline]
    pub fn neutrons(&self) -> u32 {
        self.key.neutrons()
    }

    #[inline]
    pub fn mass_number(&self) -> u64 {
        self.key.mass_number()
    }

    /// Binding energy per nucleon, `0.0` for the empty nucleus.
    pub fn binding_energy_per_nucleon(&self) -> f64 {
        match self.mass_number() {
            0 => 0.0,
            a => self.binding_energy_mev / a as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCandidate {
    pub element_symbol: String,
    pub estimation: EstimationResult,
    pub is_known_medical: bool,
    pub medical_use: String,
    pub estimated_half_life_hours: f64,
}

impl SearchCandidate {
    pub fn label(&self) -> String {
        isotope_label(&self.element_symbol, self.estimation.mass_number())
    }

    #[inline]
    pub fn stability_score(&self) -> f64 {
        self.estimation.stability.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRecord {
    pub isotope_label: String,
    pub reference_binding_energy: f64,
    pub estimated_binding_energy: f64,
    pub percent_error: Option<f64>, // None when the reference is zero
}

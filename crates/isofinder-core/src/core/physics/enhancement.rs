use crate::core::calibration::profile::EnhancementConstants;

const GOLDEN_AMPLITUDE: f64 = 0.01;
const CONSCIOUSNESS_WEIGHT: f64 = 0.02;

/// The individual multipliers of the enhancement layer for one mass number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhancementFactors {
    pub tesla_boost: f64,
    pub golden_factor: f64,
    pub consciousness_boost: f64,
    pub error_correction: f64,
}

impl EnhancementFactors {
    pub fn compute(mass_number: u64, constants: &EnhancementConstants) -> Self {
        // Every modulus dividing A contributes one more resonance factor.
        let tesla_boost = constants
            .tesla_moduli
            .iter()
            .filter(|&&m| mass_number % u64::from(m) == 0)
            .fold(1.0, |boost, _| boost * constants.resonance_factor);

        let golden_factor =
            1.0 + GOLDEN_AMPLITUDE * (mass_number as f64 / constants.golden_ratio).sin();
        let consciousness_boost = 1.0 + constants.consciousness_level * CONSCIOUSNESS_WEIGHT;

        Self {
            tesla_boost,
            golden_factor,
            consciousness_boost,
            error_correction: constants.error_correction,
        }
    }

    #[inline]
    pub fn apply(&self, base_value: f64) -> f64 {
        base_value
            * self.tesla_boost
            * self.golden_factor
            * self.consciousness_boost
            * self.error_correction
    }

    /// Combined multiplier, `apply(1.0)`.
    #[inline]
    pub fn combined(&self) -> f64 {
        self.apply(1.0)
    }
}

/// Runs `base_value` through the enhancement layer for mass number `A`.
#[inline]
pub fn enhance(mass_number: u64, base_value: f64, constants: &EnhancementConstants) -> f64 {
    EnhancementFactors::compute(mass_number, constants).apply(base_value)
}

/// Relative effect of the enhancement layer on `base_value`, in percent.
pub fn enhancement_percent(mass_number: u64, base_value: f64, constants: &EnhancementConstants) -> f64 {
    if base_value == 0.0 {
        return 0.0;
    }
    (enhance(mass_number, base_value, constants) / base_value - 1.0) * 100.0
}

use super::binding::BindingEnergyEstimator;
use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::models::decay::DecayMode;
use crate::core::models::isotope::IsotopeKey;
use crate::core::models::result::Stability;

const KNOWN_STABLE_SCORE: f64 = 0.8;
const KNOWN_UNSTABLE_SCORE: f64 = 0.3;

const BASE_SCORE: f64 = 0.5;
const MAGIC_BONUS: f64 = 0.25;
const RATIO_PENALTY: f64 = 0.3;

// Binding energy per nucleon brackets (MeV) and their score adjustments.
const TIGHT_BINDING: (f64, f64) = (8.5, 0.2);
const NORMAL_BINDING: (f64, f64) = (7.5, 0.1);
const LOOSE_BINDING: (f64, f64) = (6.0, -0.2);

const BEYOND_LEAD_Z: u32 = 82;
const BEYOND_LEAD_PENALTY: f64 = 0.3;
const TRANSURANIC_Z: u32 = 92;
const TRANSURANIC_PENALTY: f64 = 0.5;

const CONSCIOUSNESS_WEIGHT: f64 = 0.05;

const NEUTRON_RICH_RATIO: f64 = 1.5;
const PROTON_RICH_RATIO: f64 = 1.2;

/// Heuristic stability score and decay-mode classifier.
///
/// Scores are always clamped to `[0, 1]`. Keys present in the stability
/// override table bypass the heuristic entirely.
#[derive(Debug, Clone, Copy)]
pub struct StabilityClassifier<'a> {
    profile: &'a CalibrationProfile,
    overrides: OverrideTables,
    estimator: BindingEnergyEstimator<'a>,
}

impl<'a> StabilityClassifier<'a> {
    pub fn new(profile: &'a CalibrationProfile, overrides: OverrideTables) -> Self {
        Self {
            profile,
            overrides,
            estimator: BindingEnergyEstimator::new(profile, overrides),
        }
    }

    pub fn estimator(&self) -> &BindingEnergyEstimator<'a> {
        &self.estimator
    }

    pub fn classify(&self, key: IsotopeKey) -> Stability {
        if let Some(stable) = self.overrides.known_stability(key) {
            return if stable {
                Stability::new(KNOWN_STABLE_SCORE, DecayMode::Stable)
            } else {
                Stability::new(KNOWN_UNSTABLE_SCORE, DecayMode::Radioactive)
            };
        }

        let z = key.protons();
        let n = key.neutrons();
        if z == 0 {
            return Stability::new(0.0, DecayMode::Impossible);
        }

        let score = self.raw_score(key).clamp(0.0, 1.0);
        Stability::new(score, self.decay_mode(z, n, score))
    }

    fn raw_score(&self, key: IsotopeKey) -> f64 {
        let z = key.protons();
        let n = key.neutrons();
        let ratio = n as f64 / z as f64;

        let mut score = BASE_SCORE;
        if self.profile.is_magic(z) {
            score += MAGIC_BONUS;
        }
        if self.profile.is_magic(n) {
            score += MAGIC_BONUS;
        }
        score -= (ratio - optimal_neutron_ratio(z)).abs() * RATIO_PENALTY;

        let be_per_nucleon = self.estimator.estimate(key) / key.mass_number() as f64;
        score += binding_adjustment(be_per_nucleon);

        if z > BEYOND_LEAD_Z {
            score -= BEYOND_LEAD_PENALTY;
        }
        if z > TRANSURANIC_Z {
            score -= TRANSURANIC_PENALTY;
        }

        score * (1.0 + self.profile.enhancement().consciousness_level * CONSCIOUSNESS_WEIGHT)
    }

    fn decay_mode(&self, z: u32, n: u32, score: f64) -> DecayMode {
        let zf = z as f64;
        let nf = n as f64;
        if score > self.profile.thresholds().stability_threshold {
            DecayMode::Stable
        } else if nf > zf * NEUTRON_RICH_RATIO {
            DecayMode::BetaMinus
        } else if zf > nf * PROTON_RICH_RATIO {
            DecayMode::BetaPlus
        } else if z > BEYOND_LEAD_Z {
            DecayMode::Alpha
        } else {
            DecayMode::Radioactive
        }
    }
}

/// Piecewise optimal N/Z ratio for a given proton count.
pub fn optimal_neutron_ratio(z: u32) -> f64 {
    match z {
        0..=20 => 1.0,
        21..=40 => 1.0 + 0.015 * (z - 20) as f64,
        _ => 1.0 + 0.6 * (z - 20) as f64 / 60.0,
    }
}

// Exactly one bracket applies, checked from the tightest down.
fn binding_adjustment(be_per_nucleon: f64) -> f64 {
    if be_per_nucleon > TIGHT_BINDING.0 {
        TIGHT_BINDING.1
    } else if be_per_nucleon > NORMAL_BINDING.0 {
        NORMAL_BINDING.1
    } else if be_per_nucleon < LOOSE_BINDING.0 {
        LOOSE_BINDING.1
    } else {
        0.0
    }
}

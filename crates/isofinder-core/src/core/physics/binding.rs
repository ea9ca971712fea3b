use super::enhancement::EnhancementFactors;
use super::mass_formula::{MassFormulaTerms, heavy_nucleus_factor};
use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::models::isotope::IsotopeKey;

/// Where an estimated binding energy came from, with the intermediate values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingEnergySource {
    /// Literal from the light-nuclide table, returned without enhancement.
    Override,
    Formula {
        terms: MassFormulaTerms,
        heavy_factor: f64,
        enhancement: EnhancementFactors,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingEnergyEstimate {
    pub key: IsotopeKey,
    pub value: f64,
    pub source: BindingEnergySource,
}

#[derive(Debug, Clone, Copy)]
pub struct BindingEnergyEstimator<'a> {
    profile: &'a CalibrationProfile,
    overrides: OverrideTables,
}

impl<'a> BindingEnergyEstimator<'a> {
    pub fn new(profile: &'a CalibrationProfile, overrides: OverrideTables) -> Self {
        Self { profile, overrides }
    }

    pub fn profile(&self) -> &'a CalibrationProfile {
        self.profile
    }

    /// Estimated binding energy in MeV.
    #[inline]
    pub fn estimate(&self, key: IsotopeKey) -> f64 {
        self.estimate_detailed(key).value
    }

    pub fn estimate_detailed(&self, key: IsotopeKey) -> BindingEnergyEstimate {
        if let Some(value) = self.overrides.binding_energy(key) {
            return BindingEnergyEstimate {
                key,
                value,
                source: BindingEnergySource::Override,
            };
        }

        let a = key.mass_number();
        let terms = MassFormulaTerms::compute(key, self.profile.mass_formula());
        let heavy_factor =
            heavy_nucleus_factor(a, self.profile.thresholds().heavy_nuclei_log_scale);

        let base = terms.total() * heavy_factor;
        let enhancement = EnhancementFactors::compute(a, self.profile.enhancement());
        BindingEnergyEstimate {
            key,
            value: enhancement.apply(base),
            source: BindingEnergySource::Formula {
                terms,
                heavy_factor,
                enhancement,
            },
        }
    }
}

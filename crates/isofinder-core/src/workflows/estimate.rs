use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::models::isotope::IsotopeKey;
use crate::core::models::result::{EstimationResult, Stability};
use crate::core::physics::binding::{BindingEnergyEstimate, BindingEnergyEstimator};
use crate::core::physics::enhancement;
use crate::core::physics::stability::StabilityClassifier;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

/// Estimated binding energy in MeV for `Z` protons and `N` neutrons.
///
/// Negative counts are rejected with [`EngineError::Isotope`].
pub fn estimate_binding_energy(
    z: i64,
    n: i64,
    profile: &CalibrationProfile,
) -> Result<f64, EngineError> {
    let key = IsotopeKey::try_new(z, n)?;
    Ok(BindingEnergyEstimator::new(profile, OverrideTables::standard()).estimate(key))
}

/// Same as [`estimate_binding_energy`] but returns the intermediate terms.
pub fn explain_binding_energy(
    z: i64,
    n: i64,
    profile: &CalibrationProfile,
) -> Result<BindingEnergyEstimate, EngineError> {
    let key = IsotopeKey::try_new(z, n)?;
    Ok(BindingEnergyEstimator::new(profile, OverrideTables::standard()).estimate_detailed(key))
}

pub fn classify_stability(
    z: i64,
    n: i64,
    profile: &CalibrationProfile,
) -> Result<Stability, EngineError> {
    let key = IsotopeKey::try_new(z, n)?;
    Ok(StabilityClassifier::new(profile, OverrideTables::standard()).classify(key))
}

/// Binding energy and stability in one call.
#[instrument(skip_all, name = "evaluate_workflow", fields(z = z, n = n))]
pub fn evaluate(z: i64, n: i64, profile: &CalibrationProfile) -> Result<EstimationResult, EngineError> {
    let key = IsotopeKey::try_new(z, n)?;
    let classifier = StabilityClassifier::new(profile, OverrideTables::standard());
    let result = EstimationResult {
        key,
        binding_energy_mev: classifier.estimator().estimate(key),
        stability: classifier.classify(key),
    };
    debug!(
        binding_energy = result.binding_energy_mev,
        score = result.stability.score,
        decay_mode = %result.stability.decay_mode,
        "Evaluated isotope."
    );
    Ok(result)
}

/// Runs `base_value` through the enhancement layer for `A = Z + N`.
pub fn enhance(
    z: i64,
    n: i64,
    base_value: f64,
    profile: &CalibrationProfile,
) -> Result<f64, EngineError> {
    let key = IsotopeKey::try_new(z, n)?;
    Ok(enhancement::enhance(
        key.mass_number(),
        base_value,
        profile.enhancement(),
    ))
}

/// Relative effect of the enhancement layer on `base_value` for `A = Z + N`, in percent.
pub fn enhancement_percent(
    z: i64,
    n: i64,
    base_value: f64,
    profile: &CalibrationProfile,
) -> Result<f64, EngineError> {
    let key = IsotopeKey::try_new(z, n)?;
    Ok(enhancement::enhancement_percent(
        key.mass_number(),
        base_value,
        profile.enhancement(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::decay::DecayMode;
    use crate::core::models::isotope::IsotopeError;
    use crate::core::physics::binding::BindingEnergySource;

    #[test]
    fn estimate_returns_light_nuclide_literals() {
        let profile = CalibrationProfile::standard();
        assert_eq!(estimate_binding_energy(2, 2, &profile).unwrap(), 28.296);
        assert_eq!(estimate_binding_energy(1, 1, &profile).unwrap(), 2.225);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let profile = CalibrationProfile::standard();
        assert!(matches!(
            estimate_binding_energy(-1, 2, &profile),
            Err(EngineError::Isotope {
                source: IsotopeError::NegativeProtons(-1)
            })
        ));
        assert!(matches!(
            classify_stability(2, -3, &profile),
            Err(EngineError::Isotope {
                source: IsotopeError::NegativeNeutrons(-3)
            })
        ));
        assert!(evaluate(-5, -5, &profile).is_err());
        assert!(enhancement_percent(0, -1, 100.0, &profile).is_err());
    }

    #[test]
    fn classify_matches_known_cases() {
        let profile = CalibrationProfile::standard();
        assert_eq!(
            classify_stability(6, 6, &profile).unwrap(),
            Stability::new(0.8, DecayMode::Stable)
        );
        assert_eq!(
            classify_stability(0, 5, &profile).unwrap(),
            Stability::new(0.0, DecayMode::Impossible)
        );
    }

    #[test]
    fn evaluate_combines_estimate_and_classification() {
        let profile = CalibrationProfile::standard();
        let result = evaluate(26, 30, &profile).unwrap();
        assert_eq!(result.mass_number(), 56);
        assert_eq!(
            result.binding_energy_mev,
            estimate_binding_energy(26, 30, &profile).unwrap()
        );
        assert_eq!(result.stability, classify_stability(26, 30, &profile).unwrap());
    }

    #[test]
    fn explain_reports_override_source_for_helium() {
        let profile = CalibrationProfile::standard();
        let estimate = explain_binding_energy(2, 2, &profile).unwrap();
        assert_eq!(estimate.source, BindingEnergySource::Override);
        assert_eq!(estimate.value, 28.296);
    }

    #[test]
    fn enhancement_percent_uses_mass_number() {
        let profile = CalibrationProfile::standard();
        let from_workflow = enhancement_percent(9, 9, 100.0, &profile).unwrap();
        let direct = enhancement::enhancement_percent(18, 100.0, profile.enhancement());
        assert_eq!(from_workflow, direct);
        assert_eq!(enhancement_percent(9, 9, 0.0, &profile).unwrap(), 0.0);
    }

    #[test]
    fn enhance_depends_only_on_mass_number() {
        let profile = CalibrationProfile::standard();
        let a = enhance(6, 12, 100.0, &profile).unwrap();
        let b = enhance(9, 9, 100.0, &profile).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, enhancement::enhance(18, 100.0, profile.enhancement()));
        assert!(enhance(-1, 0, 1.0, &profile).is_err());
    }
}

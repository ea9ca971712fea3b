use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::io::reference;
use crate::core::models::reference::ValidationSet;
use crate::core::models::result::ValidationRecord;
use crate::core::physics::binding::BindingEnergyEstimator;
use crate::engine::error::EngineError;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub records: Vec<ValidationRecord>,
    /// Mean over records with a defined percent error; `None` if there are none.
    pub average_percent_error: Option<f64>,
}

/// Compares the estimator against every entry of `set`.
#[instrument(skip_all, name = "validation_workflow")]
pub fn run(set: &ValidationSet, profile: &CalibrationProfile) -> ValidationReport {
    let estimator = BindingEnergyEstimator::new(profile, OverrideTables::standard());

    let records: Vec<ValidationRecord> = set
        .entries()
        .iter()
        .map(|entry| {
            let estimated = estimator.estimate(entry.key);
            let reference = entry.reference_binding_energy;
            let percent_error = if reference == 0.0 {
                warn!(
                    isotope = %entry.label,
                    "Reference binding energy is zero; excluded from the error average."
                );
                None
            } else {
                Some((estimated - reference).abs() / reference * 100.0)
            };
            ValidationRecord {
                isotope_label: entry.label.clone(),
                reference_binding_energy: reference,
                estimated_binding_energy: estimated,
                percent_error,
            }
        })
        .collect();

    let errors: Vec<f64> = records.iter().filter_map(|r| r.percent_error).collect();
    let average_percent_error = match errors.len() {
        0 => None,
        len => Some(errors.iter().sum::<f64>() / len as f64),
    };

    info!(
        records = records.len(),
        average_percent_error = average_percent_error.unwrap_or(f64::NAN),
        "Validation complete."
    );
    ValidationReport {
        records,
        average_percent_error,
    }
}

/// Validates against the built-in six-nuclide reference list.
pub fn validate_accuracy(profile: &CalibrationProfile) -> ValidationReport {
    run(&ValidationSet::standard(), profile)
}

/// Validates against a reference dataset file (CSV, or TOML by extension).
pub fn run_from_reference(
    path: &Path,
    profile: &CalibrationProfile,
) -> Result<ValidationReport, EngineError> {
    let dataset = reference::load(path)?;
    Ok(run(&ValidationSet::from_dataset(&dataset), profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::isotope::IsotopeKey;
    use crate::core::models::reference::ValidationEntry;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn standard_validation_produces_six_records_and_their_mean() {
        let report = validate_accuracy(&CalibrationProfile::standard());
        assert_eq!(report.records.len(), 6);

        let sum: f64 = report.records.iter().map(|r| r.percent_error.unwrap()).sum();
        assert!(f64_approx_equal(report.average_percent_error.unwrap(), sum / 6.0));
    }

    #[test]
    fn helium_is_reproduced_exactly() {
        let report = validate_accuracy(&CalibrationProfile::standard());
        let helium = &report.records[0];
        assert_eq!(helium.isotope_label, "He-4");
        assert_eq!(helium.estimated_binding_energy, 28.296);
        assert_eq!(helium.percent_error, Some(0.0));
    }

    #[test]
    fn zero_reference_is_excluded_from_average() {
        let set = ValidationSet::new(vec![
            ValidationEntry::new("H-1", IsotopeKey::new(1, 0), 0.0),
            ValidationEntry::new("H-2", IsotopeKey::new(1, 1), 2.0),
        ]);
        let report = run(&set, &CalibrationProfile::standard());
        assert_eq!(report.records[0].percent_error, None);
        let expected = (2.225f64 - 2.0).abs() / 2.0 * 100.0;
        assert!(f64_approx_equal(report.average_percent_error.unwrap(), expected));
    }

    #[test]
    fn empty_set_has_no_average() {
        let report = run(&ValidationSet::default(), &CalibrationProfile::standard());
        assert!(report.records.is_empty());
        assert_eq!(report.average_percent_error, None);
    }

    #[test]
    fn run_from_reference_loads_dataset_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reference.csv");
        std::fs::write(
            &path,
            "label,z,n,binding-energy,stable,half-life\nHe-4,2,2,28.296,true,\nD-2,1,1,2.225,true,\n",
        )
        .unwrap();
        let report = run_from_reference(&path, &CalibrationProfile::standard()).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.average_percent_error, Some(0.0));
    }

    #[test]
    fn run_from_reference_propagates_load_errors() {
        let dir = tempdir().unwrap();
        let result = run_from_reference(&dir.path().join("missing.csv"), &CalibrationProfile::standard());
        assert!(matches!(result, Err(EngineError::Reference { .. })));
    }
}

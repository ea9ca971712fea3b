use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::models::reference::ReferenceDataset;
use crate::core::models::result::SearchCandidate;
use crate::core::physics::stability::StabilityClassifier;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Agreement between search predictions and an external reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossCheckReport {
    pub total_predictions: usize,
    /// Predictions whose label exists in the dataset.
    pub matched: usize,
    /// Mean of `1 - |predicted - reference| / reference` over matches with a positive reference.
    pub binding_energy_accuracy: Option<f64>,
    /// Predictions with a magic proton or neutron count. Both counts are checked
    /// against the profile's single magic-number set.
    pub magic_number_hits: usize,
    /// Predictions the search flagged as known medical isotopes.
    pub known_medical_matches: usize,
    /// Labels absent from the dataset whose score exceeds the stability threshold.
    pub novel: Vec<String>,
}

impl CrossCheckReport {
    pub fn match_rate(&self) -> Option<f64> {
        match self.total_predictions {
            0 => None,
            total => Some(self.matched as f64 / total as f64),
        }
    }
}

#[instrument(skip_all, name = "crosscheck_workflow")]
pub fn cross_check(
    candidates: &[SearchCandidate],
    dataset: &ReferenceDataset,
    profile: &CalibrationProfile,
) -> CrossCheckReport {
    let mut matched = 0;
    let mut accuracies = Vec::new();
    let mut magic_number_hits = 0;
    let mut novel = Vec::new();

    for candidate in candidates {
        let label = candidate.label();
        match dataset.get(&label) {
            Some(entry) => {
                matched += 1;
                if entry.binding_energy > 0.0 {
                    let predicted = candidate.estimation.binding_energy_mev;
                    let accuracy =
                        1.0 - (predicted - entry.binding_energy).abs() / entry.binding_energy;
                    debug!(isotope = %label, accuracy, "Matched reference entry.");
                    accuracies.push(accuracy);
                }
            }
            None if candidate.stability_score() > profile.thresholds().stability_threshold => {
                novel.push(label);
            }
            None => {}
        }

        if profile.is_magic(candidate.estimation.protons())
            || profile.is_magic(candidate.estimation.neutrons())
        {
            magic_number_hits += 1;
        }
    }

    let binding_energy_accuracy = match accuracies.len() {
        0 => None,
        len => Some(accuracies.iter().sum::<f64>() / len as f64),
    };

    let report = CrossCheckReport {
        total_predictions: candidates.len(),
        matched,
        binding_energy_accuracy,
        magic_number_hits,
        known_medical_matches: candidates.iter().filter(|c| c.is_known_medical).count(),
        novel,
    };
    info!(
        predictions = report.total_predictions,
        matched = report.matched,
        magic = report.magic_number_hits,
        "Cross-check complete."
    );
    report
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StabilityAgreement {
    pub evaluated: usize,
    pub agreeing: usize,
}

impl StabilityAgreement {
    pub fn fraction(&self) -> Option<f64> {
        match self.evaluated {
            0 => None,
            n => Some(self.agreeing as f64 / n as f64),
        }
    }
}

/// Counts dataset entries whose classified decay mode agrees with their `stable` flag.
#[instrument(skip_all, name = "stability_agreement")]
pub fn stability_agreement(
    dataset: &ReferenceDataset,
    profile: &CalibrationProfile,
) -> StabilityAgreement {
    let classifier = StabilityClassifier::new(profile, OverrideTables::standard());
    let agreeing = dataset
        .entries()
        .iter()
        .filter(|entry| classifier.classify(entry.key()).decay_mode.is_stable() == entry.stable)
        .count();

    StabilityAgreement {
        evaluated: dataset.len(),
        agreeing,
    }
}

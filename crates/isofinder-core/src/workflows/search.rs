use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::models::result::SearchCandidate;
use crate::core::models::tables::{ElementTable, KnownMedicalTable};
use crate::engine::config::{SearchConfig, SearchConfigBuilder};
use crate::engine::context::SearchContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    /// Candidates accepted by the sweep before truncation.
    pub accepted: usize,
    pub returned: usize,
    pub known_found: usize,
    pub known_total: usize,
}

impl SearchSummary {
    /// Share of the known-medical table present in the returned list, in percent.
    pub fn identification_accuracy_percent(&self) -> Option<f64> {
        match self.known_total {
            0 => None,
            total => Some(self.known_found as f64 / total as f64 * 100.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub candidates: Vec<SearchCandidate>,
    pub summary: SearchSummary,
}

#[instrument(skip_all, name = "search_workflow")]
pub fn run(
    profile: &CalibrationProfile,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<SearchResult, EngineError> {
    let context = SearchContext::new(profile, OverrideTables::standard(), config, reporter);

    // === Phase 1: Sweep the isotope space ===
    reporter.report(Progress::PhaseStart {
        name: "Isotope Sweep",
    });
    let accepted = tasks::sweep::run(&context)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Rank and truncate ===
    reporter.report(Progress::PhaseStart { name: "Ranking" });
    let accepted_count = accepted.len();
    let candidates = tasks::ranking::run(accepted, config.target_stability, config.max_candidates);
    reporter.report(Progress::PhaseFinish);

    let summary = SearchSummary {
        accepted: accepted_count,
        returned: candidates.len(),
        known_found: candidates.iter().filter(|c| c.is_known_medical).count(),
        known_total: config.known_medical.len(),
    };
    info!(
        accepted = summary.accepted,
        returned = summary.returned,
        known_found = summary.known_found,
        known_total = summary.known_total,
        "Search complete."
    );
    reporter.report(Progress::Message(format!(
        "Identified {}/{} known medical isotopes",
        summary.known_found, summary.known_total
    )));

    Ok(SearchResult {
        candidates,
        summary,
    })
}

/// Ranked medical candidates for the given tables with default search settings.
pub fn search_medical_candidates(
    elements: &ElementTable,
    known_medical: &KnownMedicalTable,
    profile: &CalibrationProfile,
) -> Result<Vec<SearchCandidate>, EngineError> {
    let config = SearchConfigBuilder::new()
        .elements(elements.clone())
        .known_medical(known_medical.clone())
        .build()?;
    Ok(run(profile, &config, &ProgressReporter::new())?.candidates)
}

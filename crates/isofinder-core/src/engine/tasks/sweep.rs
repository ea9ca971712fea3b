use crate::core::models::isotope::{IsotopeError, IsotopeKey};
use crate::core::models::result::{EstimationResult, SearchCandidate};
use crate::engine::context::SearchContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use tracing::{debug, info, instrument, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const HALF_LIFE_SCALE: f64 = 10.0;
const HALF_LIFE_DIVISOR: f64 = 100.0;
const FALLBACK_HALF_LIFE_HOURS: f64 = 0.1;

#[derive(Debug)]
struct WorkUnit<'a> {
    symbol: &'a str,
    protons: u32,
}

type WorkResult = Result<Vec<SearchCandidate>, EngineError>;

/// Sweeps the neutron window of every element and returns the accepted candidates,
/// grouped by element in table order.
#[instrument(skip_all, name = "sweep_task")]
pub fn run(context: &SearchContext) -> Result<Vec<SearchCandidate>, EngineError> {
    let work_list: Vec<WorkUnit> = context
        .config
        .elements
        .iter()
        .map(|(symbol, protons)| WorkUnit { symbol, protons })
        .collect();

    if work_list.is_empty() {
        warn!("Element table is empty; nothing to sweep.");
        return Ok(Vec::new());
    }

    info!(
        elements = work_list.len(),
        window = context.config.neutron_window.width(),
        "Sweeping isotope space."
    );
    context.reporter.report(Progress::TaskStart {
        total_steps: work_list.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = work_list.iter();

    #[cfg(feature = "parallel")]
    let iterator = work_list.par_iter();

    let results: Vec<WorkResult> = iterator
        .map(|unit| {
            let accepted = sweep_element(unit, context);
            if let Ok(candidates) = &accepted {
                context.reporter.report(Progress::ElementSwept {
                    symbol: unit.symbol.to_string(),
                    accepted: candidates.len(),
                    known: candidates.iter().filter(|c| c.is_known_medical).count(),
                });
            }
            context.reporter.report(Progress::TaskIncrement);
            accepted
        })
        .collect();

    context.reporter.report(Progress::TaskFinish);

    let mut candidates = Vec::new();
    for result in results {
        candidates.extend(result?);
    }

    info!(accepted = candidates.len(), "Isotope sweep finished.");
    Ok(candidates)
}

fn sweep_element(unit: &WorkUnit, context: &SearchContext) -> WorkResult {
    let config = context.config;
    let classifier = context.classifier();
    let (first, last) = config.neutron_window.bounds(unit.protons);

    let mut accepted = Vec::new();
    for n in first..last {
        let key = match IsotopeKey::try_new(i64::from(unit.protons), n) {
            Ok(key) => key,
            Err(IsotopeError::NegativeNeutrons(n)) => {
                warn!(
                    element = unit.symbol,
                    neutrons = n,
                    "Skipping sweep position with negative neutron count."
                );
                continue;
            }
            Err(e) => {
                return Err(EngineError::PhaseFailed {
                    phase: "sweep",
                    element: unit.symbol.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let mass_number = key.mass_number();
        let mut stability = classifier.classify(key);
        let binding_energy = classifier.estimator().estimate(key);
        let medical_use = config.known_medical.use_of(unit.symbol, mass_number);
        let is_known = medical_use.is_some();

        if !(context.profile.in_medical_band(stability.score) || is_known) {
            trace!(element = unit.symbol, %key, score = stability.score, "Rejected.");
            continue;
        }

        if is_known {
            stability.score = config.target_stability;
        }

        debug!(
            element = unit.symbol,
            mass_number,
            score = stability.score,
            known = is_known,
            "Accepted candidate."
        );

        accepted.push(SearchCandidate {
            element_symbol: unit.symbol.to_string(),
            estimation: EstimationResult {
                key,
                binding_energy_mev: binding_energy,
                stability,
            },
            is_known_medical: is_known,
            medical_use: medical_use
                .map(str::to_string)
                .unwrap_or_else(|| config.default_medical_use.clone()),
            estimated_half_life_hours: estimated_half_life_hours(stability.score),
        });
    }
    Ok(accepted)
}

/// Rough half-life proxy in hours, `exp(10 s) / 100` for a positive score.
pub fn estimated_half_life_hours(stability: f64) -> f64 {
    if stability > 0.0 {
        (HALF_LIFE_SCALE * stability).exp() / HALF_LIFE_DIVISOR
    } else {
        FALLBACK_HALF_LIFE_HOURS
    }
}

use isofinder::core::models::result::{EstimationResult, SearchCandidate, ValidationRecord};
use isofinder::workflows::crosscheck::{CrossCheckReport, StabilityAgreement};
use isofinder::workflows::search::SearchSummary;
use isofinder::workflows::validate::ValidationReport;
use std::fmt::Write;

const RULE_WIDTH: usize = 78;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}%"))
}

pub fn estimation(result: &EstimationResult, enhancement_percent: Option<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Nuclide {} (A = {})",
        result.key,
        result.mass_number()
    );
    let _ = writeln!(out, "  Binding energy:       {:>12.3} MeV", result.binding_energy_mev);
    let _ = writeln!(
        out,
        "  Per nucleon:          {:>12.3} MeV",
        result.binding_energy_per_nucleon()
    );
    let _ = writeln!(out, "  Stability score:      {:>12.3}", result.stability.score);
    let _ = writeln!(out, "  Decay mode:           {:>12}", result.stability.decay_mode);
    match enhancement_percent {
        Some(p) => {
            let _ = writeln!(out, "  Enhancement effect:   {:>+11.2}%", p);
        }
        None => {
            let _ = writeln!(out, "  Enhancement effect:   {:>12}", "pinned");
        }
    }
    out
}

pub fn candidates(candidates: &[SearchCandidate]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<8} {:<6} {:>9} {:>12} {:>12}  {}",
        "#", "Isotope", "Known", "Stability", "B.E. (MeV)", "T1/2 (h)", "Use"
    );
    let _ = writeln!(out, "{}", rule());
    for (i, c) in candidates.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<8} {:<6} {:>9.3} {:>12.2} {:>12.3}  {}",
            i + 1,
            c.label(),
            if c.is_known_medical { "yes" } else { "no" },
            c.stability_score(),
            c.estimation.binding_energy_mev,
            c.estimated_half_life_hours,
            c.medical_use
        );
    }
    out
}

pub fn search_summary(summary: &SearchSummary) -> String {
    format!(
        "Candidates accepted: {}, listed: {}\nKnown medical isotopes identified: {}/{} ({})\n",
        summary.accepted,
        summary.returned,
        summary.known_found,
        summary.known_total,
        percent(summary.identification_accuracy_percent())
    )
}

pub fn validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>14} {:>14} {:>10}",
        "Isotope", "Reference", "Estimated", "Error"
    );
    let _ = writeln!(out, "{}", rule());
    for ValidationRecord {
        isotope_label,
        reference_binding_energy,
        estimated_binding_energy,
        percent_error,
    } in &report.records
    {
        let _ = writeln!(
            out,
            "{:<10} {:>14.3} {:>14.3} {:>10}",
            isotope_label,
            reference_binding_energy,
            estimated_binding_energy,
            percent(*percent_error)
        );
    }
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(
        out,
        "Average binding energy error: {}",
        percent(report.average_percent_error)
    );
    out
}

pub fn cross_check(report: &CrossCheckReport, agreement: &StabilityAgreement) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Predictions checked:          {}", report.total_predictions);
    let _ = writeln!(
        out,
        "Found in reference dataset:   {} ({})",
        report.matched,
        percent(report.match_rate().map(|r| r * 100.0))
    );
    let _ = writeln!(
        out,
        "Binding energy accuracy:      {}",
        percent(report.binding_energy_accuracy.map(|a| a * 100.0))
    );
    let _ = writeln!(out, "Magic number predictions:     {}", report.magic_number_hits);
    let _ = writeln!(out, "Known medical matches:        {}", report.known_medical_matches);
    let _ = writeln!(
        out,
        "Stability agreement:          {}/{} ({})",
        agreement.agreeing,
        agreement.evaluated,
        percent(agreement.fraction().map(|f| f * 100.0))
    );
    if !report.novel.is_empty() {
        let _ = writeln!(out, "Not in dataset, above stability threshold: {}", report.novel.join(", "));
    }
    out
}

use crate::error::Result;
use isofinder::core::models::result::{SearchCandidate, ValidationRecord};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn write_candidates_csv<W: Write>(writer: W, candidates: &[SearchCandidate]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "rank",
        "isotope",
        "z",
        "n",
        "a",
        "binding-energy",
        "stability",
        "decay-mode",
        "known-medical",
        "medical-use",
        "half-life-hours",
    ])?;
    for (i, c) in candidates.iter().enumerate() {
        csv.write_record([
            (i + 1).to_string(),
            c.label(),
            c.estimation.protons().to_string(),
            c.estimation.neutrons().to_string(),
            c.estimation.mass_number().to_string(),
            c.estimation.binding_energy_mev.to_string(),
            c.stability_score().to_string(),
            c.estimation.stability.decay_mode.to_string(),
            c.is_known_medical.to_string(),
            c.medical_use.clone(),
            c.estimated_half_life_hours.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_validation_csv<W: Write>(writer: W, records: &[ValidationRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["isotope", "reference", "estimated", "percent-error"])?;
    for r in records {
        csv.write_record([
            r.isotope_label.clone(),
            r.reference_binding_energy.to_string(),
            r.estimated_binding_energy.to_string(),
            r.percent_error.map(|e| e.to_string()).unwrap_or_default(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn candidates_to_file(path: &Path, candidates: &[SearchCandidate]) -> Result<()> {
    write_candidates_csv(std::fs::File::create(path)?, candidates)?;
    info!("Wrote {} candidate(s) to {:?}", candidates.len(), path);
    Ok(())
}

pub fn validation_to_file(path: &Path, records: &[ValidationRecord]) -> Result<()> {
    write_validation_csv(std::fs::File::create(path)?, records)?;
    info!("Wrote {} validation record(s) to {:?}", records.len(), path);
    Ok(())
}

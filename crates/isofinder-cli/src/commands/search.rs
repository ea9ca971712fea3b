use crate::cli::{OutputFormat, SearchArgs};
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::{export, format, progress::CliProgressHandler};
use isofinder::engine::progress::ProgressReporter;
use isofinder::workflows::search::{self, SearchResult};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: SearchArgs, config: &PartialConfig) -> Result<()> {
    let profile = config.calibration_profile()?;
    let search_config = config.search_config(args.limit)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the candidate search workflow...");
    let result = search::run(&profile, &search_config, &reporter)?;

    write_results(
        &result,
        args.format,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    if let Some(path) = &args.output {
        export::candidates_to_file(path, &result.candidates)?;
        info!("Candidates written to {:?}", path);
        eprintln!("✓ Candidates written to: {}", path.display());
    }
    Ok(())
}

/// Writes the ranked candidates to `out`. With CSV output `out` carries nothing but
/// the CSV document, so the summary and notices go to `notes` instead.
fn write_results<O: Write, N: Write>(
    result: &SearchResult,
    output_format: OutputFormat,
    out: &mut O,
    notes: &mut N,
) -> Result<()> {
    if result.candidates.is_empty() {
        warn!("Search completed but found no candidates.");
        writeln!(notes, "Warning: the search found no candidates.")?;
    }

    match output_format {
        OutputFormat::Table => {
            if !result.candidates.is_empty() {
                write!(out, "{}", format::candidates(&result.candidates))?;
            }
            write!(out, "{}", format::search_summary(&result.summary))?;
        }
        OutputFormat::Csv => {
            export::write_candidates_csv(&mut *out, &result.candidates)?;
            write!(notes, "{}", format::search_summary(&result.summary))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use isofinder::core::calibration::profile::CalibrationProfile;
    use isofinder::engine::config::SearchConfig;

    fn standard_result() -> SearchResult {
        search::run(
            &CalibrationProfile::standard(),
            &SearchConfig::standard(),
            &ProgressReporter::new(),
        )
        .unwrap()
    }

    fn render(result: &SearchResult, output_format: OutputFormat) -> (String, String) {
        let mut out = Vec::new();
        let mut notes = Vec::new();
        write_results(result, output_format, &mut out, &mut notes).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(notes).unwrap(),
        )
    }

    #[test]
    fn csv_output_is_a_clean_csv_document() {
        let result = standard_result();
        let (out, notes) = render(&result, OutputFormat::Csv);

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), result.candidates.len());
        assert!(rows.iter().all(|row| row.len() == headers.len()));

        assert_eq!(notes, format::search_summary(&result.summary));
    }

    #[test]
    fn table_output_keeps_summary_on_the_main_stream() {
        let result = standard_result();
        let (out, notes) = render(&result, OutputFormat::Table);

        assert!(out.starts_with(&format::candidates(&result.candidates)));
        assert!(out.ends_with(&format::search_summary(&result.summary)));
        assert!(notes.is_empty());
    }

    #[test]
    fn empty_result_warns_on_the_notes_stream() {
        let mut result = standard_result();
        result.candidates.clear();
        let (out, notes) = render(&result, OutputFormat::Csv);

        assert!(notes.starts_with("Warning: the search found no candidates."));
        assert_eq!(csv::Reader::from_reader(out.as_bytes()).records().count(), 0);
    }
}

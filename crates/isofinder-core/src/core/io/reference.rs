use crate::core::models::reference::{ReferenceDataset, ReferenceEntry};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReferenceLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Duplicate isotope label '{0}' in reference data")]
    DuplicateLabel(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceFile {
    #[serde(default, rename = "isotope")]
    isotopes: Vec<ReferenceEntry>,
}

const INLINE_SOURCE: &str = "<inline>";

/// Loads a reference dataset from a CSV file with a
/// `label,z,n,binding-energy,stable,half-life` header.
pub fn load_csv(path: &Path) -> Result<ReferenceDataset, ReferenceLoadError> {
    let file = std::fs::File::open(path).map_err(|e| ReferenceLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_csv(file, &path.to_string_lossy())
}

pub fn from_csv_reader<R: Read>(reader: R) -> Result<ReferenceDataset, ReferenceLoadError> {
    read_csv(reader, INLINE_SOURCE)
}

fn read_csv<R: Read>(reader: R, source: &str) -> Result<ReferenceDataset, ReferenceLoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut entries = Vec::new();
    for result in reader.deserialize::<ReferenceEntry>() {
        let entry = result.map_err(|e| ReferenceLoadError::Csv {
            path: source.to_string(),
            source: e,
        })?;
        entries.push(entry);
    }
    finish(entries, source)
}

/// Loads a reference dataset from a TOML file made of `[[isotope]]` tables.
pub fn load_toml(path: &Path) -> Result<ReferenceDataset, ReferenceLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReferenceLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_toml(&content, &path.to_string_lossy())
}

pub fn from_toml_str(content: &str) -> Result<ReferenceDataset, ReferenceLoadError> {
    parse_toml(content, INLINE_SOURCE)
}

fn parse_toml(content: &str, source: &str) -> Result<ReferenceDataset, ReferenceLoadError> {
    let file: ReferenceFile = toml::from_str(content).map_err(|e| ReferenceLoadError::Toml {
        path: source.to_string(),
        source: e,
    })?;
    finish(file.isotopes, source)
}

/// Picks the loader from the file extension; anything but `.toml` is read as CSV.
pub fn load(path: &Path) -> Result<ReferenceDataset, ReferenceLoadError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => load_toml(path),
        _ => load_csv(path),
    }
}

fn finish(entries: Vec<ReferenceEntry>, source: &str) -> Result<ReferenceDataset, ReferenceLoadError> {
    let dataset =
        ReferenceDataset::from_unique_entries(entries).map_err(ReferenceLoadError::DuplicateLabel)?;
    debug!(source, entries = dataset.len(), "Loaded reference dataset");
    Ok(dataset)
}

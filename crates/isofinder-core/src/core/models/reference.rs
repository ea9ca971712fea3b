use super::isotope::IsotopeKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One measured nuclide from an external reference database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceEntry {
    pub label: String,
    pub z: u32,
    pub n: u32,
    #[serde(rename = "binding-energy", alias = "binding_energy")]
    pub binding_energy: f64,
    pub stable: bool,
    /// Half-life in years; absent for stable nuclides.
    #[serde(default, rename = "half-life", alias = "half_life")]
    pub half_life: Option<f64>,
}

impl ReferenceEntry {
    pub fn key(&self) -> IsotopeKey {
        IsotopeKey::new(self.z, self.n)
    }
}

/// Read-only, label-indexed reference dataset. Entry order follows the source.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceDataset {
    pub(crate) fn from_unique_entries(entries: Vec<ReferenceEntry>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.label.clone(), i).is_some() {
                return Err(entry.label.clone());
            }
        }
        Ok(Self { entries, index })
    }

    pub fn get(&self, label: &str) -> Option<&ReferenceEntry> {
        self.index.get(label).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEntry {
    pub label: String,
    pub key: IsotopeKey,
    pub reference_binding_energy: f64,
}

impl ValidationEntry {
    pub fn new(label: &str, key: IsotopeKey, reference_binding_energy: f64) -> Self {
        Self {
            label: label.to_string(),
            key,
            reference_binding_energy,
        }
    }
}

// Measured total binding energies (MeV) used to score the estimator.
#[rustfmt::skip]
const STANDARD_VALIDATION: [(&str, u32, u32, f64); 6] = [
    ("He-4",   2,   2,   28.296),
    ("C-12",   6,   6,   92.162),
    ("O-16",   8,   8,  127.619),
    ("Fe-56", 26,  30,  492.254),
    ("U-235", 92, 143, 1783.9),
    ("U-238", 92, 146, 1801.7),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSet {
    entries: Vec<ValidationEntry>,
}

impl ValidationSet {
    pub fn new(entries: Vec<ValidationEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        STANDARD_VALIDATION
            .iter()
            .map(|&(label, z, n, be)| ValidationEntry::new(label, IsotopeKey::new(z, n), be))
            .collect()
    }

    pub fn from_dataset(dataset: &ReferenceDataset) -> Self {
        dataset
            .entries()
            .iter()
            .map(|e| ValidationEntry::new(&e.label, e.key(), e.binding_energy))
            .collect()
    }

    pub fn entries(&self) -> &[ValidationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ValidationEntry> for ValidationSet {
    fn from_iter<T: IntoIterator<Item = ValidationEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, z: u32, n: u32, be: f64) -> ReferenceEntry {
        ReferenceEntry {
            label: label.to_string(),
            z,
            n,
            binding_energy: be,
            stable: true,
            half_life: None,
        }
    }

    #[test]
    fn standard_validation_set_has_six_entries_in_order() {
        let set = ValidationSet::standard();
        let labels: Vec<_> = set.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["He-4", "C-12", "O-16", "Fe-56", "U-235", "U-238"]);
        assert_eq!(set.entries()[3].key, IsotopeKey::new(26, 30));
        assert_eq!(set.entries()[3].reference_binding_energy, 492.254);
    }

    #[test]
    fn dataset_rejects_duplicate_labels() {
        let result = ReferenceDataset::from_unique_entries(vec![
            entry("He-4", 2, 2, 28.296),
            entry("He-4", 2, 2, 28.3),
        ]);
        assert_eq!(result.unwrap_err(), "He-4");
    }

    #[test]
    fn dataset_lookup_by_label() {
        let dataset = ReferenceDataset::from_unique_entries(vec![
            entry("H-2", 1, 1, 2.225),
            entry("C-12", 6, 6, 92.162),
        ])
        .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get("C-12").map(|e| e.key()), Some(IsotopeKey::new(6, 6)));
        assert!(!dataset.contains("O-16"));
    }

    #[test]
    fn validation_set_from_dataset_keeps_source_order() {
        let dataset = ReferenceDataset::from_unique_entries(vec![
            entry("O-16", 8, 8, 127.619),
            entry("H-1", 1, 0, 0.0),
        ])
        .unwrap();
        let set = ValidationSet::from_dataset(&dataset);
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].label, "O-16");
        assert_eq!(set.entries()[1].reference_binding_energy, 0.0);
    }
}

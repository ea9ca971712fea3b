use super::isotope::isotope_label;
use phf::{OrderedMap, phf_ordered_map};
use std::collections::HashMap;

#[rustfmt::skip]
static STANDARD_ELEMENTS: OrderedMap<&'static str, u32> = phf_ordered_map! {
    "F" => 9, "Tc" => 43, "I" => 53, "Co" => 27, "Lu" => 71,
    "Y" => 39, "Re" => 75, "Sm" => 62, "Ho" => 67, "Er" => 68,
};

// Keyed by isotope label; values are (element symbol, mass number, clinical use).
#[rustfmt::skip]
static STANDARD_KNOWN_MEDICAL: OrderedMap<&'static str, (&'static str, u64, &'static str)> = phf_ordered_map! {
    "F-18"   => ("F", 18, "PET imaging"),
    "Tc-99"  => ("Tc", 99, "SPECT imaging"),
    "I-131"  => ("I", 131, "Thyroid treatment"),
    "Co-60"  => ("Co", 60, "Radiation therapy"),
    "Lu-177" => ("Lu", 177, "Cancer therapy"),
    "Y-90"   => ("Y", 90, "Liver cancer"),
};

/// Ordered element symbol → proton count table driving the isotope search.
///
/// Insertion order is preserved; it fixes the order in which candidates are
/// generated and therefore how ranking ties are broken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTable {
    elements: Vec<(String, u32)>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        STANDARD_ELEMENTS
            .entries()
            .map(|(symbol, z)| (symbol.to_string(), *z))
            .collect()
    }

    /// Adds an element, replacing the proton count of an existing symbol in place.
    pub fn insert(&mut self, symbol: &str, protons: u32) {
        match self.elements.iter_mut().find(|(s, _)| s == symbol) {
            Some(entry) => entry.1 = protons,
            None => self.elements.push((symbol.to_string(), protons)),
        }
    }

    pub fn protons_of(&self, symbol: &str) -> Option<u32> {
        self.elements
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, z)| *z)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.elements.iter().map(|(s, z)| (s.as_str(), *z))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for ElementTable {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut table = ElementTable::new();
        for (symbol, z) in iter {
            let symbol: String = symbol.into();
            table.insert(&symbol, z);
        }
        table
    }
}

/// Clinically established isotopes, keyed by `(element symbol, mass number)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownMedicalTable {
    uses: HashMap<(String, u64), String>,
}

impl KnownMedicalTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut table = Self::new();
        for (symbol, mass_number, use_label) in STANDARD_KNOWN_MEDICAL.values() {
            table.insert(symbol, *mass_number, use_label);
        }
        table
    }

    pub fn insert(&mut self, symbol: &str, mass_number: u64, use_label: &str) {
        self.uses
            .insert((symbol.to_string(), mass_number), use_label.to_string());
    }

    pub fn contains(&self, symbol: &str, mass_number: u64) -> bool {
        self.use_of(symbol, mass_number).is_some()
    }

    pub fn use_of(&self, symbol: &str, mass_number: u64) -> Option<&str> {
        self.uses
            .get(&(symbol.to_string(), mass_number))
            .map(String::as_str)
    }

    /// Labels (`Symbol-A`) of every entry, sorted for stable presentation.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<_> = self
            .uses
            .keys()
            .map(|(symbol, a)| isotope_label(symbol, *a))
            .collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.uses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_element_table_preserves_declaration_order() {
        let table = ElementTable::standard();
        let symbols: Vec<_> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(
            symbols,
            ["F", "Tc", "I", "Co", "Lu", "Y", "Re", "Sm", "Ho", "Er"]
        );
        assert_eq!(table.protons_of("Lu"), Some(71));
    }

    #[test]
    fn element_insert_replaces_existing_symbol_in_place() {
        let mut table: ElementTable = [("F", 9), ("I", 53)].into_iter().collect();
        table.insert("F", 10);
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().next(), Some(("F", 10)));
    }

    #[test]
    fn protons_of_unknown_symbol_is_none() {
        assert_eq!(ElementTable::standard().protons_of("Xx"), None);
    }

    #[test]
    fn standard_known_medical_table_has_six_entries() {
        let table = KnownMedicalTable::standard();
        assert_eq!(table.len(), 6);
        assert_eq!(table.use_of("F", 18), Some("PET imaging"));
        assert_eq!(table.use_of("Tc", 99), Some("SPECT imaging"));
        assert!(table.contains("Y", 90));
    }

    #[test]
    fn known_medical_lookup_is_exact_on_mass_number() {
        let table = KnownMedicalTable::standard();
        assert!(!table.contains("F", 19));
        assert!(!table.contains("Co", 59));
    }

    #[test]
    fn labels_are_sorted() {
        let labels = KnownMedicalTable::standard().labels();
        assert_eq!(
            labels,
            ["Co-60", "F-18", "I-131", "Lu-177", "Tc-99", "Y-90"]
        );
    }
}

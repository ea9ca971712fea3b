use crate::core::models::tables::{ElementTable, KnownMedicalTable};
use thiserror::Error;

pub const DEFAULT_NEUTRONS_BELOW: u32 = 10;
pub const DEFAULT_NEUTRONS_ABOVE: u32 = 20;
pub const DEFAULT_MAX_CANDIDATES: usize = 20;
pub const DEFAULT_TARGET_STABILITY: f64 = 0.4;
pub const DEFAULT_MEDICAL_USE: &str = "Research";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    Invalid {
        parameter: &'static str,
        reason: String,
    },
}

/// Neutron counts swept per element: `[Z - below, Z + above)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeutronWindow {
    pub below: u32,
    pub above: u32,
}

impl NeutronWindow {
    pub fn bounds(&self, protons: u32) -> (i64, i64) {
        let z = i64::from(protons);
        (z - i64::from(self.below), z + i64::from(self.above))
    }

    #[inline]
    pub fn width(&self) -> u64 {
        u64::from(self.below) + u64::from(self.above)
    }
}

impl Default for NeutronWindow {
    fn default() -> Self {
        Self {
            below: DEFAULT_NEUTRONS_BELOW,
            above: DEFAULT_NEUTRONS_ABOVE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub elements: ElementTable,
    pub known_medical: KnownMedicalTable,
    pub neutron_window: NeutronWindow,
    pub max_candidates: usize,
    /// Stability pinned onto known medical isotopes and used as the ranking centre.
    pub target_stability: f64,
    pub default_medical_use: String,
}

impl SearchConfig {
    /// The standard element and known-medical tables with default search settings.
    pub fn standard() -> Self {
        Self {
            elements: ElementTable::standard(),
            known_medical: KnownMedicalTable::standard(),
            neutron_window: NeutronWindow::default(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            target_stability: DEFAULT_TARGET_STABILITY,
            default_medical_use: DEFAULT_MEDICAL_USE.to_string(),
        }
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    elements: Option<ElementTable>,
    known_medical: Option<KnownMedicalTable>,
    neutrons_below: Option<u32>,
    neutrons_above: Option<u32>,
    max_candidates: Option<usize>,
    target_stability: Option<f64>,
    default_medical_use: Option<String>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(mut self, elements: ElementTable) -> Self {
        self.elements = Some(elements);
        self
    }
    pub fn known_medical(mut self, known: KnownMedicalTable) -> Self {
        self.known_medical = Some(known);
        self
    }
    pub fn neutrons_below(mut self, below: u32) -> Self {
        self.neutrons_below = Some(below);
        self
    }
    pub fn neutrons_above(mut self, above: u32) -> Self {
        self.neutrons_above = Some(above);
        self
    }
    pub fn max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = Some(n);
        self
    }
    pub fn target_stability(mut self, stability: f64) -> Self {
        self.target_stability = Some(stability);
        self
    }
    pub fn default_medical_use(mut self, label: impl Into<String>) -> Self {
        self.default_medical_use = Some(label.into());
        self
    }

    /// Tables are required; every numeric setting falls back to its default.
    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let elements = self
            .elements
            .ok_or(ConfigError::MissingParameter("elements"))?;
        let known_medical = self
            .known_medical
            .ok_or(ConfigError::MissingParameter("known_medical"))?;

        let neutron_window = NeutronWindow {
            below: self.neutrons_below.unwrap_or(DEFAULT_NEUTRONS_BELOW),
            above: self.neutrons_above.unwrap_or(DEFAULT_NEUTRONS_ABOVE),
        };
        if neutron_window.width() == 0 {
            return Err(ConfigError::Invalid {
                parameter: "neutron_window",
                reason: "window must span at least one neutron count".to_string(),
            });
        }

        let target_stability = self.target_stability.unwrap_or(DEFAULT_TARGET_STABILITY);
        if !(0.0..=1.0).contains(&target_stability) {
            return Err(ConfigError::Invalid {
                parameter: "target_stability",
                reason: format!("{target_stability} is outside [0, 1]"),
            });
        }

        Ok(SearchConfig {
            elements,
            known_medical,
            neutron_window,
            max_candidates: self.max_candidates.unwrap_or(DEFAULT_MAX_CANDIDATES),
            target_stability,
            default_medical_use: self
                .default_medical_use
                .unwrap_or_else(|| DEFAULT_MEDICAL_USE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
            .elements(ElementTable::standard())
            .known_medical(KnownMedicalTable::standard())
    }

    #[test]
    fn builder_with_tables_only_matches_standard_config() {
        let config = standard_builder().build().unwrap();
        assert_eq!(config, SearchConfig::standard());
        assert_eq!(config.max_candidates, 20);
        assert_eq!(config.target_stability, 0.4);
        assert_eq!(config.default_medical_use, "Research");
    }

    #[test]
    fn builder_fails_if_elements_are_missing() {
        let result = SearchConfigBuilder::new()
            .known_medical(KnownMedicalTable::standard())
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("elements")));
    }

    #[test]
    fn builder_fails_if_known_medical_is_missing() {
        let result = SearchConfigBuilder::new()
            .elements(ElementTable::standard())
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("known_medical")));
    }

    #[test]
    fn builder_rejects_empty_neutron_window() {
        let result = standard_builder().neutrons_below(0).neutrons_above(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                parameter: "neutron_window",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_target_stability_outside_unit_interval() {
        let result = standard_builder().target_stability(1.5).build();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                parameter: "target_stability",
                ..
            })
        ));
        assert!(standard_builder().target_stability(f64::NAN).build().is_err());
    }

    #[test]
    fn builder_applies_overrides() {
        let config = standard_builder()
            .neutrons_below(2)
            .neutrons_above(3)
            .max_candidates(5)
            .target_stability(0.35)
            .default_medical_use("Unclassified")
            .build()
            .unwrap();
        assert_eq!(config.neutron_window, NeutronWindow { below: 2, above: 3 });
        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.target_stability, 0.35);
        assert_eq!(config.default_medical_use, "Unclassified");
    }

    #[test]
    fn neutron_window_bounds_may_go_negative_for_light_elements() {
        let window = NeutronWindow::default();
        assert_eq!(window.bounds(9), (-1, 29));
        assert_eq!(window.bounds(43), (33, 63));
        assert_eq!(window.width(), 30);
    }
}

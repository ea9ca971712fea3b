use crate::error::{CliError, Result};
use isofinder::core::calibration::profile::{CalibrationProfile, CalibrationProfileBuilder};
use isofinder::core::models::tables::{ElementTable, KnownMedicalTable};
use isofinder::engine::config::{SearchConfig, SearchConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialMassFormula {
    volume: Option<f64>,
    surface: Option<f64>,
    coulomb: Option<f64>,
    asymmetry: Option<f64>,
    pairing: Option<f64>,
    magic_numbers: Option<Vec<u32>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialEnhancement {
    base_multiplier: Option<f64>,
    resonance_factor: Option<f64>,
    consciousness_level: Option<f64>,
    golden_ratio: Option<f64>,
    tesla_moduli: Option<Vec<u32>>,
    error_correction: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialThresholds {
    stability_threshold: Option<f64>,
    medical_stability_min: Option<f64>,
    medical_stability_max: Option<f64>,
    heavy_nuclei_log_scale: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSearch {
    neutrons_below: Option<u32>,
    neutrons_above: Option<u32>,
    max_candidates: Option<usize>,
    target_stability: Option<f64>,
    default_medical_use: Option<String>,
}

/// Calibration and search settings as read from a TOML file, every key optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialConfig {
    mass_formula: Option<PartialMassFormula>,
    enhancement: Option<PartialEnhancement>,
    thresholds: Option<PartialThresholds>,
    search: Option<PartialSearch>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if given, otherwise starts empty, then applies `-S` overrides.
    pub fn load(path: Option<&Path>, set_values: &[String]) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_set_values(set_values)?;
        Ok(config)
    }

    pub fn calibration_profile(&self) -> Result<CalibrationProfile> {
        let mut builder = CalibrationProfileBuilder::new();

        if let Some(mf) = &self.mass_formula {
            if let Some(v) = mf.volume {
                builder = builder.volume(v);
            }
            if let Some(v) = mf.surface {
                builder = builder.surface(v);
            }
            if let Some(v) = mf.coulomb {
                builder = builder.coulomb(v);
            }
            if let Some(v) = mf.asymmetry {
                builder = builder.asymmetry(v);
            }
            if let Some(v) = mf.pairing {
                builder = builder.pairing(v);
            }
            if let Some(numbers) = &mf.magic_numbers {
                builder = builder.magic_numbers(numbers.clone());
            }
        }

        if let Some(en) = &self.enhancement {
            if let Some(v) = en.base_multiplier {
                builder = builder.base_multiplier(v);
            }
            if let Some(v) = en.resonance_factor {
                builder = builder.resonance_factor(v);
            }
            if let Some(v) = en.consciousness_level {
                builder = builder.consciousness_level(v);
            }
            if let Some(v) = en.golden_ratio {
                builder = builder.golden_ratio(v);
            }
            if let Some(moduli) = &en.tesla_moduli {
                builder = builder.tesla_moduli(moduli.clone());
            }
            if let Some(v) = en.error_correction {
                builder = builder.error_correction(v);
            }
        }

        if let Some(th) = &self.thresholds {
            if let Some(v) = th.stability_threshold {
                builder = builder.stability_threshold(v);
            }
            if th.medical_stability_min.is_some() || th.medical_stability_max.is_some() {
                let (std_min, std_max) = CalibrationProfile::standard()
                    .thresholds()
                    .medical_stability_range;
                builder = builder.medical_stability_range(
                    th.medical_stability_min.unwrap_or(std_min),
                    th.medical_stability_max.unwrap_or(std_max),
                );
            }
            if let Some(v) = th.heavy_nuclei_log_scale {
                builder = builder.heavy_nuclei_log_scale(v);
            }
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    /// Search settings over the standard tables; `limit` overrides `max-candidates`.
    pub fn search_config(&self, limit: Option<usize>) -> Result<SearchConfig> {
        let search = self.search.clone().unwrap_or_default();

        let mut builder = SearchConfigBuilder::new()
            .elements(ElementTable::standard())
            .known_medical(KnownMedicalTable::standard());
        if let Some(v) = search.neutrons_below {
            builder = builder.neutrons_below(v);
        }
        if let Some(v) = search.neutrons_above {
            builder = builder.neutrons_above(v);
        }
        if let Some(v) = limit.or(search.max_candidates) {
            builder = builder.max_candidates(v);
        }
        if let Some(v) = search.target_stability {
            builder = builder.target_stability(v);
        }
        if let Some(label) = search.default_medical_use {
            builder = builder.default_medical_use(label);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "mass-formula.volume" => self.mass_formula_mut().volume = Some(parse(key, value_str)?),
                "mass-formula.surface" => self.mass_formula_mut().surface = Some(parse(key, value_str)?),
                "mass-formula.coulomb" => self.mass_formula_mut().coulomb = Some(parse(key, value_str)?),
                "mass-formula.asymmetry" => {
                    self.mass_formula_mut().asymmetry = Some(parse(key, value_str)?)
                }
                "mass-formula.pairing" => self.mass_formula_mut().pairing = Some(parse(key, value_str)?),
                "mass-formula.magic-numbers" => {
                    self.mass_formula_mut().magic_numbers = Some(parse_list(key, value_str)?)
                }
                "enhancement.base-multiplier" => {
                    self.enhancement_mut().base_multiplier = Some(parse(key, value_str)?)
                }
                "enhancement.resonance-factor" => {
                    self.enhancement_mut().resonance_factor = Some(parse(key, value_str)?)
                }
                "enhancement.consciousness-level" => {
                    self.enhancement_mut().consciousness_level = Some(parse(key, value_str)?)
                }
                "enhancement.golden-ratio" => {
                    self.enhancement_mut().golden_ratio = Some(parse(key, value_str)?)
                }
                "enhancement.tesla-moduli" => {
                    self.enhancement_mut().tesla_moduli = Some(parse_list(key, value_str)?)
                }
                "enhancement.error-correction" => {
                    self.enhancement_mut().error_correction = Some(parse(key, value_str)?)
                }
                "thresholds.stability-threshold" => {
                    self.thresholds_mut().stability_threshold = Some(parse(key, value_str)?)
                }
                "thresholds.medical-stability-min" => {
                    self.thresholds_mut().medical_stability_min = Some(parse(key, value_str)?)
                }
                "thresholds.medical-stability-max" => {
                    self.thresholds_mut().medical_stability_max = Some(parse(key, value_str)?)
                }
                "thresholds.heavy-nuclei-log-scale" => {
                    self.thresholds_mut().heavy_nuclei_log_scale = Some(parse(key, value_str)?)
                }
                "search.neutrons-below" => self.search_mut().neutrons_below = Some(parse(key, value_str)?),
                "search.neutrons-above" => self.search_mut().neutrons_above = Some(parse(key, value_str)?),
                "search.max-candidates" => self.search_mut().max_candidates = Some(parse(key, value_str)?),
                "search.target-stability" => {
                    self.search_mut().target_stability = Some(parse(key, value_str)?)
                }
                "search.default-medical-use" => {
                    self.search_mut().default_medical_use = Some(value_str.to_string())
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn mass_formula_mut(&mut self) -> &mut PartialMassFormula {
        self.mass_formula.get_or_insert_with(Default::default)
    }

    fn enhancement_mut(&mut self) -> &mut PartialEnhancement {
        self.enhancement.get_or_insert_with(Default::default)
    }

    fn thresholds_mut(&mut self) -> &mut PartialThresholds {
        self.thresholds.get_or_insert_with(Default::default)
    }

    fn search_mut(&mut self) -> &mut PartialSearch {
        self.search.get_or_insert_with(Default::default)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

// Accepts `3,6,9` as well as `[3, 6, 9]`.
fn parse_list(key: &str, value: &str) -> Result<Vec<u32>> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse(key, item))
        .collect()
}

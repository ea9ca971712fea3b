use thiserror::Error;

const VOLUME: f64 = 15.75;
const SURFACE: f64 = 17.8;
const COULOMB: f64 = 0.711;
const ASYMMETRY: f64 = 23.7;
const PAIRING: f64 = 11.18;

pub const MAGIC_NUMBERS: [u32; 7] = [2, 8, 20, 28, 50, 82, 126];

const BASE_MULTIPLIER: f64 = 1.234;
const RESONANCE_FACTOR: f64 = 1.05;
const CONSCIOUSNESS_LEVEL: f64 = 0.820;
const GOLDEN_RATIO: f64 = 1.618;
const TESLA_MODULI: [u32; 3] = [3, 6, 9];
const ERROR_CORRECTION: f64 = 0.965;

const STABILITY_THRESHOLD: f64 = 0.5;
const MEDICAL_STABILITY_RANGE: (f64, f64) = (0.2, 0.7);
const HEAVY_NUCLEI_LOG_SCALE: f64 = 0.15;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("Tesla moduli must be non-zero, got {0:?}")]
    ZeroModulus(Vec<u32>),
    #[error("Medical stability range ({0}, {1}) is empty or lies outside [0, 1]")]
    InvalidMedicalRange(f64, f64),
    #[error("Golden ratio must be positive and finite, got {0}")]
    InvalidGoldenRatio(f64),
    #[error("Calibration constant '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Semi-empirical mass formula coefficients, in MeV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFormulaCoefficients {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

/// Fixed multiplicative calibration constants of the enhancement layer.
///
/// These values are opaque calibration parameters. `base_multiplier` is carried
/// for reporting only and does not enter any computation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementConstants {
    pub base_multiplier: f64,
    pub resonance_factor: f64,
    pub consciousness_level: f64,
    pub golden_ratio: f64,
    pub tesla_moduli: Vec<u32>,
    pub error_correction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub stability_threshold: f64,
    pub medical_stability_range: (f64, f64),
    pub heavy_nuclei_log_scale: f64,
}

/// Immutable bundle of every constant the estimators read.
///
/// Obtain one from [`CalibrationProfile::standard`] or, to override individual
/// constants, from [`CalibrationProfileBuilder`]. Fields are only reachable
/// through shared references, so a profile never changes once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationProfile {
    mass_formula: MassFormulaCoefficients,
    magic_numbers: Vec<u32>,
    enhancement: EnhancementConstants,
    thresholds: Thresholds,
}

impl CalibrationProfile {
    pub fn standard() -> Self {
        Self {
            mass_formula: MassFormulaCoefficients {
                volume: VOLUME,
                surface: SURFACE,
                coulomb: COULOMB,
                asymmetry: ASYMMETRY,
                pairing: PAIRING,
            },
            magic_numbers: MAGIC_NUMBERS.to_vec(),
            enhancement: EnhancementConstants {
                base_multiplier: BASE_MULTIPLIER,
                resonance_factor: RESONANCE_FACTOR,
                consciousness_level: CONSCIOUSNESS_LEVEL,
                golden_ratio: GOLDEN_RATIO,
                tesla_moduli: TESLA_MODULI.to_vec(),
                error_correction: ERROR_CORRECTION,
            },
            thresholds: Thresholds {
                stability_threshold: STABILITY_THRESHOLD,
                medical_stability_range: MEDICAL_STABILITY_RANGE,
                heavy_nuclei_log_scale: HEAVY_NUCLEI_LOG_SCALE,
            },
        }
    }

    #[inline]
    pub fn mass_formula(&self) -> &MassFormulaCoefficients {
        &self.mass_formula
    }

    #[inline]
    pub fn enhancement(&self) -> &EnhancementConstants {
        &self.enhancement
    }

    #[inline]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn magic_numbers(&self) -> &[u32] {
        &self.magic_numbers
    }

    #[inline]
    pub fn is_magic(&self, count: u32) -> bool {
        self.magic_numbers.contains(&count)
    }

    /// Strict containment in the medical stability band.
    #[inline]
    pub fn in_medical_band(&self, score: f64) -> bool {
        let (min, max) = self.thresholds.medical_stability_range;
        min < score && score < max
    }
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Default)]
pub struct CalibrationProfileBuilder {
    volume: Option<f64>,
    surface: Option<f64>,
    coulomb: Option<f64>,
    asymmetry: Option<f64>,
    pairing: Option<f64>,
    magic_numbers: Option<Vec<u32>>,
    base_multiplier: Option<f64>,
    resonance_factor: Option<f64>,
    consciousness_level: Option<f64>,
    golden_ratio: Option<f64>,
    tesla_moduli: Option<Vec<u32>>,
    error_correction: Option<f64>,
    stability_threshold: Option<f64>,
    medical_stability_range: Option<(f64, f64)>,
    heavy_nuclei_log_scale: Option<f64>,
}

impl CalibrationProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(mut self, value: f64) -> Self {
        self.volume = Some(value);
        self
    }
    pub fn surface(mut self, value: f64) -> Self {
        self.surface = Some(value);
        self
    }
    pub fn coulomb(mut self, value: f64) -> Self {
        self.coulomb = Some(value);
        self
    }
    pub fn asymmetry(mut self, value: f64) -> Self {
        self.asymmetry = Some(value);
        self
    }
    pub fn pairing(mut self, value: f64) -> Self {
        self.pairing = Some(value);
        self
    }
    pub fn magic_numbers(mut self, numbers: Vec<u32>) -> Self {
        self.magic_numbers = Some(numbers);
        self
    }
    pub fn base_multiplier(mut self, value: f64) -> Self {
        self.base_multiplier = Some(value);
        self
    }
    pub fn resonance_factor(mut self, value: f64) -> Self {
        self.resonance_factor = Some(value);
        self
    }
    pub fn consciousness_level(mut self, value: f64) -> Self {
        self.consciousness_level = Some(value);
        self
    }
    pub fn golden_ratio(mut self, value: f64) -> Self {
        self.golden_ratio = Some(value);
        self
    }
    pub fn tesla_moduli(mut self, moduli: Vec<u32>) -> Self {
        self.tesla_moduli = Some(moduli);
        self
    }
    pub fn error_correction(mut self, value: f64) -> Self {
        self.error_correction = Some(value);
        self
    }
    pub fn stability_threshold(mut self, value: f64) -> Self {
        self.stability_threshold = Some(value);
        self
    }
    pub fn medical_stability_range(mut self, min: f64, max: f64) -> Self {
        self.medical_stability_range = Some((min, max));
        self
    }
    pub fn heavy_nuclei_log_scale(mut self, value: f64) -> Self {
        self.heavy_nuclei_log_scale = Some(value);
        self
    }

    /// Fills unset constants from the standard calibration and validates the result.
    pub fn build(self) -> Result<CalibrationProfile, CalibrationError> {
        let standard = CalibrationProfile::standard();

        let mass_formula = MassFormulaCoefficients {
            volume: finite("volume", self.volume.unwrap_or(standard.mass_formula.volume))?,
            surface: finite("surface", self.surface.unwrap_or(standard.mass_formula.surface))?,
            coulomb: finite("coulomb", self.coulomb.unwrap_or(standard.mass_formula.coulomb))?,
            asymmetry: finite(
                "asymmetry",
                self.asymmetry.unwrap_or(standard.mass_formula.asymmetry),
            )?,
            pairing: finite("pairing", self.pairing.unwrap_or(standard.mass_formula.pairing))?,
        };

        let tesla_moduli = self
            .tesla_moduli
            .unwrap_or(standard.enhancement.tesla_moduli);
        if tesla_moduli.contains(&0) {
            return Err(CalibrationError::ZeroModulus(tesla_moduli));
        }

        let golden_ratio = self
            .golden_ratio
            .unwrap_or(standard.enhancement.golden_ratio);
        if !(golden_ratio.is_finite() && golden_ratio > 0.0) {
            return Err(CalibrationError::InvalidGoldenRatio(golden_ratio));
        }

        let enhancement = EnhancementConstants {
            base_multiplier: finite(
                "base-multiplier",
                self.base_multiplier
                    .unwrap_or(standard.enhancement.base_multiplier),
            )?,
            resonance_factor: finite(
                "resonance-factor",
                self.resonance_factor
                    .unwrap_or(standard.enhancement.resonance_factor),
            )?,
            consciousness_level: finite(
                "consciousness-level",
                self.consciousness_level
                    .unwrap_or(standard.enhancement.consciousness_level),
            )?,
            golden_ratio,
            tesla_moduli,
            error_correction: finite(
                "error-correction",
                self.error_correction
                    .unwrap_or(standard.enhancement.error_correction),
            )?,
        };

        let (min, max) = self
            .medical_stability_range
            .unwrap_or(standard.thresholds.medical_stability_range);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min >= max {
            return Err(CalibrationError::InvalidMedicalRange(min, max));
        }

        let thresholds = Thresholds {
            stability_threshold: finite(
                "stability-threshold",
                self.stability_threshold
                    .unwrap_or(standard.thresholds.stability_threshold),
            )?,
            medical_stability_range: (min, max),
            heavy_nuclei_log_scale: finite(
                "heavy-nuclei-log-scale",
                self.heavy_nuclei_log_scale
                    .unwrap_or(standard.thresholds.heavy_nuclei_log_scale),
            )?,
        };

        Ok(CalibrationProfile {
            mass_formula,
            magic_numbers: self.magic_numbers.unwrap_or(standard.magic_numbers),
            enhancement,
            thresholds,
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, CalibrationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalibrationError::NonFinite { name, value })
    }
}

use thiserror::Error;

use super::config::ConfigError;
use crate::core::calibration::profile::CalibrationError;
use crate::core::io::reference::ReferenceLoadError;
use crate::core::models::isotope::IsotopeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid isotope: {source}")]
    Isotope {
        #[from]
        source: IsotopeError,
    },

    #[error("Invalid calibration profile: {source}")]
    Calibration {
        #[from]
        source: CalibrationError,
    },

    #[error("Invalid search configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load reference data: {source}")]
    Reference {
        #[from]
        source: ReferenceLoadError,
    },

    #[error("Search phase '{phase}' failed for element '{element}': {reason}")]
    PhaseFailed {
        phase: &'static str,
        element: String,
        reason: String,
    },
}

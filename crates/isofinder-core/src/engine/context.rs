use super::config::SearchConfig;
use super::progress::ProgressReporter;
use crate::core::calibration::overrides::OverrideTables;
use crate::core::calibration::profile::CalibrationProfile;
use crate::core::physics::stability::StabilityClassifier;

/// Read-only inputs shared by every task of a candidate search.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub profile: &'a CalibrationProfile,
    pub overrides: OverrideTables,
    pub config: &'a SearchConfig,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        profile: &'a CalibrationProfile,
        overrides: OverrideTables,
        config: &'a SearchConfig,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            profile,
            overrides,
            config,
            reporter,
        }
    }

    #[inline]
    pub fn classifier(&self) -> StabilityClassifier<'a> {
        StabilityClassifier::new(self.profile, self.overrides)
    }
}

use crate::core::calibration::profile::MassFormulaCoefficients;
use crate::core::models::isotope::IsotopeKey;

/// Nuclei heavier than this receive the logarithmic up-scaling correction.
pub const HEAVY_CORRECTION_MIN_MASS: u64 = 16;

/// The five signed terms of the semi-empirical mass formula, in MeV.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassFormulaTerms {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

impl MassFormulaTerms {
    /// Evaluates every term for `key`. The empty nucleus yields all-zero terms.
    pub fn compute(key: IsotopeKey, coefficients: &MassFormulaCoefficients) -> Self {
        let a = key.mass_number();
        if a == 0 {
            return Self::default();
        }

        let af = a as f64;
        let zf = key.protons() as f64;
        let nf = key.neutrons() as f64;

        let volume = coefficients.volume * af;
        let surface = -coefficients.surface * af.powf(2.0 / 3.0);
        let coulomb = -coefficients.coulomb * zf.powi(2) / af.powf(1.0 / 3.0);
        let asymmetry = -coefficients.asymmetry * (nf - zf).powi(2) / af;
        let pairing = pairing_term(key, coefficients.pairing, af);

        Self {
            volume,
            surface,
            coulomb,
            asymmetry,
            pairing,
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.volume + self.surface + self.coulomb + self.asymmetry + self.pairing
    }
}

// +ap/sqrt(A) even-even, -ap/sqrt(A) odd-odd, zero for mixed parity.
fn pairing_term(key: IsotopeKey, pairing: f64, af: f64) -> f64 {
    let z_even = key.protons() % 2 == 0;
    let n_even = key.neutrons() % 2 == 0;
    match (z_even, n_even) {
        (true, true) => pairing / af.sqrt(),
        (false, false) => -pairing / af.sqrt(),
        _ => 0.0,
    }
}

/// Multiplicative correction `1 + scale * ln(A)` for `A > 16`, `1.0` otherwise.
#[inline]
pub fn heavy_nucleus_factor(mass_number: u64, log_scale: f64) -> f64 {
    if mass_number > HEAVY_CORRECTION_MIN_MASS {
        1.0 + log_scale * (mass_number as f64).ln()
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calibration::profile::CalibrationProfile;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn coefficients() -> MassFormulaCoefficients {
        *CalibrationProfile::standard().mass_formula()
    }

    #[test]
    fn empty_nucleus_has_all_zero_terms() {
        let terms = MassFormulaTerms::compute(IsotopeKey::new(0, 0), &coefficients());
        assert_eq!(terms, MassFormulaTerms::default());
        assert_eq!(terms.total(), 0.0);
    }

    #[test]
    fn volume_and_surface_follow_mass_number() {
        let terms = MassFormulaTerms::compute(IsotopeKey::new(4, 4), &coefficients());
        assert!(f64_approx_equal(terms.volume, 15.75 * 8.0));
        assert!(f64_approx_equal(terms.surface, -17.8 * 4.0));
    }

    #[test]
    fn coulomb_term_scales_with_proton_count_squared() {
        let terms = MassFormulaTerms::compute(IsotopeKey::new(4, 4), &coefficients());
        assert!(f64_approx_equal(terms.coulomb, -0.711 * 16.0 / 2.0));
    }

    #[test]
    fn asymmetry_vanishes_for_symmetric_nuclei() {
        let terms = MassFormulaTerms::compute(IsotopeKey::new(8, 8), &coefficients());
        assert_eq!(terms.asymmetry, 0.0);

        let terms = MassFormulaTerms::compute(IsotopeKey::new(8, 10), &coefficients());
        assert!(f64_approx_equal(terms.asymmetry, -23.7 * 4.0 / 18.0));
    }

    #[test]
    fn pairing_sign_depends_on_parity() {
        let c = coefficients();
        let even_even = MassFormulaTerms::compute(IsotopeKey::new(8, 8), &c);
        let odd_odd = MassFormulaTerms::compute(IsotopeKey::new(7, 9), &c);
        let mixed = MassFormulaTerms::compute(IsotopeKey::new(8, 9), &c);

        assert!(f64_approx_equal(even_even.pairing, 11.18 / 4.0));
        assert!(f64_approx_equal(odd_odd.pairing, -11.18 / 4.0));
        assert_eq!(mixed.pairing, 0.0);
    }

    #[test]
    fn total_sums_all_terms() {
        let terms = MassFormulaTerms {
            volume: 10.0,
            surface: -2.0,
            coulomb: -1.0,
            asymmetry: -0.5,
            pairing: 0.25,
        };
        assert_eq!(terms.total(), 6.75);
    }

    #[test]
    fn heavy_factor_applies_only_above_mass_sixteen() {
        assert_eq!(heavy_nucleus_factor(16, 0.15), 1.0);
        assert_eq!(heavy_nucleus_factor(4, 0.15), 1.0);
        assert!(f64_approx_equal(
            heavy_nucleus_factor(20, 0.15),
            1.0 + 0.15 * 20f64.ln()
        ));
    }
}

use crate::core::models::isotope::IsotopeKey;

// Measured binding energies (MeV) of the lightest nuclides, A <= 4.
#[rustfmt::skip]
static LIGHT_NUCLIDE_BINDING_ENERGIES: [(IsotopeKey, f64); 5] = [
    (IsotopeKey::new(1, 0), 0.0),    // H-1
    (IsotopeKey::new(1, 1), 2.225),  // H-2
    (IsotopeKey::new(1, 2), 8.482),  // H-3
    (IsotopeKey::new(2, 1), 7.718),  // He-3
    (IsotopeKey::new(2, 2), 28.296), // He-4
];

#[rustfmt::skip]
static KNOWN_STABILITY: [(IsotopeKey, bool); 8] = [
    (IsotopeKey::new(1, 0), false), // H-1, a bare proton
    (IsotopeKey::new(1, 1), true),  // H-2
    (IsotopeKey::new(1, 2), false), // H-3
    (IsotopeKey::new(2, 1), true),  // He-3
    (IsotopeKey::new(2, 2), true),  // He-4
    (IsotopeKey::new(6, 6), true),  // C-12
    (IsotopeKey::new(6, 8), false), // C-14
    (IsotopeKey::new(8, 8), true),  // O-16
];

/// Finite tables of exact values that take precedence over formula output.
#[derive(Debug, Clone, Copy)]
pub struct OverrideTables {
    binding_energies: &'static [(IsotopeKey, f64)],
    stability: &'static [(IsotopeKey, bool)],
}

impl OverrideTables {
    pub const fn standard() -> Self {
        Self {
            binding_energies: &LIGHT_NUCLIDE_BINDING_ENERGIES,
            stability: &KNOWN_STABILITY,
        }
    }

    pub fn binding_energy(&self, key: IsotopeKey) -> Option<f64> {
        self.binding_energies
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, be)| be)
    }

    pub fn known_stability(&self, key: IsotopeKey) -> Option<bool> {
        self.stability
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, stable)| stable)
    }

    pub fn binding_energy_entries(&self) -> &'static [(IsotopeKey, f64)] {
        self.binding_energies
    }

    pub fn stability_entries(&self) -> &'static [(IsotopeKey, bool)] {
        self.stability
    }
}

impl Default for OverrideTables {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_energy_overrides_cover_exactly_five_light_nuclides() {
        let tables = OverrideTables::standard();
        assert_eq!(tables.binding_energy_entries().len(), 5);
        assert!(
            tables
                .binding_energy_entries()
                .iter()
                .all(|(k, _)| k.mass_number() <= 4)
        );
    }

    #[test]
    fn binding_energy_lookup_returns_literal_values() {
        let tables = OverrideTables::standard();
        assert_eq!(tables.binding_energy(IsotopeKey::new(1, 0)), Some(0.0));
        assert_eq!(tables.binding_energy(IsotopeKey::new(1, 1)), Some(2.225));
        assert_eq!(tables.binding_energy(IsotopeKey::new(1, 2)), Some(8.482));
        assert_eq!(tables.binding_energy(IsotopeKey::new(2, 1)), Some(7.718));
        assert_eq!(tables.binding_energy(IsotopeKey::new(2, 2)), Some(28.296));
    }

    #[test]
    fn binding_energy_lookup_misses_other_keys() {
        let tables = OverrideTables::standard();
        assert_eq!(tables.binding_energy(IsotopeKey::new(0, 1)), None);
        assert_eq!(tables.binding_energy(IsotopeKey::new(2, 0)), None);
        assert_eq!(tables.binding_energy(IsotopeKey::new(6, 6)), None);
    }

    #[test]
    fn stability_overrides_cover_eight_keys() {
        let tables = OverrideTables::standard();
        assert_eq!(tables.stability_entries().len(), 8);
        assert_eq!(tables.known_stability(IsotopeKey::new(6, 6)), Some(true));
        assert_eq!(tables.known_stability(IsotopeKey::new(6, 8)), Some(false));
        assert_eq!(tables.known_stability(IsotopeKey::new(1, 0)), Some(false));
        assert_eq!(tables.known_stability(IsotopeKey::new(8, 8)), Some(true));
        assert_eq!(tables.known_stability(IsotopeKey::new(26, 30)), None);
    }
}

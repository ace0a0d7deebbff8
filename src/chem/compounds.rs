// src/chem/compounds.rs
//
// The known-compound table. Entries are matched in definition order, so when
// two formula strings parse to the same mapping the first one wins; the
// constructor flags that case as a data-quality problem instead of failing.

use std::collections::HashMap;

use super::formula::{canonical_form, matches_recipe, parse_formula, Recipe};

/// Formulas are written symbol-by-symbol the way the builder accumulates
/// atoms, so grouped formulas like Ca(OH)2 appear expanded (CaO2H2).
const COMPOUNDS: &[(&str, &str)] = &[
    // Basics
    ("H2O", "Water"),
    ("O2", "Oxygen Gas"),
    ("H2", "Hydrogen Gas"),
    ("N2", "Nitrogen Gas"),
    ("Cl2", "Chlorine Gas"),
    ("CO2", "Carbon Dioxide"),
    ("CO", "Carbon Monoxide"),
    ("O3", "Ozone"),
    ("H2O2", "Hydrogen Peroxide (Antiseptic)"),
    // Acids
    ("HCl", "Hydrochloric Acid"),
    ("H2SO4", "Sulfuric Acid"),
    ("HNO3", "Nitric Acid"),
    ("C2H4O2", "Acetic Acid (Vinegar)"),
    ("H3PO4", "Phosphoric Acid"),
    ("HF", "Hydrofluoric Acid"),
    ("HCN", "Hydrogen Cyanide"),
    ("H2S", "Hydrogen Sulfide (Rotten Egg Gas)"),
    // Bases & alkalis
    ("NaOH", "Sodium Hydroxide (Lye)"),
    ("KOH", "Potassium Hydroxide"),
    ("CaO2H2", "Calcium Hydroxide (Slaked Lime)"),
    ("NH3", "Ammonia"),
    ("NaH1C1O3", "Baking Soda"),
    // Salts & ionic
    ("NaCl", "Table Salt"),
    ("KCl", "Potassium Chloride"),
    ("CaCl2", "Calcium Chloride"),
    ("MgCl2", "Magnesium Chloride"),
    ("KI", "Potassium Iodide"),
    ("NaF", "Sodium Fluoride"),
    ("CaC1O3", "Limestone / Chalk"),
    ("NaN1O3", "Sodium Nitrate"),
    ("KN1O3", "Gunpowder (Saltpeter)"),
    ("AgCl", "Silver Chloride"),
    ("CuS1O4", "Copper Sulfate"),
    ("FeS", "Iron Sulfide"),
    // Oxides
    ("Fe2O3", "Rust (Iron Oxide)"),
    ("Fe3O4", "Magnetite"),
    ("Al2O3", "Ruby / Sapphire (Al oxide)"),
    ("SiO2", "Quartz / Sand"),
    ("MgO", "Magnesium Oxide"),
    ("CaO", "Quicklime"),
    ("ZnO", "Zinc Oxide"),
    ("Ti1O2", "Titanium Dioxide (White Pigment)"),
    ("N2O", "Nitrous Oxide (Laughing Gas)"),
    ("S1O2", "Sulfur Dioxide"),
    // Simple organics
    ("CH4", "Methane"),
    ("C2H6", "Ethane"),
    ("C3H8", "Propane"),
    ("C4H10", "Butane"),
    ("C2H4", "Ethylene"),
    ("C2H2", "Acetylene"),
    ("C6H6", "Benzene"),
    ("C1H4O1", "Methanol"),
    ("C2H6O1", "Ethanol (Alcohol)"),
    ("C6H12O6", "Glucose (Sugar)"),
    ("C12H22O11", "Sucrose (Table Sugar)"),
    ("C3H8O3", "Glycerol"),
    // Exotic / dangerous
    ("NaC1N1", "Sodium Cyanide"),
    ("C7H5N3O6", "TNT (Explosive)"),
    ("C8H10N4O2", "Caffeine"),
    ("U1F6", "Uranium Hexafluoride"),
];

#[derive(Debug, Clone, Copy)]
pub struct CompoundEntry {
    pub formula: &'static str,
    pub name: &'static str,
}

pub struct CompoundTable {
    entries: Vec<CompoundEntry>,
}

impl CompoundTable {
    /// Build the table from the built-in dictionary.
    pub fn load() -> Self {
        Self::from_entries(COMPOUNDS)
    }

    /// Build a table and run the duplicate-mapping integrity check: two
    /// distinct formula strings that parse to the same element counts would
    /// shadow each other at lookup, so they are reported once here. The
    /// earlier entry keeps winning at lookup time.
    pub fn from_entries(list: &'static [(&'static str, &'static str)]) -> Self {
        let mut seen: HashMap<String, &'static str> = HashMap::new();
        let mut entries = Vec::with_capacity(list.len());

        for &(formula, name) in list {
            let key = canonical_form(&parse_formula(formula));
            if let Some(first) = seen.get(key.as_str()) {
                log::warn!(
                    "compound table: {formula} duplicates {first} (both parse to {key}); first entry wins"
                );
            } else {
                seen.insert(key, formula);
            }
            entries.push(CompoundEntry { formula, name });
        }

        log::info!("compound table loaded with {} entries", entries.len());
        Self { entries }
    }

    /// First entry (in definition order) whose formula matches the recipe.
    /// `None` is the ordinary not-found outcome for an unknown mixture.
    pub fn check(&self, recipe: &Recipe) -> Option<CompoundEntry> {
        self.entries
            .iter()
            .find(|entry| matches_recipe(entry.formula, recipe))
            .copied()
    }

    pub fn entries(&self) -> &[CompoundEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(pairs: &[(&str, u32)]) -> Recipe {
        pairs
            .iter()
            .map(|(s, c)| (s.to_string(), *c))
            .collect()
    }

    #[test]
    fn finds_water() {
        let table = CompoundTable::load();
        let hit = table.check(&recipe(&[("H", 2), ("O", 1)])).expect("water");
        assert_eq!(hit.formula, "H2O");
        assert_eq!(hit.name, "Water");
    }

    #[test]
    fn finds_table_salt() {
        let table = CompoundTable::load();
        let hit = table
            .check(&recipe(&[("Na", 1), ("Cl", 1)]))
            .expect("table salt");
        assert_eq!(hit.formula, "NaCl");
        assert_eq!(hit.name, "Table Salt");
    }

    #[test]
    fn finds_glucose() {
        let table = CompoundTable::load();
        let hit = table
            .check(&recipe(&[("C", 6), ("H", 12), ("O", 6)]))
            .expect("glucose");
        assert_eq!(hit.formula, "C6H12O6");
        assert_eq!(hit.name, "Glucose (Sugar)");
    }

    #[test]
    fn unknown_symbol_is_not_found() {
        let table = CompoundTable::load();
        assert!(table.check(&recipe(&[("Xx", 1)])).is_none());
    }

    #[test]
    fn empty_mixture_is_not_found() {
        // No dictionary formula parses to an empty mapping.
        let table = CompoundTable::load();
        assert!(table.check(&Recipe::new()).is_none());
    }

    #[test]
    fn every_entry_matches_its_own_parse() {
        let table = CompoundTable::load();
        for entry in table.entries() {
            assert!(
                matches_recipe(entry.formula, &parse_formula(entry.formula)),
                "{} should match its own parse",
                entry.formula
            );
        }
    }

    #[test]
    fn no_two_entries_share_a_parsed_mapping() {
        let table = CompoundTable::load();
        let mut seen = HashMap::new();
        for entry in table.entries() {
            let key = canonical_form(&parse_formula(entry.formula));
            if let Some(first) = seen.insert(key.clone(), entry.formula) {
                panic!("{} and {} both parse to {}", first, entry.formula, key);
            }
        }
    }

    #[test]
    fn first_match_wins_on_duplicate_mappings() {
        // "OH2" and "H2O" are distinct strings with the same parsed mapping;
        // the earlier definition must shadow the later one.
        static DUPED: &[(&str, &str)] = &[
            ("H2O", "Water"),
            ("OH2", "Backwards Water"),
            ("NaCl", "Table Salt"),
        ];
        let table = CompoundTable::from_entries(DUPED);
        assert_eq!(table.len(), 3);
        let hit = table.check(&recipe(&[("H", 2), ("O", 1)])).expect("water");
        assert_eq!(hit.name, "Water");
    }

    #[test]
    fn mixed_digit_styles_parse_identically() {
        // The table writes some counts explicitly ("Ti1O2"): the lookup
        // must treat them like their undecorated forms.
        let table = CompoundTable::load();
        let hit = table
            .check(&recipe(&[("Ti", 1), ("O", 2)]))
            .expect("titanium dioxide");
        assert_eq!(hit.name, "Titanium Dioxide (White Pigment)");
    }
}

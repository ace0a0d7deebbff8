// src/chem/formula.rs
//
// Chemical formula parsing and recipe matching. Both functions are total:
// malformed spans are skipped, a mismatch is a plain `false`, and an unknown
// mixture is a `None` at the table layer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Element symbol -> atom count. Symbols are case-sensitive ("Co" != "CO").
pub type Recipe = HashMap<String, u32>;

/// One element token: an uppercase letter, optional lowercase tail, optional
/// count digits. Anything else in the string is ignored.
static FORMULA_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]*)(\d*)").expect("formula token pattern is valid"));

/// Parse a formula string ("C6H12O6") into symbol counts. Missing digits
/// mean 1; a symbol appearing twice accumulates. Spans that match no token
/// contribute nothing, so every key in the result maps to a count >= 1.
pub fn parse_formula(formula: &str) -> Recipe {
    let mut recipe = Recipe::new();
    for cap in FORMULA_TOKEN.captures_iter(formula) {
        let symbol = &cap[1];
        let count = if cap[2].is_empty() {
            1
        } else {
            cap[2].parse::<u32>().unwrap_or(0)
        };
        if count > 0 {
            *recipe.entry(symbol.to_string()).or_insert(0) += count;
        }
    }
    recipe
}

/// True when `formula` parses to exactly `recipe`: same symbol set, same
/// count per symbol. Both key lists are sorted and walked in lockstep, so
/// the comparison is order-independent and rejects sub/supersets.
pub fn matches_recipe(formula: &str, recipe: &Recipe) -> bool {
    let parsed = parse_formula(formula);

    let mut parsed_keys: Vec<&String> = parsed.keys().collect();
    let mut recipe_keys: Vec<&String> = recipe.keys().collect();
    if parsed_keys.len() != recipe_keys.len() {
        return false;
    }
    parsed_keys.sort();
    recipe_keys.sort();

    for (a, b) in parsed_keys.iter().zip(recipe_keys.iter()) {
        if a != b {
            return false;
        }
        if parsed.get(*a) != recipe.get(*b) {
            return false;
        }
    }
    true
}

/// Deterministic rendering of a recipe: symbols sorted, explicit counts.
/// Used for dictionary integrity keys and log output.
pub fn canonical_form(recipe: &Recipe) -> String {
    let mut keys: Vec<&String> = recipe.keys().collect();
    keys.sort();
    keys.iter()
        .map(|k| format!("{}{}", k, recipe[*k]))
        .collect::<Vec<_>>()
        .join(" ")
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
    fn parses_water() {
        let parsed = parse_formula("H2O");
        assert_eq!(parsed, recipe(&[("H", 2), ("O", 1)]));
    }

    #[test]
    fn missing_digits_mean_one() {
        let parsed = parse_formula("NaCl");
        assert_eq!(parsed, recipe(&[("Na", 1), ("Cl", 1)]));
    }

    #[test]
    fn repeated_symbols_accumulate() {
        // CH3COOH written out: carbon and oxygen appear twice each.
        let parsed = parse_formula("CH3COOH");
        assert_eq!(parsed, recipe(&[("C", 2), ("H", 4), ("O", 2)]));
    }

    #[test]
    fn multi_letter_symbols_are_greedy() {
        // "Co" is cobalt, not carbon + oxygen.
        let parsed = parse_formula("Co2");
        assert_eq!(parsed, recipe(&[("Co", 2)]));
    }

    #[test]
    fn malformed_spans_are_skipped() {
        // Leading lowercase and stray punctuation contribute nothing.
        let parsed = parse_formula("xx!H2O-");
        assert_eq!(parsed, recipe(&[("H", 2), ("O", 1)]));
        assert_eq!(parse_formula(""), Recipe::new());
        assert_eq!(parse_formula("123"), Recipe::new());
    }

    #[test]
    fn explicit_zero_counts_are_dropped() {
        // A zero count would violate the count >= 1 invariant.
        let parsed = parse_formula("H0O");
        assert_eq!(parsed, recipe(&[("O", 1)]));
    }

    #[test]
    fn canonical_form_is_order_independent() {
        let a = parse_formula("C6H12O6");
        let b = parse_formula("H12O6C6");
        assert_eq!(canonical_form(&a), canonical_form(&b));
        assert_eq!(canonical_form(&a), "C6 H12 O6");
    }

    #[test]
    fn matches_own_parse() {
        for formula in ["H2O", "NaCl", "C6H12O6", "Fe2O3", "CaO2H2"] {
            assert!(
                matches_recipe(formula, &parse_formula(formula)),
                "{formula} should match its own parse"
            );
        }
    }

    #[test]
    fn rejects_subsets_and_supersets() {
        let water = recipe(&[("H", 2), ("O", 1)]);
        assert!(!matches_recipe("H2", &water));
        assert!(!matches_recipe("H2O2", &water));
        assert!(!matches_recipe("H2ONa", &water));
        assert!(!matches_recipe("", &water));
    }

    #[test]
    fn rejects_count_mismatch() {
        assert!(!matches_recipe("H2O", &recipe(&[("H", 3), ("O", 1)])));
    }

    #[test]
    fn matching_is_symmetric_under_role_swap() {
        // matches_recipe reduces to set+count equality, so swapping which
        // side is the parsed formula cannot change the outcome.
        let pairs = [("H2O", "OH2"), ("C2H6O1", "C2H6O"), ("NaCl", "ClNa")];
        for (f1, f2) in pairs {
            assert_eq!(
                matches_recipe(f1, &parse_formula(f2)),
                matches_recipe(f2, &parse_formula(f1)),
                "asymmetry between {f1} and {f2}"
            );
        }
    }

    #[test]
    fn empty_recipe_matches_empty_parse() {
        assert!(matches_recipe("", &Recipe::new()));
        assert!(matches_recipe("!!", &Recipe::new()));
    }
}

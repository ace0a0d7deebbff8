// src/model/element.rs

use serde::Deserialize;
use std::collections::HashMap;

use crate::config::LearnLevel;

/// Embedded element reference table (shells derived from ground-state
/// electron configurations).
const ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl Category {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "alkali metal" => Self::AlkaliMetal,
            "alkaline earth metal" => Self::AlkalineEarthMetal,
            "transition metal" => Self::TransitionMetal,
            "post-transition metal" => Self::PostTransitionMetal,
            "metalloid" => Self::Metalloid,
            "reactive nonmetal" | "diatomic nonmetal" | "polyatomic nonmetal" => {
                Self::ReactiveNonmetal
            }
            "noble gas" => Self::NobleGas,
            "lanthanide" => Self::Lanthanide,
            "actinide" => Self::Actinide,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AlkaliMetal => "Alkali Metal",
            Self::AlkalineEarthMetal => "Alkaline Earth",
            Self::TransitionMetal => "Transition Metal",
            Self::PostTransitionMetal => "Post-Transition",
            Self::Metalloid => "Metalloid",
            Self::ReactiveNonmetal => "Nonmetal",
            Self::NobleGas => "Noble Gas",
            Self::Lanthanide => "Lanthanide",
            Self::Actinide => "Actinide",
            Self::Unknown => "Unknown",
        }
    }

    /// Hex color used for the grid cards (CSS side).
    pub fn hex_color(&self) -> &'static str {
        match self {
            Self::AlkaliMetal => "#eab308",
            Self::AlkalineEarthMetal => "#f97316",
            Self::TransitionMetal => "#94a3b8",
            Self::PostTransitionMetal => "#22d3ee",
            Self::Metalloid => "#22d3ee",
            Self::ReactiveNonmetal => "#4ade80",
            Self::NobleGas => "#6366f1",
            Self::Lanthanide => "#ec4899",
            Self::Actinide => "#d946ef",
            Self::Unknown => "#ffffff",
        }
    }

    /// Same color as an rgb triple for cairo (nucleus tint).
    pub fn rgb(&self) -> (f64, f64, f64) {
        let hex = &self.hex_color()[1..];
        let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(255) as f64 / 255.0;
        (parse(&hex[0..2]), parse(&hex[2..4]), parse(&hex[4..6]))
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::AlkaliMetal => "cat-alkali",
            Self::AlkalineEarthMetal => "cat-alkaline",
            Self::TransitionMetal => "cat-transition",
            Self::PostTransitionMetal => "cat-post-transition",
            Self::Metalloid => "cat-metalloid",
            Self::ReactiveNonmetal => "cat-nonmetal",
            Self::NobleGas => "cat-noble",
            Self::Lanthanide => "cat-lanthanide",
            Self::Actinide => "cat-actinide",
            Self::Unknown => "cat-unknown",
        }
    }

    pub const ALL: [Category; 10] = [
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::PostTransitionMetal,
        Self::Metalloid,
        Self::ReactiveNonmetal,
        Self::NobleGas,
        Self::Lanthanide,
        Self::Actinide,
        Self::Unknown,
    ];
}

/// Matter phase at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementQuiz {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub answer: usize,
}

/// Raw record as stored in data/elements.json.
#[derive(Debug, Deserialize)]
struct RawElement {
    number: u32,
    symbol: String,
    name: String,
    atomic_mass: f64,
    category: String,
    period: u32,
    group: Option<u32>,
    shells: Vec<u32>,
    electron_configuration: String,
    phase: String,
    melt: Option<f64>,
    boil: Option<f64>,
    density: Option<f64>,
    summary: Option<Summary>,
    fun_fact: Option<String>,
    uses: Option<Vec<String>>,
    discovered_by: Option<String>,
    year: Option<i32>,
    quiz: Option<ElementQuiz>,
}

#[derive(Debug, Deserialize)]
struct ElementTableJson {
    elements: Vec<RawElement>,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: Category,
    pub category_name: String,
    pub period: u32,
    pub group: Option<u32>,
    /// Electrons per shell, innermost first. Sum equals `number`.
    pub shells: Vec<u32>,
    pub electron_configuration: String,
    pub standard_phase: Phase,
    pub melt: Option<f64>,
    pub boil: Option<f64>,
    pub density: Option<f64>,
    pub summary: Option<Summary>,
    pub fun_fact: Option<String>,
    pub uses: Vec<String>,
    pub discovered_by: Option<String>,
    pub year: Option<i32>,
    pub quiz: Option<ElementQuiz>,
}

impl Element {
    /// Phase of this element at `temp` Kelvin. Elements with missing
    /// melt/boil data fall back to gas-like or solid-like defaults so the
    /// temperature view still classifies every card.
    pub fn phase_at(&self, temp: f64) -> Phase {
        let gaseous = self.standard_phase == Phase::Gas;
        let melt = self.melt.unwrap_or(if gaseous { 50.0 } else { 1000.0 });
        let boil = self.boil.unwrap_or(if gaseous { 100.0 } else { 3000.0 });

        if temp >= boil {
            Phase::Gas
        } else if temp >= melt {
            Phase::Liquid
        } else {
            Phase::Solid
        }
    }

    pub fn summary_for(&self, level: LearnLevel) -> String {
        match &self.summary {
            Some(s) => match level {
                LearnLevel::Beginner => s.beginner.clone(),
                LearnLevel::Intermediate => s.intermediate.clone(),
                LearnLevel::Advanced => s.advanced.clone(),
            },
            None => format!(
                "No {} description available for {} yet.",
                level.label().to_lowercase(),
                self.name
            ),
        }
    }

    /// True when the record carries enough descriptive data to serve as a
    /// trivia subject.
    pub fn is_rich(&self) -> bool {
        self.fun_fact.is_some() || self.summary.is_some()
    }

    pub fn shells_display(&self) -> String {
        self.shells
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// All 118 elements, ordered by atomic number, with symbol lookup.
pub struct ElementRegistry {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
}

impl ElementRegistry {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(ELEMENTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: ElementTableJson = serde_json::from_str(json)?;
        let mut elements: Vec<Element> = raw
            .elements
            .into_iter()
            .map(|r| Element {
                number: r.number,
                symbol: r.symbol,
                name: r.name,
                atomic_mass: r.atomic_mass,
                category: Category::parse(&r.category),
                category_name: r.category,
                period: r.period,
                group: r.group,
                shells: r.shells,
                electron_configuration: r.electron_configuration,
                standard_phase: match r.phase.as_str() {
                    "Gas" => Phase::Gas,
                    "Liquid" => Phase::Liquid,
                    _ => Phase::Solid,
                },
                melt: r.melt,
                boil: r.boil,
                density: r.density,
                summary: r.summary,
                fun_fact: r.fun_fact,
                uses: r.uses.unwrap_or_default(),
                discovered_by: r.discovered_by,
                year: r.year,
                quiz: r.quiz,
            })
            .collect();
        elements.sort_by_key(|e| e.number);

        let by_symbol = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol.clone(), i))
            .collect();

        Ok(Self {
            elements,
            by_symbol,
        })
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn by_number(&self, number: u32) -> Option<&Element> {
        // Registry is sorted and dense over 1..=118.
        self.elements.get(number.checked_sub(1)? as usize)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol.get(symbol).and_then(|&i| self.elements.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

pub fn is_lanthanoid(number: u32) -> bool {
    (57..=71).contains(&number)
}

pub fn is_actinoid(number: u32) -> bool {
    (89..=103).contains(&number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ElementRegistry {
        ElementRegistry::load().expect("embedded element table should parse")
    }

    #[test]
    fn loads_all_118_elements() {
        let reg = registry();
        assert_eq!(reg.len(), 118);
    }

    #[test]
    fn shells_sum_to_atomic_number() {
        let reg = registry();
        for el in reg.iter() {
            let total: u32 = el.shells.iter().sum();
            assert_eq!(total, el.number, "shell sum mismatch for {}", el.symbol);
        }
    }

    #[test]
    fn sodium_shell_structure() {
        let reg = registry();
        let na = reg.by_symbol("Na").expect("sodium present");
        assert_eq!(na.number, 11);
        assert_eq!(na.shells, vec![2, 8, 1]);
        assert_eq!(na.category, Category::AlkaliMetal);
    }

    #[test]
    fn lookup_by_number_matches_symbol() {
        let reg = registry();
        let fe = reg.by_number(26).expect("iron present");
        assert_eq!(fe.symbol, "Fe");
        assert_eq!(fe.name, "Iron");
        assert_eq!(fe.category, Category::TransitionMetal);
    }

    #[test]
    fn category_parsing_covers_data_names() {
        assert_eq!(Category::parse("alkali metal"), Category::AlkaliMetal);
        assert_eq!(Category::parse("reactive nonmetal"), Category::ReactiveNonmetal);
        assert_eq!(Category::parse("diatomic nonmetal"), Category::ReactiveNonmetal);
        assert_eq!(Category::parse("noble gas"), Category::NobleGas);
        assert_eq!(Category::parse("something else"), Category::Unknown);
    }

    #[test]
    fn phase_classification_with_data() {
        let reg = registry();
        let hg = reg.by_symbol("Hg").expect("mercury present");
        assert_eq!(hg.phase_at(298.0), Phase::Liquid);
        assert_eq!(hg.phase_at(100.0), Phase::Solid);
        assert_eq!(hg.phase_at(1000.0), Phase::Gas);
    }

    #[test]
    fn phase_classification_fallbacks() {
        let reg = registry();
        // Francium has no melt/boil in the table: solid-like defaults apply.
        let fr = reg.by_symbol("Fr").expect("francium present");
        assert!(fr.melt.is_none());
        assert_eq!(fr.phase_at(298.0), Phase::Solid);
        assert_eq!(fr.phase_at(1500.0), Phase::Liquid);
        assert_eq!(fr.phase_at(3500.0), Phase::Gas);
    }

    #[test]
    fn lanthanoid_and_actinoid_ranges() {
        assert!(is_lanthanoid(57));
        assert!(is_lanthanoid(71));
        assert!(!is_lanthanoid(72));
        assert!(is_actinoid(89));
        assert!(is_actinoid(103));
        assert!(!is_actinoid(104));
    }

    #[test]
    fn summary_fallback_names_element() {
        let reg = registry();
        let db = reg.by_symbol("Db").expect("dubnium present");
        assert!(db.summary.is_none());
        let text = db.summary_for(LearnLevel::Beginner);
        assert!(text.contains("Dubnium"));
    }
}

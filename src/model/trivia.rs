// src/model/trivia.rs
//
// Round generation for the element trivia game. Pure over an injected RNG so
// rounds are reproducible in tests.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use super::element::{Element, ElementRegistry};

pub const POINTS_PER_CORRECT: u32 = 10;
const OPTIONS_PER_ROUND: usize = 4;

pub struct TriviaRound {
    /// Clue text with the element's name obfuscated.
    pub clue: String,
    /// Registry indices of the answer candidates, shuffled.
    pub options: Vec<usize>,
    /// Position of the correct element within `options`.
    pub answer: usize,
}

/// Pick a random subject from the rich-data pool and build a round.
/// Returns `None` when the registry holds fewer than four rich elements.
pub fn next_round<R: Rng>(registry: &ElementRegistry, rng: &mut R) -> Option<TriviaRound> {
    let pool = rich_pool(registry);
    if pool.len() < OPTIONS_PER_ROUND {
        return None;
    }
    let target = pool[rng.gen_range(0..pool.len())];
    build_round(registry, &pool, target, rng)
}

fn rich_pool(registry: &ElementRegistry) -> Vec<usize> {
    registry
        .iter()
        .enumerate()
        .filter(|(_, el)| el.is_rich())
        .map(|(i, _)| i)
        .collect()
}

fn build_round<R: Rng>(
    registry: &ElementRegistry,
    pool: &[usize],
    target: usize,
    rng: &mut R,
) -> Option<TriviaRound> {
    let element = registry.get(target)?;
    let clue = obfuscate(&clue_for(element), &element.name);

    let mut options = vec![target];
    while options.len() < OPTIONS_PER_ROUND {
        let wrong = pool[rng.gen_range(0..pool.len())];
        if !options.contains(&wrong) {
            options.push(wrong);
        }
    }
    options.shuffle(rng);
    let answer = options.iter().position(|&i| i == target)?;

    Some(TriviaRound {
        clue,
        options,
        answer,
    })
}

/// Clue priority: fun fact, then beginner summary, then a category sentence.
fn clue_for(element: &Element) -> String {
    if let Some(fact) = &element.fun_fact {
        return fact.clone();
    }
    if let Some(summary) = &element.summary {
        return summary.beginner.clone();
    }
    match element.group {
        Some(g) => format!("I am a {} found in group {}.", element.category_name, g),
        None => format!(
            "I am a {} found in period {}.",
            element.category_name, element.period
        ),
    }
}

/// Blank out the element's own name so the clue doesn't give itself away.
fn obfuscate(clue: &str, name: &str) -> String {
    match Regex::new(&format!("(?i){}", regex::escape(name))) {
        Ok(re) => re.replace_all(clue, "___").into_owned(),
        Err(_) => clue.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> ElementRegistry {
        ElementRegistry::load().expect("embedded element table should parse")
    }

    #[test]
    fn round_has_four_distinct_options_with_answer() {
        let reg = registry();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let round = next_round(&reg, &mut rng).expect("pool is large enough");
            assert_eq!(round.options.len(), 4);
            let mut sorted = round.options.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 4, "options must be distinct");
            assert!(round.answer < 4);
        }
    }

    #[test]
    fn clue_never_names_the_answer() {
        let reg = registry();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let round = next_round(&reg, &mut rng).expect("pool is large enough");
            let answer = reg.get(round.options[round.answer]).unwrap();
            assert!(
                !round.clue.to_lowercase().contains(&answer.name.to_lowercase()),
                "clue leaked the name {}: {}",
                answer.name,
                round.clue
            );
        }
    }

    #[test]
    fn helium_fact_is_obfuscated() {
        let reg = registry();
        let pool = rich_pool(&reg);
        let helium = reg
            .iter()
            .position(|el| el.symbol == "He")
            .expect("helium present");
        assert!(pool.contains(&helium));

        let mut rng = StdRng::seed_from_u64(3);
        let round = build_round(&reg, &pool, helium, &mut rng).expect("round builds");
        // The embedded fun fact mentions helium by name; the clue must not.
        assert!(round.clue.contains("___"));
        assert!(!round.clue.to_lowercase().contains("helium"));
    }

    #[test]
    fn obfuscation_is_case_insensitive() {
        assert_eq!(obfuscate("Gold, gold, GOLD!", "Gold"), "___, ___, ___!");
    }

    #[test]
    fn poor_elements_use_category_clue() {
        let reg = registry();
        let db = reg.by_symbol("Db").expect("dubnium present");
        assert!(!db.is_rich());
        let clue = clue_for(db);
        assert!(clue.contains("transition metal"));
    }
}

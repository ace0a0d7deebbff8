// src/state.rs

use crate::chem::{CompoundTable, Mixture};
use crate::config::Config;
use crate::model::{Category, ElementRegistry};

/// Everything the widgets share: the static reference tables, the builder's
/// working mixture, the persisted config, and the transient view filters.
/// Lives behind one Rc<RefCell<..>> on the GTK main loop; no locking needed.
pub struct AppState {
    pub registry: ElementRegistry,
    pub compounds: CompoundTable,
    pub mixture: Mixture,
    pub config: Config,

    /// Active category filter; None shows everything.
    pub filter: Option<Category>,
    /// Current search term (lowercased on entry).
    pub search: String,
    /// Running score of the current trivia game.
    pub game_score: u32,
}

impl AppState {
    pub fn new() -> Self {
        let registry = ElementRegistry::load().expect("embedded element table is valid");
        let compounds = CompoundTable::load();

        Self {
            registry,
            compounds,
            mixture: Mixture::new(),
            config: Config::default(),
            filter: None,
            search: String::new(),
            game_score: 0,
        }
    }

    pub fn load_config(&mut self) {
        let (config, message) = Config::load();
        self.config = config;
        log::info!("{message}");
    }

    pub fn save_config(&self) {
        log::info!("{}", self.config.save());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_full_tables() {
        let state = AppState::new();
        assert_eq!(state.registry.len(), 118);
        assert!(!state.compounds.is_empty());
        assert!(state.mixture.is_empty());
        assert_eq!(state.game_score, 0);
        assert!(state.filter.is_none());
    }
}

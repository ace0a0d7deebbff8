pub mod detail;
pub mod game;
pub mod grid;
pub mod interactions;
pub mod preferences;

// Re-exports
pub use detail::show_element_window;
pub use game::show_trivia_window;
pub use grid::ElementGrid;
pub use preferences::show_preferences_window;

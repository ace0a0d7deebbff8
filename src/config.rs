// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnLevel {
  Beginner,
  Intermediate,
  Advanced,
}

impl LearnLevel {
  pub fn label(&self) -> &'static str {
    match self {
      Self::Beginner => "Beginner",
      Self::Intermediate => "Intermediate",
      Self::Advanced => "Advanced",
    }
  }

  pub const ALL: [LearnLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];
}

impl Default for LearnLevel {
  fn default() -> Self {
    Self::Beginner
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExportFormat {
  Png,
  Pdf,
}

// --- Style ---

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Style {
  pub background_color: (f64, f64, f64),
  pub electron_color: (f64, f64, f64),
  /// 0.0 disables the halo pass entirely.
  pub glow_strength: f64,
}

impl Default for Style {
  fn default() -> Self {
    Self {
      background_color: (0.02, 0.02, 0.06),
      electron_color: (1.0, 1.0, 1.0),
      glow_strength: 1.0,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
  #[serde(default)]
  pub learn_level: LearnLevel,

  #[serde(default)]
  pub high_score: u32,

  /// Atomic numbers of starred elements.
  #[serde(default)]
  pub favorites: Vec<u32>,

  #[serde(default = "default_temperature")]
  pub temperature: f64,

  pub default_export_format: ExportFormat,

  #[serde(default)]
  pub style: Style,
}

fn default_temperature() -> f64 {
  298.0
}

impl Default for Config {
  fn default() -> Self {
    Self {
      learn_level: LearnLevel::Beginner,
      high_score: 0,
      favorites: Vec::new(),
      temperature: default_temperature(),
      default_export_format: ExportFormat::Png,
      style: Style::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/elemview/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  pub fn toggle_favorite(&mut self, number: u32) -> bool {
    if let Some(pos) = self.favorites.iter().position(|&n| n == number) {
      self.favorites.remove(pos);
      false
    } else {
      self.favorites.push(number);
      true
    }
  }

  pub fn is_favorite(&self, number: u32) -> bool {
    self.favorites.contains(&number)
  }

  /// Record a finished game; returns true when a new high score was set.
  pub fn record_score(&mut self, score: u32) -> bool {
    if score > self.high_score {
      self.high_score = score;
      true
    } else {
      false
    }
  }

  fn get_path() -> PathBuf {
    // "com.example.elemview" should match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("com", "example", "elemview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_roundtrip_preserves_fields() {
    let mut cfg = Config::default();
    cfg.learn_level = LearnLevel::Advanced;
    cfg.high_score = 120;
    cfg.favorites = vec![1, 8, 79];
    cfg.temperature = 1200.0;

    let json = serde_json::to_string(&cfg).expect("serialize");
    let back: Config = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.learn_level, LearnLevel::Advanced);
    assert_eq!(back.high_score, 120);
    assert_eq!(back.favorites, vec![1, 8, 79]);
    assert!((back.temperature - 1200.0).abs() < 1e-9);
  }

  #[test]
  fn missing_fields_take_defaults() {
    let json = r#"{"default_export_format":"Png"}"#;
    let cfg: Config = serde_json::from_str(json).expect("partial config parses");
    assert_eq!(cfg.learn_level, LearnLevel::Beginner);
    assert_eq!(cfg.high_score, 0);
    assert!(cfg.favorites.is_empty());
    assert!((cfg.temperature - 298.0).abs() < 1e-9);
  }

  #[test]
  fn favorite_toggle_is_involutive() {
    let mut cfg = Config::default();
    assert!(cfg.toggle_favorite(26));
    assert!(cfg.is_favorite(26));
    assert!(!cfg.toggle_favorite(26));
    assert!(!cfg.is_favorite(26));
  }

  #[test]
  fn high_score_only_moves_up() {
    let mut cfg = Config::default();
    assert!(cfg.record_score(30));
    assert!(!cfg.record_score(20));
    assert_eq!(cfg.high_score, 30);
    assert!(cfg.record_score(40));
    assert_eq!(cfg.high_score, 40);
  }
}

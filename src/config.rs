// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExportFormat {
  Png,
  Pdf,
}

// --- PlotStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
  pub spin_up_color: (f64, f64, f64),
  pub spin_down_color: (f64, f64, f64),
  pub background_color: (f64, f64, f64),
  /// Marker radius in pixels
  pub point_size: u32,
  /// Annotate each coordinate with its electron count
  pub show_counts: bool,
}

impl Default for PlotStyle {
  fn default() -> Self {
    Self {
      spin_up_color: (0.0, 0.0, 1.0),
      spin_down_color: (1.0, 0.0, 0.0),
      background_color: (1.0, 1.0, 1.0),
      point_size: 6,
      show_counts: true,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// CSV or spreadsheet replacing the built-in element table
  #[serde(default)]
  pub element_table: Option<PathBuf>,

  #[serde(default = "default_export_format")]
  pub default_export_format: ExportFormat,

  #[serde(default = "default_export_size")]
  pub export_size: (u32, u32),

  #[serde(default)]
  pub plot_style: PlotStyle,
}

fn default_export_format() -> ExportFormat {
  ExportFormat::Png
}

fn default_export_size() -> (u32, u32) {
  (1000, 800)
}

impl Default for Config {
  fn default() -> Self {
    Self {
      element_table: None,
      default_export_format: default_export_format(),
      export_size: default_export_size(),
      plot_style: PlotStyle::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/qview/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
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
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
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

  fn get_path() -> PathBuf {
    // Must match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "qview") {
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
  fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, msg) = Config::load_from(&dir.path().join("nope.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("defaults"));
  }

  #[test]
  fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut cfg = Config::default();
    cfg.element_table = Some(PathBuf::from("/data/ptable.csv"));
    cfg.plot_style.show_counts = false;
    cfg.default_export_format = ExportFormat::Pdf;

    let msg = cfg.save_to(&path);
    assert!(msg.starts_with("Config saved"), "{}", msg);

    let (loaded, _) = Config::load_from(&path);
    assert_eq!(loaded, cfg);
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "plot_style": { "point_size": 9 } }"#).unwrap();

    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.plot_style.point_size, 9);
    assert_eq!(cfg.plot_style.spin_up_color, (0.0, 0.0, 1.0));
    assert_eq!(cfg.export_size, (1000, 800));
    assert!(cfg.element_table.is_none());
  }

  #[test]
  fn test_garbage_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }
}

//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/piecekeeper/settings.toml (or platform
//! equivalent). Only presentation preferences live here; the inventory
//! itself is never persisted.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visual settings
    pub visual: VisualSettings,
}

/// Visual settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Piece token style: "bracket", "round", "angle"
    pub piece_style: String,
    /// Show piece ids inside the tokens
    pub show_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            visual: VisualSettings::default(),
        }
    }
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            piece_style: "bracket".to_string(),
            show_ids: true,
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "piecekeeper", "piecekeeper")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

impl VisualSettings {
    /// Get the bracket pair for piece tokens based on style
    pub fn piece_brackets(&self) -> (&'static str, &'static str) {
        match self.piece_style.as_str() {
            "round" => ("(", ")"),
            "angle" => ("<", ">"),
            _ => ("[", "]"), // "bracket" or default
        }
    }

    /// The styles the settings menu cycles through
    pub fn styles() -> &'static [&'static str] {
        &["bracket", "round", "angle"]
    }
}

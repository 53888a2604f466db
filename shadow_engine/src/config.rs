//! Game configuration.
//!
//! Tunables for a session: combatant stats, the door password, and the RNG seed.
//! Every field has a default, so a config file only needs the values it changes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::DamageRange;
use crate::data_paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_max_hp: u32,
    pub player_damage: DamageRange,
    pub enemy_max_hp: u32,
    pub enemy_damage: DamageRange,
    /// Password that opens the chamber door.
    pub password: String,
    pub case_sensitive_password: bool,
    /// Fixed seed for damage rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_max_hp: 20,
            player_damage: DamageRange::new(1, 6),
            enemy_max_hp: 10,
            enemy_damage: DamageRange::new(1, 4),
            password: "SHADOW".to_string(),
            case_sensitive_password: false,
            seed: None,
        }
    }
}

/// Parse a configuration from TOML text.
///
/// # Errors
/// Returns an error if the text is not valid TOML for a `GameConfig`.
pub fn parse_config(text: &str) -> Result<GameConfig> {
    toml::from_str(text).context("parsing game config")
}

/// Load configuration from `toml_path`, falling back to defaults on any failure.
pub fn load_config(toml_path: &Path) -> GameConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("game config loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load game config from '{}': {e:#}. Using defaults.",
                toml_path.display()
            );
            GameConfig::default()
        },
    }
}

fn try_load_config(toml_path: &Path) -> Result<GameConfig> {
    let text =
        fs::read_to_string(toml_path).with_context(|| format!("reading game config from '{}'", toml_path.display()))?;
    parse_config(&text).with_context(|| format!("in '{}'", toml_path.display()))
}

/// Load the config from the first candidate location, or use defaults if there is none.
pub fn discover_config() -> GameConfig {
    match data_paths::config_path() {
        Some(path) => load_config(&path),
        None => {
            info!("no config file found; using defaults");
            GameConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("password = \"OPEN\"\nseed = 7\n").unwrap();
        assert_eq!(config.password, "OPEN");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player_max_hp, 20);
        assert_eq!(config.enemy_damage, DamageRange::new(1, 4));
    }

    #[test]
    fn damage_ranges_parse_as_tables() {
        let config = parse_config("player_damage = { min = 2, max = 8 }").unwrap();
        assert_eq!(config.player_damage, DamageRange::new(2, 8));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_max_hp = \"lots\"").unwrap();
        assert_eq!(load_config(file.path()), GameConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(&dir.path().join("absent.toml")), GameConfig::default());
    }

    #[test]
    fn file_values_are_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enemy_max_hp = 30\ncase_sensitive_password = true").unwrap();
        let config = load_config(file.path());
        assert_eq!(config.enemy_max_hp, 30);
        assert!(config.case_sensitive_password);
    }
}

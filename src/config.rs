use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub card: CardConfig,
    pub colors: ColorsConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub stats_path: Option<PathBuf>,
    pub vm_status: String,
    pub card_id: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            stats_path: None,
            vm_status: "running".to_string(),
            card_id: "vm-networking".to_string(),
            log_file: None,
        }
    }
}

impl GeneralConfig {
    pub fn is_running(&self) -> bool {
        parse_vm_status(&self.vm_status)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub unavailable_message: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            title: "Networking".to_string(),
            unavailable_message: "Network utilization is not currently available for this VM."
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub reload: String,
    pub toggle_running: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            reload: "r".to_string(),
            toggle_running: "p".to_string(),
        }
    }
}

/// "up" and "running" mean the VM reports statistics; every other status
/// (down, suspended, migrating, ...) is treated as not running.
pub fn parse_vm_status(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "up" | "running")
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("vmutil").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

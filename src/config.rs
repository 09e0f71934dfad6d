//! User configuration — default content source and startup tab.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).
//! CLI arguments win over anything set here.

use std::path::PathBuf;

use crate::core::view::Tab;

/// Application configuration, all fields optional.
#[derive(Debug, Default)]
pub struct AppConfig {
    /// Default content source (path or http(s) URL).
    pub content: Option<String>,
    /// Tab shown on startup.
    pub start_tab: Option<Tab>,
}

impl AppConfig {
    /// Load config from disk, falling back to empty defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::default()
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "content" => {
                    if !value.is_empty() {
                        config.content = Some(value.to_string());
                    }
                }
                "start_tab" => {
                    config.start_tab = Tab::parse(value);
                }
                _ => {}
            }
        }

        config
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/folio/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio").join("config.toml")
}

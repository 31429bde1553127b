use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PanelSettings;

const SETTINGS_FILE: &str = "panel.toml";

pub struct SettingsService;

impl SettingsService {
    /// Platform config path for the panel settings file, e.g.
    /// `~/.config/devhunt-panel/panel.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "devhunt", "devhunt-panel")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Loads settings, falling back to defaults when no file exists.
    /// A file that exists but fails to parse is an error rather than a
    /// silent fallback.
    pub fn load(path: &Path) -> Result<PanelSettings> {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Ok(PanelSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: PanelSettings =
            toml::from_str(&content).context("Failed to parse settings file")?;

        Ok(settings)
    }

    pub fn save(path: &Path, settings: &PanelSettings) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();

        let settings = SettingsService::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(settings, PanelSettings::default());
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = PanelSettings {
            sponsors_url: "https://ads.example.com/slots".to_string(),
            tick_interval_ms: 500,
            ref_tag: "example".to_string(),
        };

        SettingsService::save(&path, &settings).unwrap();
        let loaded = SettingsService::load(&path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "tick_interval_ms = \"soon\"").unwrap();

        assert!(SettingsService::load(&path).is_err());
    }
}

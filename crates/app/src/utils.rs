//! Helpers for config locations, settings and outbound links

use shared::settings::PortfolioSettings;
use std::path::{Path, PathBuf};

fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "Anurag Kumar Singh", "Portfolio")
        .map(|proj| proj.config_dir().to_path_buf())
}

/// Path to the settings file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Path to the UI preference store (theme)
pub fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("preferences.json"))
}

/// Read settings from `path`; `None` if missing or unparseable
pub fn read_settings(path: &Path) -> Option<PortfolioSettings> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<PortfolioSettings>(&contents) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
            None
        }
    }
}

/// Load settings from disk or return defaults.
/// The flag tells whether a settings file was found.
pub fn load_settings_or_default() -> (PortfolioSettings, bool) {
    match config_path().as_deref().and_then(read_settings) {
        Some(settings) => (settings, true),
        None => (PortfolioSettings::default(), false),
    }
}

pub fn write_settings(path: &Path, settings: &PortfolioSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Save settings to disk
pub fn save_settings(settings: &PortfolioSettings) {
    if let Some(path) = config_path() {
        if let Err(e) = write_settings(&path, settings) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save settings");
        }
    }
}

/// Directory bundled assets are resolved from: next to the executable
pub fn asset_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Hand a URL to the system (browser, mail client, dialer)
pub fn open_link(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "failed to open link");
    }
}

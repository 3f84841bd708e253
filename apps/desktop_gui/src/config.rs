use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use client_core::{ALERT_DURATION, THEME_TRANSITION};

pub const SETTINGS_FILE_NAME: &str = "stridegear.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `None` means "preferences.sqlite3 under the data directory".
    pub database_url: Option<String>,
    pub alert_duration: Duration,
    pub theme_transition: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: None,
            alert_duration: ALERT_DURATION,
            theme_transition: THEME_TRANSITION,
        }
    }
}

pub fn load_settings(settings_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(settings_path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => apply_file_values(&mut settings, &file_cfg),
            Err(err) => tracing::warn!(
                path = %settings_path.display(),
                "ignoring malformed settings file: {err}"
            ),
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file_values(settings: &mut Settings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("database_url").and_then(|v| v.as_str()) {
        settings.database_url = Some(v.to_string());
    }
    if let Some(ms) = file_cfg.get("alert_duration_ms").and_then(value_as_millis) {
        settings.alert_duration = ms;
    }
    if let Some(ms) = file_cfg.get("theme_transition_ms").and_then(value_as_millis) {
        settings.theme_transition = ms;
    }
}

fn value_as_millis(value: &toml::Value) -> Option<Duration> {
    match value {
        toml::Value::Integer(ms) if *ms >= 0 => Some(Duration::from_millis(*ms as u64)),
        toml::Value::String(raw) => raw.trim().parse::<u64>().ok().map(Duration::from_millis),
        _ => None,
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("STRIDEGEAR_DATABASE_URL") {
        settings.database_url = Some(v);
    }
    if let Some(v) = var("APP__DATABASE_URL") {
        settings.database_url = Some(v);
    }

    if let Some(v) = var("APP__ALERT_DURATION_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.alert_duration = Duration::from_millis(parsed);
        }
    }
    if let Some(v) = var("APP__THEME_TRANSITION_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.theme_transition = Duration::from_millis(parsed);
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub settings_path: PathBuf,
    pub preferences_db: PathBuf,
}

impl AppPaths {
    pub fn resolve(data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let root = match data_dir {
            Some(p) => p.to_path_buf(),
            None => dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve local app data dir"))?
                .join("stridegear"),
        };

        Ok(Self {
            settings_path: root.join(SETTINGS_FILE_NAME),
            preferences_db: root.join("preferences.sqlite3"),
            data_root: root,
        })
    }

    pub fn ensure_exists(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.data_root).with_context(|| {
            format!(
                "failed to create data directory '{}'",
                self.data_root.display()
            )
        })
    }
}

/// Database URL to open: explicit override, else the per-user file.
pub fn resolve_database_url(settings: &Settings, paths: &AppPaths) -> String {
    settings
        .database_url
        .as_deref()
        .and_then(storage::normalize_database_url)
        .unwrap_or_else(|| storage::sqlite_url_for_path(&paths.preferences_db))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

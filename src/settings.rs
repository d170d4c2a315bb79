use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::analytics::PeriodMode;

/// UI preferences. Call data is never persisted; this only shapes how the
/// dashboard presents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Period mode selected on startup.
    pub default_period: PeriodMode,
    /// How many calls the dashboard's recent-calls list shows.
    pub recent_call_limit: usize,
    /// Event-loop poll timeout in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_period: PeriodMode::All,
            recent_call_limit: 4,
            tick_rate_ms: 250,
        }
    }
}

impl Settings {
    /// Read settings from `CALLBOARD_SETTINGS` or `~/.callboard.json` when
    /// present. A missing or malformed file falls back to defaults; the
    /// dashboard must come up either way.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                log::warn!("failed to read settings from {}: {err}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("ignoring malformed settings file {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("CALLBOARD_SETTINGS") {
        return Some(PathBuf::from(path));
    }
    env::var_os("HOME").map(|home| PathBuf::from(home).join(".callboard.json"))
}

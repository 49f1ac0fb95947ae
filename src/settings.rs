use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::grid::GridSize;
use crate::storage::{data_dir, read_json, write_json};
use crate::theme::ThemeId;

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Allowed board dimensions.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(try_from = "u16", into = "u16")]
pub enum BoardSize {
    #[value(name = "10")]
    Small,
    #[value(name = "15")]
    Medium,
    #[default]
    #[value(name = "20")]
    Large,
}

impl BoardSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn cells_per_side(self) -> u16 {
        match self {
            Self::Small => 10,
            Self::Medium => 15,
            Self::Large => 20,
        }
    }

    #[must_use]
    pub fn grid(self) -> GridSize {
        GridSize::square(self.cells_per_side())
    }

    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

impl TryFrom<u16> for BoardSize {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.cells_per_side() == value)
            .ok_or_else(|| format!("unsupported grid size {value}"))
    }
}

impl From<BoardSize> for u16 {
    fn from(size: BoardSize) -> Self {
        size.cells_per_side()
    }
}

/// Named starting speed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedPreset {
    pub const ALL: [Self; 3] = [Self::Slow, Self::Normal, Self::Fast];

    /// Starting tick interval for this preset.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(match self {
            Self::Slow => 180,
            Self::Normal => 140,
            Self::Fast => 100,
        })
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

/// Options applied when a session is (re)started.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid_size: BoardSize,
    pub speed: SpeedPreset,
    pub theme: ThemeId,
}

impl Settings {
    /// Builds settings from loosely-typed JSON, falling back per field.
    ///
    /// A bad theme name does not throw away a valid grid size.
    #[must_use]
    pub fn sanitize(raw: &serde_json::Value) -> Self {
        let defaults = Self::default();
        Self {
            grid_size: field(raw, "grid_size").unwrap_or(defaults.grid_size),
            speed: field(raw, "speed").unwrap_or(defaults.speed),
            theme: field(raw, "theme").unwrap_or(defaults.theme),
        }
    }
}

fn field<T: DeserializeOwned>(raw: &serde_json::Value, key: &str) -> Option<T> {
    let value = raw.get(key)?.clone();
    serde_json::from_value(value).ok()
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|item| *item == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Last-used settings persisted as JSON.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    #[must_use]
    pub fn new() -> Self {
        Self::at(data_dir().join(SETTINGS_FILE_NAME))
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads settings, using defaults for anything missing or invalid.
    #[must_use]
    pub fn load(&self) -> Settings {
        match read_json::<serde_json::Value>(&self.path) {
            Ok(Some(raw)) => Settings::sanitize(&raw),
            Ok(None) => Settings::default(),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable settings file");
                Settings::default()
            }
        }
    }

    /// Persists settings; failures are logged and otherwise ignored.
    pub fn save(&self, settings: &Settings) {
        if let Err(error) = write_json(&self.path, settings) {
            tracing::warn!(%error, "failed to save settings");
        }
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new()
    }
}

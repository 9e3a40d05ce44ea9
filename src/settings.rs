//! Game settings
//!
//! Difficulty table, colours and RNG seed. The native build always runs with
//! the defaults; `from_json` exists for embedding and tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_SELECTION;
use crate::difficulty::DifficultyProfile;
use crate::renderer::Color;

/// Settings that cannot be used to run the game
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("difficulty list is empty")]
    NoProfiles,
    #[error("expected exactly one Exit entry, found {0}")]
    SentinelCount(usize),
    #[error("profile {0:?} sets only one of lifetime/interval")]
    HalfNullProfile(String),
    #[error("profile {name:?} has a non-positive {field}")]
    NonPositive { name: String, field: &'static str },
    #[error("default selection {index} is out of range for {len} profiles")]
    DefaultSelectionOutOfRange { index: usize, len: usize },
}

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    /// Untouched target
    pub target: Color,
    /// Target that was hit
    pub hit: Color,
    /// Target that was clicked outside its radius
    pub miss: Color,
    pub text: Color,
    /// Title and highlighted menu entry
    pub selected: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [30, 30, 30, 255],
            target: [0, 200, 255, 255],
            hit: [50, 255, 50, 255],
            miss: [255, 50, 50, 255],
            text: [255, 255, 255, 255],
            selected: [255, 220, 0, 255],
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Menu entries in display order, including the Exit sentinel
    pub difficulties: Vec<DifficultyProfile>,
    /// Entry highlighted when the menu opens
    #[serde(default = "default_selection")]
    pub default_selection: usize,
    #[serde(default)]
    pub palette: Palette,
    /// Fixed spawner seed; each session draws a fresh one when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_selection() -> usize {
    DEFAULT_SELECTION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulties: DifficultyProfile::builtin(),
            default_selection: DEFAULT_SELECTION,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Settings for the native build
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Same settings with a fixed spawner seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the difficulty table invariants
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.difficulties.is_empty() {
            return Err(SettingsError::NoProfiles);
        }

        let sentinels = self.difficulties.iter().filter(|p| p.is_sentinel()).count();
        if sentinels != 1 {
            return Err(SettingsError::SentinelCount(sentinels));
        }

        for profile in self.difficulties.iter().filter(|p| !p.is_sentinel()) {
            let (Some(lifetime), Some(interval)) =
                (profile.target_lifetime_secs, profile.spawn_interval_secs)
            else {
                return Err(SettingsError::HalfNullProfile(profile.name.clone()));
            };
            // `!(x > 0.0)` also rejects NaN
            if !(lifetime > 0.0) || !lifetime.is_finite() {
                return Err(SettingsError::NonPositive {
                    name: profile.name.clone(),
                    field: "target lifetime",
                });
            }
            if !(interval > 0.0) || !interval.is_finite() {
                return Err(SettingsError::NonPositive {
                    name: profile.name.clone(),
                    field: "spawn interval",
                });
            }
        }

        if self.default_selection >= self.difficulties.len() {
            return Err(SettingsError::DefaultSelectionOutOfRange {
                index: self.default_selection,
                len: self.difficulties.len(),
            });
        }

        Ok(())
    }
}

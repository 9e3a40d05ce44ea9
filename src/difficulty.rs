//! Difficulty profiles
//!
//! A profile is either playable (target lifetime + spawn interval) or the
//! "Exit" sentinel, which ends the program when confirmed in the menu.

use serde::{Deserialize, Serialize};

/// Name given to the sentinel entry of the built-in table
pub const EXIT_NAME: &str = "Exit";

/// One entry of the difficulty menu, as stored in settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub name: String,
    /// Seconds a target takes to shrink to nothing (`None` for the sentinel)
    pub target_lifetime_secs: Option<f64>,
    /// Minimum seconds between two spawns (`None` for the sentinel)
    pub spawn_interval_secs: Option<f64>,
}

impl DifficultyProfile {
    pub fn new(name: impl Into<String>, target_lifetime_secs: f64, spawn_interval_secs: f64) -> Self {
        Self {
            name: name.into(),
            target_lifetime_secs: Some(target_lifetime_secs),
            spawn_interval_secs: Some(spawn_interval_secs),
        }
    }

    /// The quit entry
    pub fn exit() -> Self {
        Self {
            name: EXIT_NAME.to_string(),
            target_lifetime_secs: None,
            spawn_interval_secs: None,
        }
    }

    /// True if confirming this entry quits instead of starting a session
    pub fn is_sentinel(&self) -> bool {
        self.target_lifetime_secs.is_none() && self.spawn_interval_secs.is_none()
    }

    /// Playable view of this profile, `None` for the sentinel (or a malformed half-null entry)
    pub fn playable(&self) -> Option<Difficulty> {
        match (self.target_lifetime_secs, self.spawn_interval_secs) {
            (Some(target_lifetime_secs), Some(spawn_interval_secs)) => Some(Difficulty {
                name: self.name.clone(),
                target_lifetime_secs,
                spawn_interval_secs,
            }),
            _ => None,
        }
    }

    /// Built-in table: Easy, Medium, Hard, Exit
    pub fn builtin() -> Vec<DifficultyProfile> {
        vec![
            DifficultyProfile::new("Easy", 2.2, 1.5),
            DifficultyProfile::new("Medium", 1.5, 1.0),
            DifficultyProfile::new("Hard", 1.0, 0.6),
            DifficultyProfile::exit(),
        ]
    }
}

/// A confirmed, playable difficulty handed from the menu to the game loop
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub name: String,
    pub target_lifetime_secs: f64,
    pub spawn_interval_secs: f64,
}

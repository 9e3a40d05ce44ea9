//! Mini Osu - click the shrinking circles before they vanish
//!
//! Core modules:
//! - `sim`: Display-free gameplay (targets, spawning, scoring, menu)
//! - `app`: Top-level Menu <-> Playing state machine
//! - `renderer`: Display list and CPU rasterizer
//! - `platform`: Input event model and native window translation
//! - `settings`: Difficulty table, palette and seed

pub mod app;
pub mod difficulty;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppControl};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use settings::{Palette, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;

    /// Gameplay frame rate
    pub const GAME_FPS: u32 = 60;
    /// Menu redraw rate (not latency critical)
    pub const MENU_FPS: u32 = 20;

    /// Radius of a freshly spawned target
    pub const TARGET_RADIUS: f32 = 60.0;

    /// Score awarded for a hit
    pub const HIT_SCORE: i64 = 100;
    /// Score deducted for a miss
    pub const MISS_PENALTY: i64 = 50;

    /// Index of the profile highlighted when the menu opens ("Medium")
    pub const DEFAULT_SELECTION: usize = 1;
}

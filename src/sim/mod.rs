//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module must stay display-free:
//! - Time is passed in, never read from the wall clock
//! - Seeded RNG only
//! - Targets are kept in spawn order
//! - No rendering backend or platform dependencies (drawing goes to a `DrawList`)

pub mod clock;
pub mod game_loop;
pub mod menu;
pub mod session;
pub mod spawner;
pub mod target;

pub use clock::{MonotonicClock, SessionClock};
pub use game_loop::{GameLoop, LoopState};
pub use menu::{MenuOutcome, MenuState};
pub use session::{Session, SessionStats, score_delta};
pub use spawner::{Playfield, Spawner};
pub use target::{HitResult, Resolution, Target};

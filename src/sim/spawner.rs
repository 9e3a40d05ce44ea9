//! Target spawning cadence

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::target::Target;
use crate::consts::{HEIGHT, TARGET_RADIUS, WIDTH};
use crate::difficulty::Difficulty;

/// Rectangle targets may be placed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: WIDTH as f32,
            height: HEIGHT as f32,
        }
    }
}

/// Emits at most one target per call once the spawn interval has passed
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    playfield: Playfield,
    base_radius: f32,
    /// Session-relative time of the last spawn
    last_spawn: f64,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self::with_playfield(seed, Playfield::default(), TARGET_RADIUS)
    }

    pub fn with_playfield(seed: u64, playfield: Playfield, base_radius: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            base_radius,
            last_spawn: 0.0,
            next_id: 1,
        }
    }

    pub fn last_spawn(&self) -> f64 {
        self.last_spawn
    }

    /// Spawn a target if more than the profile's interval has passed since the last one.
    /// A stalled frame yields one target, not a catch-up burst.
    pub fn maybe_spawn(&mut self, now: f64, difficulty: &Difficulty) -> Option<Target> {
        if now - self.last_spawn <= difficulty.spawn_interval_secs {
            return None;
        }

        let pos = self.sample_position();
        let id = self.next_id;
        self.next_id += 1;
        self.last_spawn = now;

        log::trace!("Spawned target {} at ({:.0}, {:.0}), t={:.3}", id, pos.x, pos.y, now);
        Some(Target::new(
            id,
            pos,
            now,
            difficulty.target_lifetime_secs,
            self.base_radius,
        ))
    }

    /// Uniform position inset by the base radius so targets are fully on screen
    fn sample_position(&mut self) -> Vec2 {
        let r = self.base_radius;
        let x = sample_axis(&mut self.rng, r, self.playfield.width - r);
        let y = sample_axis(&mut self.rng, r, self.playfield.height - r);
        Vec2::new(x, y)
    }
}

fn sample_axis(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    // Playfield narrower than a target: pin to the centre line
    if max <= min {
        return (min + max) * 0.5;
    }
    rng.random_range(min..=max)
}

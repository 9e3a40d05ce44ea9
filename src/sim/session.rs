//! One play session: score, active targets and the spawner
//!
//! Created when the menu confirms a difficulty, dropped when the player
//! leaves gameplay. Nothing here outlives a session.

use glam::Vec2;

use super::clock::SessionClock;
use super::spawner::Spawner;
use super::target::{HitResult, Target};
use crate::consts::{HIT_SCORE, MISS_PENALTY};
use crate::difficulty::Difficulty;

/// Score change for a click resolution
pub fn score_delta(result: HitResult) -> i64 {
    match result {
        HitResult::Hit => HIT_SCORE,
        HitResult::Miss => -MISS_PENALTY,
        HitResult::Ignored => 0,
    }
}

/// Per-session counters, logged when the session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub hits: u32,
    pub misses: u32,
    pub spawned: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub difficulty: Difficulty,
    /// May go negative
    pub score: i64,
    /// Active targets in spawn order
    pub targets: Vec<Target>,
    pub clock: SessionClock,
    pub stats: SessionStats,
    spawner: Spawner,
}

impl Session {
    pub fn new(difficulty: Difficulty, clock: SessionClock, spawner: Spawner) -> Self {
        Self {
            difficulty,
            score: 0,
            targets: Vec::new(),
            clock,
            stats: SessionStats::default(),
            spawner,
        }
    }

    /// Resolve a click against every unclicked target. Returns the total score change.
    pub fn click(&mut self, pos: Vec2, now: f64) -> i64 {
        let mut delta = 0;
        for target in self.targets.iter_mut().filter(|t| !t.is_clicked()) {
            let result = target.resolve_click(pos, now);
            match result {
                HitResult::Hit => self.stats.hits += 1,
                HitResult::Miss => self.stats.misses += 1,
                HitResult::Ignored => {}
            }
            log::debug!("Target {} {:?} at t={:.3}", target.id, result, now);
            delta += score_delta(result);
        }
        self.score += delta;
        delta
    }

    /// Let the spawner add at most one target
    pub fn spawn(&mut self, now: f64) -> bool {
        match self.spawner.maybe_spawn(now, &self.difficulty) {
            Some(target) => {
                self.targets.push(target);
                self.stats.spawned += 1;
                true
            }
            None => false,
        }
    }

    /// Drop targets that are both expired and clicked.
    /// Expired targets that were never clicked stay (and never count as misses).
    pub fn prune(&mut self, now: f64) {
        self.targets.retain(|t| !t.is_expired(now) || !t.is_clicked());
    }
}

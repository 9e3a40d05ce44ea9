//! Per-frame gameplay update
//!
//! Each tick runs, in order: input drain, spawn, prune. Drawing is a separate
//! read-only pass so the driver can skip it without affecting gameplay.

use glam::Vec2;

use super::clock::SessionClock;
use super::session::Session;
use super::spawner::Spawner;
use crate::consts::{HEIGHT, WIDTH};
use crate::difficulty::Difficulty;
use crate::platform::InputEvent;
use crate::renderer::{DrawList, TEXT_SCALE};
use crate::settings::Palette;

/// Gameplay state. `ReturnToMenu` and `Quit` end this loop instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Cancel key pressed; the session is discarded
    ReturnToMenu,
    /// Window closed; the program exits
    Quit,
}

const HUD_MARGIN: f32 = 20.0;
const HELP_TEXT: &str = "Press ESC to change difficulty";

#[derive(Debug, Clone)]
pub struct GameLoop {
    session: Session,
    state: LoopState,
}

impl GameLoop {
    /// Start a session at absolute time `started_at`
    pub fn new(difficulty: Difficulty, started_at: f64, seed: u64) -> Self {
        log::info!(
            "Starting {} (lifetime {:.2}s, interval {:.2}s, seed {})",
            difficulty.name,
            difficulty.target_lifetime_secs,
            difficulty.spawn_interval_secs,
            seed
        );
        Self::with_session(Session::new(
            difficulty,
            SessionClock::starting_at(started_at),
            Spawner::new(seed),
        ))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Advance one frame at absolute time `now`. Once the loop has left `Running`
    /// further ticks do nothing.
    pub fn tick<I>(&mut self, events: I, now: f64) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if self.state != LoopState::Running {
            return self.state;
        }

        let t = self.session.clock.elapsed(now);

        for event in events {
            match event {
                InputEvent::Quit => {
                    self.state = LoopState::Quit;
                    return self.state;
                }
                InputEvent::KeyDown(key) if key.is_cancel() => {
                    self.state = LoopState::ReturnToMenu;
                    return self.state;
                }
                InputEvent::KeyDown(_) => {}
                InputEvent::PointerDown(pos) => {
                    let delta = self.session.click(pos, t);
                    if delta != 0 {
                        log::debug!("Score {:+} -> {}", delta, self.session.score);
                    }
                }
            }
        }

        self.session.spawn(t);
        self.session.prune(t);

        self.state
    }

    /// Record this frame's drawing: targets, score and difficulty label, help line
    pub fn draw(&self, now: f64, palette: &Palette, out: &mut DrawList) {
        let t = self.session.clock.elapsed(now);

        out.clear(palette.background);
        for target in &self.session.targets {
            out.circle(target.pos, target.shrink_radius(t), target.color(palette));
        }

        let width = WIDTH as f32;
        let height = HEIGHT as f32;
        out.text(
            Vec2::new(HUD_MARGIN, HUD_MARGIN),
            &format!("Score: {}", self.session.score),
            palette.text,
            TEXT_SCALE,
        );
        out.text_right(
            width - HUD_MARGIN,
            HUD_MARGIN,
            &format!("Difficulty: {}", self.session.difficulty.name),
            palette.text,
            TEXT_SCALE,
        );
        out.text_centered(width / 2.0, height - 50.0, HELP_TEXT, palette.text, TEXT_SCALE);
    }

    /// One-line summary for the log
    pub fn summary(&self, now: f64) -> String {
        let s = &self.session;
        format!(
            "{}: score {}, {} hits, {} misses, {} spawned, {:.1}s",
            s.difficulty.name,
            s.score,
            s.stats.hits,
            s.stats.misses,
            s.stats.spawned,
            s.clock.elapsed(now)
        )
    }
}

//! Top-level state machine
//!
//! ```text
//! Menu --confirm--> Playing --Esc--> Menu
//!   \                  |
//!    +--Exit/close-----+--close--> Quit
//! ```
//!
//! `Quit` is the only terminal state. Each transition moves ownership: the
//! menu state is dropped when a session starts and the session is dropped
//! when the player returns to the menu.

use crate::consts::{GAME_FPS, MENU_FPS};
use crate::platform::InputEvent;
use crate::renderer::DrawList;
use crate::settings::Settings;
use crate::sim::{GameLoop, LoopState, MenuOutcome, MenuState};

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum AppState {
    Menu(MenuState),
    Playing(GameLoop),
    Quit,
}

pub struct App {
    settings: Settings,
    state: AppState,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let state = AppState::Menu(MenuState::new(settings.default_selection));
        Self { settings, state }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, AppState::Playing(_))
    }

    /// Frame rate the driver should pace the current screen at
    pub fn target_fps(&self) -> u32 {
        match self.state {
            AppState::Playing(_) => GAME_FPS,
            _ => MENU_FPS,
        }
    }

    /// Run one frame with this frame's events at absolute time `now`
    pub fn frame<I>(&mut self, events: I, now: f64) -> AppControl
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let next = match &mut self.state {
            AppState::Menu(menu) => match menu.tick(events, &self.settings.difficulties) {
                MenuOutcome::Choosing => None,
                MenuOutcome::Confirmed(difficulty) => {
                    let seed = self.settings.seed.unwrap_or_else(rand::random);
                    Some(AppState::Playing(GameLoop::new(difficulty, now, seed)))
                }
                MenuOutcome::Quit => {
                    log::info!("Exit selected");
                    Some(AppState::Quit)
                }
            },
            AppState::Playing(game) => match game.tick(events, now) {
                LoopState::Running => None,
                LoopState::ReturnToMenu => {
                    log::info!("Session ended: {}", game.summary(now));
                    Some(AppState::Menu(MenuState::new(self.settings.default_selection)))
                }
                LoopState::Quit => {
                    log::info!("Session ended: {}", game.summary(now));
                    Some(AppState::Quit)
                }
            },
            AppState::Quit => None,
        };

        if let Some(next) = next {
            self.state = next;
        }

        match self.state {
            AppState::Quit => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    /// Record the current screen into `out` (cleared first)
    pub fn draw(&self, now: f64, out: &mut DrawList) {
        out.reset();
        match &self.state {
            AppState::Menu(menu) => menu.draw(&self.settings.difficulties, &self.settings.palette, out),
            AppState::Playing(game) => game.draw(now, &self.settings.palette, out),
            AppState::Quit => {}
        }
    }
}

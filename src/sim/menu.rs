//! Difficulty selection menu

use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::consts::WIDTH;
use crate::platform::InputEvent;
use crate::renderer::{DrawList, TEXT_SCALE, TITLE_SCALE};
use crate::settings::Palette;

const TITLE: &str = "Select Difficulty";
const HELP_TEXT: &str = "Use UP/DOWN or W/S. Enter/Space to select.";
const TITLE_Y: f32 = 120.0;
const FIRST_ENTRY_Y: f32 = 240.0;
const ENTRY_SPACING: f32 = 70.0;
const HELP_Y: f32 = 500.0;

/// Result of a menu frame
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
    Choosing,
    /// A playable profile was confirmed
    Confirmed(Difficulty),
    /// Exit confirmed or window closed
    Quit,
}

/// Highlighted entry, cycling through the whole profile list (Exit included)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new(selected: usize) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Previous entry, wrapping to the last
    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Next entry, wrapping to the first
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Outcome of confirming the highlighted entry
    pub fn confirm(&self, profiles: &[DifficultyProfile]) -> MenuOutcome {
        match profiles.get(self.selected).and_then(DifficultyProfile::playable) {
            Some(difficulty) => MenuOutcome::Confirmed(difficulty),
            None => MenuOutcome::Quit,
        }
    }

    /// Process one frame of input
    pub fn tick<I>(&mut self, events: I, profiles: &[DifficultyProfile]) -> MenuOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Quit => return MenuOutcome::Quit,
                InputEvent::KeyDown(key) if key.is_up() => self.select_previous(profiles.len()),
                InputEvent::KeyDown(key) if key.is_down() => self.select_next(profiles.len()),
                InputEvent::KeyDown(key) if key.is_confirm() => return self.confirm(profiles),
                InputEvent::KeyDown(_) | InputEvent::PointerDown(_) => {}
            }
        }
        MenuOutcome::Choosing
    }

    /// Title, one line per profile (highlighted if selected), help line
    pub fn draw(&self, profiles: &[DifficultyProfile], palette: &Palette, out: &mut DrawList) {
        let center_x = WIDTH as f32 / 2.0;

        out.clear(palette.background);
        out.text_centered(center_x, TITLE_Y, TITLE, palette.selected, TITLE_SCALE);
        for (i, profile) in profiles.iter().enumerate() {
            let color = if i == self.selected {
                palette.selected
            } else {
                palette.text
            };
            let y = FIRST_ENTRY_Y + ENTRY_SPACING * i as f32;
            out.text_centered(center_x, y, &profile.name, color, TEXT_SCALE);
        }
        out.text_centered(center_x, HELP_Y, HELP_TEXT, palette.text, TEXT_SCALE);
    }
}

//! Platform abstraction layer
//!
//! The game only sees [`InputEvent`]s. The native window layer in
//! [`native`] translates winit events into them and queues them until the
//! next frame drains the queue.

pub mod native;

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Enter,
    Space,
    Escape,
}

impl Key {
    /// Previous menu entry
    pub fn is_up(self) -> bool {
        matches!(self, Key::Up | Key::W)
    }

    /// Next menu entry
    pub fn is_down(self) -> bool {
        matches!(self, Key::Down | Key::S)
    }

    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    /// Leave gameplay for the menu
    pub fn is_cancel(self) -> bool {
        self == Key::Escape
    }
}

/// A discrete input event, consumed once
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    /// Primary button pressed at a playfield position
    PointerDown(Vec2),
}

/// FIFO of input events between frames
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every queued event, leaving the queue empty
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

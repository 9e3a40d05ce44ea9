//! winit -> [`InputEvent`] translation

use glam::Vec2;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

use super::{InputEvent, Key};

/// Map a winit key code to a game key
pub fn map_key(code: VirtualKeyCode) -> Option<Key> {
    match code {
        VirtualKeyCode::Up => Some(Key::Up),
        VirtualKeyCode::Down => Some(Key::Down),
        VirtualKeyCode::W => Some(Key::W),
        VirtualKeyCode::S => Some(Key::S),
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Some(Key::Enter),
        VirtualKeyCode::Space => Some(Key::Space),
        VirtualKeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Tracks the cursor so button presses can carry a position
#[derive(Debug, Default)]
pub struct InputTranslator {
    /// Last cursor position in playfield coordinates, `None` while outside the playfield
    cursor: Option<Vec2>,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, playfield_pos: Option<Vec2>) {
        self.cursor = playfield_pos;
    }

    /// Pointer press at the last known cursor position
    pub fn pointer_down(&self) -> Option<InputEvent> {
        self.cursor.map(InputEvent::PointerDown)
    }

    /// Translate one window event. `to_playfield` maps physical window coordinates to
    /// playfield coordinates (and rejects positions outside it).
    pub fn translate<F>(&mut self, event: &WindowEvent<'_>, to_playfield: F) -> Option<InputEvent>
    where
        F: Fn(f32, f32) -> Option<Vec2>,
    {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(to_playfield(position.x as f32, position.y as f32));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_moved(None);
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.pointer_down(),
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(code),
                        ..
                    },
                ..
            } => map_key(*code).map(InputEvent::KeyDown),
            _ => None,
        }
    }
}

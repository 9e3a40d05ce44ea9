//! Rendering module
//!
//! Game code records a [`DrawList`] each frame; the native driver rasterizes it
//! into the window's RGBA framebuffer with [`raster::Rasterizer`]. Tests inspect
//! the draw list directly.

pub mod font;
pub mod raster;

use glam::Vec2;

pub use font::{TextBox, measure_text};
pub use raster::Rasterizer;

/// RGBA colour
pub type Color = [u8; 4];

/// Text scale used for regular labels
pub const TEXT_SCALE: u32 = 4;
/// Text scale used for the menu title
pub const TITLE_SCALE: u32 = 7;

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    /// Filled disc. Zero radius draws nothing.
    Circle { center: Vec2, radius: f32, color: Color },
    /// Text with its top-left corner at `pos`
    Text {
        pos: Vec2,
        text: String,
        color: Color,
        scale: u32,
    },
}

/// Ordered drawing operations for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: Color) {
        self.cmds.push(DrawCmd::Clear(color));
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius > 0.0 {
            self.cmds.push(DrawCmd::Circle {
                center,
                radius,
                color,
            });
        }
    }

    /// Draw text and return its box, for placement of what follows
    pub fn text(&mut self, pos: Vec2, text: &str, color: Color, scale: u32) -> TextBox {
        self.cmds.push(DrawCmd::Text {
            pos,
            text: text.to_string(),
            color,
            scale,
        });
        measure_text(text, scale)
    }

    /// Draw text horizontally centred on `center_x`
    pub fn text_centered(&mut self, center_x: f32, y: f32, text: &str, color: Color, scale: u32) -> TextBox {
        let size = measure_text(text, scale);
        let x = center_x - size.width as f32 / 2.0;
        self.text(Vec2::new(x, y), text, color, scale)
    }

    /// Draw text with its right edge at `right`
    pub fn text_right(&mut self, right: f32, y: f32, text: &str, color: Color, scale: u32) -> TextBox {
        let size = measure_text(text, scale);
        self.text(Vec2::new(right - size.width as f32, y), text, color, scale)
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Empty the list for the next frame, keeping its allocation
    pub fn reset(&mut self) {
        self.cmds.clear();
    }

    /// Every text string, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every circle, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

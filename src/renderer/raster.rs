//! CPU rasterizer for [`DrawList`]s into an RGBA8 framebuffer

use glam::Vec2;

use super::font::{GLYPH_W, advance_x, glyph};
use super::{Color, DrawCmd, DrawList};

/// Draws into a borrowed `width * height * 4` byte frame
pub struct Rasterizer<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Rasterizer<'a> {
    /// Returns `None` if `frame` is too small for the given size
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        let needed = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if frame.len() < needed {
            return None;
        }
        Some(Self {
            frame,
            width,
            height,
        })
    }

    /// Replay every command in order
    pub fn draw(&mut self, list: &DrawList) {
        for cmd in list.cmds() {
            match cmd {
                DrawCmd::Clear(color) => self.clear(*color),
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                } => self.fill_circle(*center, *radius, *color),
                DrawCmd::Text {
                    pos,
                    text,
                    color,
                    scale,
                } => self.draw_text(*pos, text, *color, *scale),
            }
        }
    }

    pub fn clear(&mut self, color: Color) {
        let len = self.width as usize * self.height as usize * 4;
        for px in self.frame[..len].chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Fill every pixel whose centre lies within `radius` of `center`
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }

        let min_x = (center.x - radius).floor().max(0.0) as u32;
        let min_y = (center.y - radius).floor().max(0.0) as u32;
        let max_x = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let max_y = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);
        let r2 = radius * radius;

        for y in min_y..max_y {
            let dy = y as f32 + 0.5 - center.y;
            for x in min_x..max_x {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    pub fn draw_text(&mut self, pos: Vec2, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        let mut cursor_x = pos.x.round() as i64;
        let y = pos.y.round() as i64;

        for ch in text.chars() {
            if cursor_x >= self.width as i64 {
                break;
            }
            self.draw_glyph(cursor_x, y, ch, color, scale);
            cursor_x += advance_x(scale) as i64;
        }
    }

    fn draw_glyph(&mut self, x: i64, y: i64, ch: char, color: Color, scale: u32) {
        let rows = glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if *bits & (1u8 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                let px0 = x + (col * scale) as i64;
                let py0 = y + (row as u32 * scale) as i64;
                for dy in 0..scale as i64 {
                    for dx in 0..scale as i64 {
                        self.set_pixel_signed(px0 + dx, py0 + dy, color);
                    }
                }
            }
        }
    }

    fn set_pixel_signed(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel(x as u32, y as u32, color);
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.frame[idx..idx + 4].copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = [0, 0, 0, 255];
    const RED: Color = [255, 0, 0, 255];

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> Color {
        let idx = ((y * width + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn test_rejects_short_frame() {
        let mut frame = vec![0u8; 10];
        assert!(Rasterizer::new(&mut frame, 4, 4).is_none());
    }

    #[test]
    fn test_circle_covers_centre_not_corner() {
        let mut frame = vec![0u8; 32 * 32 * 4];
        let mut r = Rasterizer::new(&mut frame, 32, 32).unwrap();
        r.clear(BLACK);
        r.fill_circle(Vec2::new(16.0, 16.0), 8.0, RED);
        assert_eq!(pixel(&frame, 32, 16, 16), RED);
        assert_eq!(pixel(&frame, 32, 16, 9), RED);
        assert_eq!(pixel(&frame, 32, 0, 0), BLACK);
        assert_eq!(pixel(&frame, 32, 16, 4), BLACK);
    }

    #[test]
    fn test_circle_clipped_at_edges() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        let mut r = Rasterizer::new(&mut frame, 16, 16).unwrap();
        r.fill_circle(Vec2::new(0.0, 0.0), 40.0, RED);
        assert_eq!(pixel(&frame, 16, 15, 15), RED);
    }

    #[test]
    fn test_text_draws_pixels() {
        let mut frame = vec![0u8; 32 * 16 * 4];
        let mut r = Rasterizer::new(&mut frame, 32, 16).unwrap();
        r.clear(BLACK);
        // 'I' top row is solid
        r.draw_text(Vec2::new(2.0, 2.0), "I", RED, 2);
        assert_eq!(pixel(&frame, 32, 2, 2), RED);
        assert_eq!(pixel(&frame, 32, 7, 3), RED);
        assert_eq!(pixel(&frame, 32, 20, 2), BLACK);
    }

    #[test]
    fn test_draw_replays_list() {
        let mut list = DrawList::new();
        list.clear(BLACK);
        list.circle(Vec2::new(8.0, 8.0), 4.0, RED);
        let mut frame = vec![0u8; 16 * 16 * 4];
        Rasterizer::new(&mut frame, 16, 16).unwrap().draw(&list);
        assert_eq!(pixel(&frame, 16, 8, 8), RED);
        assert_eq!(pixel(&frame, 16, 0, 15), BLACK);
    }
}

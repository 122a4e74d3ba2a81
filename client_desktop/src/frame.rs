//! CPU side of a frame
//!
//! [`Frame`] implements the core's [`Canvas`] by collecting quad instances
//! that the renderer uploads and draws in one call.

use crate::font;
use crate::renderer::resources::InstanceData;
use game_core::{Canvas, Color, Rect};
use glam::Vec2;

/// Playfield units per font cell
pub const TEXT_CELL: f32 = 2.0;

/// Thickness of lines in playfield units
pub const LINE_WIDTH: f32 = 2.0;

pub struct Frame {
    clear: [f32; 4],
    instances: Vec<InstanceData>,
    text_cell: f32,
}

impl Frame {
    pub fn new(text_cell: f32) -> Self {
        Self {
            clear: linear_rgba(Color::BLACK),
            instances: Vec::new(),
            text_cell,
        }
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(TEXT_CELL)
    }
}

impl Canvas for Frame {
    fn clear(&mut self, color: Color) {
        self.clear = linear_rgba(color);
        self.instances.clear();
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.instances
            .push(InstanceData::rect(rect, linear_rgba(color)));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let delta = to - from;
        let length = delta.length();
        if length <= f32::EPSILON {
            return;
        }
        let center = (from + to) / 2.0;
        let dir = delta / length;
        self.instances.push(InstanceData {
            transform: [center.x, center.y, length, LINE_WIDTH],
            rotation: [dir.x, dir.y, 0.0, 0.0],
            tint: linear_rgba(color),
        });
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        font::text_size(text, self.text_cell)
    }

    fn draw_text(
        &mut self,
        text: &str,
        top_left: Vec2,
        color: Color,
        background: Option<Color>,
    ) -> Vec2 {
        let size = self.measure_text(text);
        if let Some(background) = background {
            self.draw_rect(Rect::from_pos_size(top_left, size), background);
        }
        let tint = linear_rgba(color);
        self.instances.extend(
            font::layout(text, top_left, self.text_cell)
                .into_iter()
                .map(|cell| InstanceData::rect(cell, tint)),
        );
        size
    }
}

/// 8-bit sRGB to linear RGBA, for sRGB render targets
pub fn linear_rgba(color: Color) -> [f32; 4] {
    [
        srgb_to_linear(color.r),
        srgb_to_linear(color.g),
        srgb_to_linear(color.b),
        1.0,
    ]
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = f32::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{draw_match, Config, Match};

    #[test]
    fn test_linear_colors() {
        assert_eq!(linear_rgba(Color::WHITE), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(linear_rgba(Color::BLACK), [0.0, 0.0, 0.0, 1.0]);

        let [r, ..] = linear_rgba(Color::rgb(128, 0, 0));
        assert!((r - 0.2158).abs() < 1e-3, "Mid grey is darker in linear space");
    }

    #[test]
    fn test_clear_resets_instances() {
        let mut frame = Frame::default();
        frame.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        frame.clear(Color::WHITE);

        assert!(frame.instances().is_empty());
        assert_eq!(frame.clear_color(), [1.0; 4]);
    }

    #[test]
    fn test_vertical_line_is_rotated_quad() {
        let mut frame = Frame::default();
        frame.draw_line(Vec2::new(150.0, 0.0), Vec2::new(150.0, 10.0), Color::WHITE);

        let line = frame.instances()[0];
        assert_eq!(line.transform, [150.0, 5.0, 10.0, LINE_WIDTH]);
        assert_eq!(line.rotation, [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_line_skipped() {
        let mut frame = Frame::default();
        frame.draw_line(Vec2::ONE, Vec2::ONE, Color::WHITE);
        assert!(frame.instances().is_empty());
    }

    #[test]
    fn test_text_with_background() {
        let mut frame = Frame::new(1.0);
        let size = frame.draw_text("1", Vec2::new(10.0, 10.0), Color::WHITE, Some(Color::BLACK));

        assert_eq!(size, Vec2::new(3.0, 5.0));
        let instances = frame.instances();
        assert_eq!(instances[0].transform, [11.5, 12.5, 3.0, 5.0], "Background box first");
        assert_eq!(instances[0].tint, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(instances.len(), 1 + 8, "Box plus the lit cells of '1'");
    }

    #[test]
    fn test_match_frame_fills_instances() {
        let game = Match::new(Config::new());
        let mut frame = Frame::default();
        draw_match(&game, &mut frame);

        // 15 net dashes, 2 paddles, ball, and two "0" glyphs of 12 cells each
        assert_eq!(frame.instances().len(), 15 + 3 + 24);
    }
}

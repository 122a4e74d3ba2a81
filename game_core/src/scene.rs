//! Frame composition
//!
//! [`draw_match`] turns a [`Match`] into drawing calls against a [`Canvas`].
//! The canvas is whatever the frontend draws with; the core never touches a
//! window or GPU.

use crate::{Color, Match, Phase, Rect};
use glam::Vec2;

/// Drawing surface in playfield units, origin top-left, y down
pub trait Canvas {
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Size the text would occupy if drawn
    fn measure_text(&self, text: &str) -> Vec2;

    /// Draw `text` with its top-left corner at `top_left`, optionally on a
    /// filled background box. Returns the drawn size.
    fn draw_text(
        &mut self,
        text: &str,
        top_left: Vec2,
        color: Color,
        background: Option<Color>,
    ) -> Vec2;
}

const SCORE_Y: f32 = 10.0;
const GAME_OVER_OFFSET: f32 = 20.0;
const PAUSED_OFFSET: f32 = 10.0;
const RESTART_TEXT_PADDING: f32 = 5.0;

pub fn draw_match<C: Canvas + ?Sized>(game: &Match, canvas: &mut C) {
    let config = game.config();
    let (width, height) = (config.playfield_width, config.playfield_height);
    let fg = config.foreground;
    let bg = config.background;

    canvas.clear(bg);
    draw_net(canvas, width, height, config.net_dash, fg);

    canvas.draw_rect(game.player_paddle().rect, fg);
    canvas.draw_rect(game.computer_paddle().rect, fg);
    canvas.draw_rect(game.ball().rect, fg);

    let score = game.score();
    draw_centered(canvas, &score.player.to_string(), width / 4.0, SCORE_Y, fg, None);
    draw_centered(
        canvas,
        &score.computer.to_string(),
        width * 3.0 / 4.0,
        SCORE_Y,
        fg,
        None,
    );

    match game.phase() {
        Phase::GameOver => {
            let message = format!(
                "GAME OVER! Player: {} Computer: {}",
                score.player, score.computer
            );
            draw_centered(
                canvas,
                &message,
                width / 2.0,
                height / 2.0 - GAME_OVER_OFFSET,
                fg,
                Some(bg),
            );

            let region = config.restart_region;
            canvas.draw_rect(region, bg);
            draw_centered(
                canvas,
                "Press to restart",
                region.center().x,
                region.top() + RESTART_TEXT_PADDING,
                fg,
                Some(bg),
            );
        }
        Phase::Paused => {
            draw_centered(
                canvas,
                "PAUSED",
                width / 2.0,
                height / 2.0 - PAUSED_OFFSET,
                fg,
                Some(bg),
            );
        }
        Phase::Playing => {}
    }
}

/// Dashed vertical line down the middle, dash and gap both `dash` long
fn draw_net<C: Canvas + ?Sized>(canvas: &mut C, width: f32, height: f32, dash: f32, color: Color) {
    if dash <= 0.0 {
        return;
    }
    let x = width / 2.0;
    let mut y = 0.0;
    while y < height {
        let end = (y + dash).min(height);
        canvas.draw_line(Vec2::new(x, y), Vec2::new(x, end), color);
        y += dash * 2.0;
    }
}

fn draw_centered<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    center_x: f32,
    top: f32,
    color: Color,
    background: Option<Color>,
) {
    let size = canvas.measure_text(text);
    canvas.draw_text(
        text,
        Vec2::new(center_x - size.x / 2.0, top),
        color,
        background,
    );
}

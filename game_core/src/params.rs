use crate::color::Color;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 300.0;
    pub const PLAYFIELD_HEIGHT: f32 = 300.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_INSET: f32 = 5.0; // gap between paddle and side wall
    pub const PADDLE_SPEED: f32 = 5.0; // units per tick
    pub const AI_STEP: f32 = 2.0; // slower than the player on purpose

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 2.0; // units per tick, per axis

    // Score
    pub const WINNING_SCORE: u32 = 50;

    // Pacing
    pub const FRAME_RATE: u32 = 60;
    pub const MAX_CATCH_UP_TICKS: u32 = 5;

    // Overlay
    pub const RESTART_REGION: [f32; 4] = [70.0, 150.0, 100.0, 20.0];
    pub const NET_DASH: f32 = 10.0;

    // Colors
    pub const FOREGROUND: Color = Color::WHITE;
    pub const BACKGROUND: Color = Color::BLACK;
}

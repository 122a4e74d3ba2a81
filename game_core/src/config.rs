use crate::color::Color;
use crate::geometry::Rect;
use crate::params::Params;
use crate::resources::Side;
use glam::Vec2;
use thiserror::Error;

/// Reasons a [`Config`] cannot describe a playable match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("winning score must be at least 1")]
    ZeroWinningScore,

    #[error("frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("paddle height {paddle} does not fit in playfield height {playfield}")]
    PaddleTooTall { paddle: f32, playfield: f32 },

    #[error("paddles need {needed} units of width, playfield is {playfield}")]
    PaddlesOverlap { needed: f32, playfield: f32 },

    #[error("ball size {ball} does not fit in a {width}x{height} playfield")]
    BallTooLarge { ball: f32, width: f32, height: f32 },
}

/// Match configuration
///
/// Immutable once handed to [`crate::Match::new`]. All distances are in
/// playfield units, all speeds in units per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ai_step: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub winning_score: u32,
    pub frame_rate: u32,
    pub restart_region: Rect,
    pub net_dash: f32,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Config {
    fn default() -> Self {
        let [x, y, w, h] = Params::RESTART_REGION;
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_step: Params::AI_STEP,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            winning_score: Params::WINNING_SCORE,
            frame_rate: Params::FRAME_RATE,
            restart_region: Rect::new(x, y, w, h),
            net_dash: Params::NET_DASH,
            foreground: Params::FOREGROUND,
            background: Params::BACKGROUND,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playfield(mut self, width: f32, height: f32) -> Self {
        self.playfield_width = width;
        self.playfield_height = height;
        self
    }

    pub fn with_paddle_size(mut self, width: f32, height: f32) -> Self {
        self.paddle_width = width;
        self.paddle_height = height;
        self
    }

    pub fn with_paddle_speeds(mut self, player: f32, ai: f32) -> Self {
        self.paddle_speed = player;
        self.ai_step = ai;
        self
    }

    pub fn with_ball(mut self, size: f32, speed: f32) -> Self {
        self.ball_size = size;
        self.ball_speed = speed;
        self
    }

    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    pub fn with_restart_region(mut self, region: Rect) -> Self {
        self.restart_region = region;
        self
    }

    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.playfield_width, self.playfield_height)
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Computer => self.playfield_width - self.paddle_width - self.paddle_inset,
        }
    }

    /// Paddle rectangle at match start, vertically centered
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        Rect::new(
            self.paddle_x(side),
            self.playfield_height / 2.0 - self.paddle_height / 2.0,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Ball rectangle centered in the playfield
    pub fn ball_spawn(&self) -> Rect {
        Rect::new(
            self.playfield_width / 2.0 - self.ball_size / 2.0,
            self.playfield_height / 2.0 - self.ball_size / 2.0,
            self.ball_size,
            self.ball_size,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("playfield width", self.playfield_width),
            ("playfield height", self.playfield_height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("paddle speed", self.paddle_speed),
            ("ai step", self.ai_step),
            ("ball size", self.ball_size),
            ("ball speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.paddle_inset < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paddle inset",
                value: self.paddle_inset,
            });
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                playfield: self.playfield_height,
            });
        }
        let needed = 2.0 * (self.paddle_inset + self.paddle_width);
        if needed >= self.playfield_width {
            return Err(ConfigError::PaddlesOverlap {
                needed,
                playfield: self.playfield_width,
            });
        }
        if self.ball_size >= self.playfield_width || self.ball_size >= self.playfield_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 5.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Computer), 285.0, "Right paddle X position");
    }

    #[test]
    fn test_config_spawns_are_centered() {
        let config = Config::new().with_playfield(600.0, 300.0).with_paddle_size(10.0, 60.0);
        assert_eq!(config.paddle_spawn(Side::Player).top(), 120.0);
        assert_eq!(config.paddle_spawn(Side::Computer).left(), 585.0);
        assert_eq!(config.ball_spawn().pos, Vec2::new(295.0, 145.0));
    }

    #[test]
    fn test_validate_rejects_non_positive_sizes() {
        let config = Config::new().with_ball(0.0, 2.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "ball size",
                value: 0.0
            })
        );

        let config = Config::new().with_paddle_speeds(5.0, f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "ai step", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unplayable_layouts() {
        let tall = Config::new().with_paddle_size(10.0, 400.0);
        assert!(matches!(tall.validate(), Err(ConfigError::PaddleTooTall { .. })));

        let narrow = Config::new().with_playfield(30.0, 300.0);
        assert!(matches!(narrow.validate(), Err(ConfigError::PaddlesOverlap { .. })));

        let big_ball = Config::new().with_ball(300.0, 2.0);
        assert!(matches!(big_ball.validate(), Err(ConfigError::BallTooLarge { .. })));

        assert_eq!(
            Config::new().with_winning_score(0).validate(),
            Err(ConfigError::ZeroWinningScore)
        );
    }
}

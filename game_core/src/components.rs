use crate::geometry::Rect;
use glam::{IVec2, Vec2};

/// Paddle body shared by both controller kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn y(&self) -> f32 {
        self.rect.top()
    }

    /// Move vertically by `dy`, then clamp into `0..=playfield_height - height`
    pub fn shift(&mut self, dy: f32, playfield_height: f32) {
        let max_y = (playfield_height - self.rect.size.y).max(0.0);
        self.rect.pos.y = (self.rect.pos.y + dy).clamp(0.0, max_y);
    }

    /// Put the paddle back at the vertical center of the playfield
    pub fn recenter(&mut self, playfield_height: f32) {
        self.rect.pos.y = playfield_height / 2.0 - self.rect.size.y / 2.0;
    }
}

/// Player-driven paddle controller: holds the latest input direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanPaddle {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl HumanPaddle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steer(&self, paddle: &mut Paddle, speed: f32, playfield_height: f32) {
        paddle.shift(self.dir as f32 * speed, playfield_height);
    }
}

/// Computer paddle controller: chases the ball's center line by a fixed step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiPaddle {
    pub step: f32,
}

impl AiPaddle {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    pub fn follow(&self, paddle: &mut Paddle, ball: &Rect, playfield_height: f32) {
        let paddle_y = paddle.rect.center_y();
        let ball_y = ball.center_y();
        let dy = if paddle_y < ball_y {
            self.step
        } else if paddle_y > ball_y {
            -self.step
        } else {
            0.0
        };
        paddle.shift(dy, playfield_height);
    }
}

/// Which walls the ball bounced off during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub horizontal: bool, // top or bottom wall, `dir.y` flipped
    pub vertical: bool,   // left or right wall, `dir.x` flipped
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Ball component
///
/// `dir` components are always exactly -1 or +1; the ball moves diagonally at
/// `speed` units per axis per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub dir: IVec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(rect: Rect, dir: IVec2, speed: f32) -> Self {
        Self {
            rect,
            dir: unit_signs(dir),
            speed,
        }
    }

    /// Move one tick and bounce off the playfield walls.
    ///
    /// The two wall checks are independent; in a corner both components flip.
    pub fn advance(&mut self, playfield: Vec2) -> Bounce {
        self.rect.translate(self.dir.as_vec2() * self.speed);

        let mut bounce = Bounce::default();
        if self.rect.top() <= 0.0 || self.rect.bottom() >= playfield.y {
            self.dir.y = -self.dir.y;
            bounce.horizontal = true;
        }
        if self.rect.left() <= 0.0 || self.rect.right() >= playfield.x {
            self.dir.x = -self.dir.x;
            bounce.vertical = true;
        }
        bounce
    }

    /// Reflect off a paddle. Returns true if the ball was touching it.
    ///
    /// After the flip the ball is pushed fully outside the paddle on the side
    /// it now travels toward, so the next tick cannot collide again.
    pub fn resolve_paddle_collision(&mut self, paddle: &Rect) -> bool {
        if !self.rect.intersects(paddle) {
            return false;
        }
        self.dir.x = -self.dir.x;
        if self.dir.x > 0 {
            self.rect.set_left(paddle.right());
        } else {
            self.rect.set_right(paddle.left());
        }
        true
    }

    /// Re-serve from the center of the playfield, keeping the direction signs
    pub fn reset_to_center(&mut self, playfield: Vec2) {
        self.rect.pos = playfield / 2.0 - self.rect.size / 2.0;
        self.dir = unit_signs(self.dir);
    }
}

/// +1 for positive components, -1 for everything else
fn unit_signs(dir: IVec2) -> IVec2 {
    IVec2::new(
        if dir.x > 0 { 1 } else { -1 },
        if dir.y > 0 { 1 } else { -1 },
    )
}

pub mod color;
pub mod components;
pub mod config;
pub mod driver;
pub mod game;
pub mod geometry;
pub mod input;
pub mod params;
pub mod phase;
pub mod resources;
pub mod scene;
pub mod systems;

pub use color::*;
pub use components::*;
pub use config::*;
pub use driver::*;
pub use game::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use phase::*;
pub use resources::*;
pub use scene::*;

use glam::IVec2;
use hecs::{Entity, World};
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddles follow their stored input direction
    steer_paddles(world, config);

    // 2. AI paddles chase the ball's pre-move position
    track_ball(world, config);

    // 3. Move ball, bouncing off walls
    move_ball(world, config, events);

    // 4. Ball vs paddles
    check_collisions(world, events);

    // 5. Ball reached a side wall
    check_scoring(world, config, score, events);
}

/// Helper to create both paddle entities, returns `(player, computer)`
pub fn create_paddles(world: &mut World, config: &Config) -> (Entity, Entity) {
    let player = world.spawn((
        Paddle::new(config.paddle_spawn(Side::Player)),
        HumanPaddle::new(),
    ));
    let computer = world.spawn((
        Paddle::new(config.paddle_spawn(Side::Computer)),
        AiPaddle::new(config.ai_step),
    ));
    (player, computer)
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, dir: IVec2, speed: f32) -> Entity {
    world.spawn((Ball::new(rect, dir, speed),))
}

use crate::{AiPaddle, Ball, Config, Events, HumanPaddle, Paddle};
use hecs::World;

/// Apply stored input directions to player paddles
pub fn steer_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, human)) in world.query_mut::<(&mut Paddle, &HumanPaddle)>() {
        human.steer(paddle, config.paddle_speed, config.playfield_height);
    }
}

/// Let AI paddles chase the ball's current position
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_rect = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.rect)
    };

    let Some(ball_rect) = ball_rect else {
        return; // No ball in world
    };

    for (_entity, (paddle, ai)) in world.query_mut::<(&mut Paddle, &AiPaddle)>() {
        ai.follow(paddle, &ball_rect, config.playfield_height);
    }
}

/// Move ball one tick, bouncing off walls
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    let playfield = config.playfield();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(playfield).any() {
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddles, Rect, Side};
    use glam::{IVec2, Vec2};

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_steer_moves_only_human_paddle() {
        let (mut world, config, _events) = setup_world();
        let (player, computer) = create_paddles(&mut world, &config);
        world.get::<&mut HumanPaddle>(player).unwrap().dir = 1;

        steer_paddles(&mut world, &config);

        let player_y = world.get::<&Paddle>(player).unwrap().y();
        let computer_y = world.get::<&Paddle>(computer).unwrap().y();
        assert_eq!(player_y, config.paddle_spawn(Side::Player).top() + config.paddle_speed);
        assert_eq!(
            computer_y,
            config.paddle_spawn(Side::Computer).top(),
            "AI paddle ignores player input"
        );
    }

    #[test]
    fn test_track_ball_moves_only_ai_paddle() {
        let (mut world, config, _events) = setup_world();
        let (player, computer) = create_paddles(&mut world, &config);
        create_ball(&mut world, Rect::new(150.0, 10.0, 10.0, 10.0), IVec2::ONE, 2.0);

        track_ball(&mut world, &config);

        let player_y = world.get::<&Paddle>(player).unwrap().y();
        let computer_y = world.get::<&Paddle>(computer).unwrap().y();
        assert_eq!(player_y, config.paddle_spawn(Side::Player).top());
        assert_eq!(
            computer_y,
            config.paddle_spawn(Side::Computer).top() - config.ai_step,
            "AI paddle steps up toward the ball"
        );
    }

    #[test]
    fn test_track_ball_without_ball() {
        let (mut world, config, _events) = setup_world();
        let (_player, computer) = create_paddles(&mut world, &config);

        // Should not panic
        track_ball(&mut world, &config);

        let computer_y = world.get::<&Paddle>(computer).unwrap().y();
        assert_eq!(computer_y, config.paddle_spawn(Side::Computer).top());
    }

    #[test]
    fn test_move_ball_reports_wall_hit() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Rect::new(150.0, 1.0, 10.0, 10.0), IVec2::new(1, -1), 2.0);

        move_ball(&mut world, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.rect.pos, Vec2::new(152.0, -1.0));
            assert_eq!(ball.dir, IVec2::new(1, 1), "Ball should bounce down");
        }
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }
}

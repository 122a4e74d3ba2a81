use crate::{AiPaddle, Ball, Events, HumanPaddle, Paddle, Rect};
use hecs::World;

/// Check ball collisions with paddles.
///
/// Player paddles are resolved before AI paddles so the outcome does not
/// depend on entity iteration order.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rects without holding borrows
    let human: Vec<Rect> = world
        .query::<(&Paddle, &HumanPaddle)>()
        .iter()
        .map(|(_e, (paddle, _))| paddle.rect)
        .collect();
    let ai: Vec<Rect> = world
        .query::<(&Paddle, &AiPaddle)>()
        .iter()
        .map(|(_e, (paddle, _))| paddle.rect)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in human.iter().chain(ai.iter()) {
            if ball.resolve_paddle_collision(paddle) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

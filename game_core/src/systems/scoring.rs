use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball reached a side wall (scoring)
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let playfield = config.playfield();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.rect.left() <= 0.0 {
            Some(Side::Computer)
        } else if ball.rect.right() >= playfield.x {
            Some(Side::Player)
        } else {
            None
        };

        if let Some(side) = scorer {
            score.increment(side);
            match side {
                Side::Player => events.player_scored = true,
                Side::Computer => events.computer_scored = true,
            }
            ball.reset_to_center(playfield);
        }
    }
}

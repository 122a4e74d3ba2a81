//! Match controller
//!
//! Owns the world (both paddles and the ball), the score and the phase, and
//! is the only place where input, simulation and phase changes meet.

use crate::input::{handle_key_down, handle_key_up, InputEvent, Key, LoopControl};
use crate::phase::{Phase, PhaseAction};
use crate::{create_ball, create_paddles, step, Ball, Config, Events, HumanPaddle, Paddle, Score};
use glam::{IVec2, Vec2};
use hecs::{Component, Entity, World};
use log::{debug, info, trace};

pub struct Match {
    config: Config,
    world: World,
    player: Entity,
    computer: Entity,
    ball: Entity,
    score: Score,
    phase: Phase,
    events: Events,
    tick: u64,
}

impl Match {
    /// Start a new match. `config` is expected to pass [`Config::validate`].
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let (player, computer) = create_paddles(&mut world, &config);
        let ball = create_ball(
            &mut world,
            config.ball_spawn(),
            IVec2::ONE,
            config.ball_speed,
        );

        Self {
            config,
            world,
            player,
            computer,
            ball,
            score: Score::new(),
            phase: Phase::Playing,
            events: Events::new(),
            tick: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events recorded by the most recent simulated tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of ticks simulated since the match (or last restart) began
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn player_paddle(&self) -> Paddle {
        self.component(self.player)
    }

    pub fn computer_paddle(&self) -> Paddle {
        self.component(self.computer)
    }

    pub fn ball(&self) -> Ball {
        self.component(self.ball)
    }

    pub fn player_direction(&self) -> i8 {
        self.component::<HumanPaddle>(self.player).dir
    }

    pub fn set_player_direction(&mut self, dir: i8) {
        if let Ok(mut human) = self.world.get::<&mut HumanPaddle>(self.player) {
            human.dir = dir.signum();
        }
    }

    /// Move the ball to `pos` (top-left corner) heading along `dir`
    pub fn place_ball(&mut self, pos: Vec2, dir: IVec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            *ball = Ball::new(ball.rect, dir, ball.speed);
            ball.rect.pos = pos;
        }
    }

    /// Flip between Playing and Paused. Returns false if the phase ignores it.
    pub fn toggle_pause(&mut self) -> bool {
        let result = self.phase.transition(PhaseAction::TogglePause);
        if result.success {
            info!(target: "match", "{:?} -> {:?}", result.from, result.to);
        }
        result.success
    }

    /// Pointer press in playfield coordinates. Restarts the match when it is
    /// over and the press lands in the restart region.
    pub fn press_pointer(&mut self, pos: Vec2) -> bool {
        self.phase == Phase::GameOver && self.config.restart_region.contains(pos) && self.restart()
    }

    /// Zero the score, recenter paddles and ball, resume play. Only a
    /// finished or paused match restarts; returns false otherwise.
    pub fn restart(&mut self) -> bool {
        let result = self.phase.transition(PhaseAction::Restart);
        if !result.success {
            return false;
        }

        let playfield = self.config.playfield();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.recenter(playfield.y);
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset_to_center(playfield);
        }
        self.score = Score::new();
        self.events.clear();
        self.tick = 0;
        info!(
            target: "match",
            "{:?} -> {:?} ({:?})",
            result.from,
            result.to,
            result.action
        );
        true
    }

    pub fn handle_event(&mut self, event: InputEvent) -> LoopControl {
        match event {
            InputEvent::Quit => return LoopControl::Quit,
            InputEvent::KeyDown(Key::Pause) => {
                self.toggle_pause();
            }
            InputEvent::KeyDown(key) => {
                let dir = handle_key_down(key, self.player_direction());
                self.set_player_direction(dir);
            }
            InputEvent::KeyUp(key) => {
                let dir = handle_key_up(key, self.player_direction());
                self.set_player_direction(dir);
            }
            InputEvent::PointerDown(pos) => {
                self.press_pointer(pos);
            }
        }
        LoopControl::Continue
    }

    /// Apply a whole batch of events. Stops at the first quit.
    pub fn handle_events<I>(&mut self, events: I) -> LoopControl
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(event) == LoopControl::Quit {
                return LoopControl::Quit;
            }
        }
        LoopControl::Continue
    }

    /// Advance the simulation by one tick. Returns false (and changes
    /// nothing) unless the match is playing.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_playing() {
            return false;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
        );
        self.tick += 1;

        if self.events.ball_hit_paddle || self.events.ball_hit_wall {
            trace!(target: "match", "tick {}: {:?}", self.tick, self.events);
        }
        if let Some(side) = self.events.scored() {
            debug!(
                target: "match",
                "{:?} scored ({} - {})",
                side,
                self.score.player,
                self.score.computer
            );
        }
        if let Some(winner) = self.score.has_winner(self.config.winning_score) {
            self.phase.transition(PhaseAction::ReachWinningScore);
            info!(
                target: "match",
                "Game over, {:?} wins {} - {}",
                winner,
                self.score.player,
                self.score.computer
            );
        }
        true
    }

    /// Run up to `ticks` ticks; returns how many actually simulated
    pub fn run_ticks(&mut self, ticks: u32) -> u32 {
        let mut simulated = 0;
        for _ in 0..ticks {
            if !self.tick() {
                break;
            }
            simulated += 1;
        }
        simulated
    }

    fn component<T: Component + Copy>(&self, entity: Entity) -> T {
        *self
            .world
            .get::<&T>(entity)
            .expect("match entities are never despawned")
    }
}

//! Window and event loop glue
//!
//! Collects input between frames, feeds it to the match at each frame
//! boundary, advances the simulation by the ticks the fixed timestep
//! hands out, then draws.

use crate::clock::FrameClock;
use crate::error::ClientError;
use crate::frame::Frame;
use crate::input::{map_key, pointer_press, to_playfield};
use crate::renderer::Renderer;
use game_core::{draw_match, Config, FixedTimestep, InputEvent, LoopControl, Match};
use glam::Vec2;
use log::{debug, error, info, trace};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

/// Window pixels per playfield unit
pub const WINDOW_SCALE: f32 = 2.0;

pub struct App {
    game: Match,
    timestep: FixedTimestep,
    clock: Option<FrameClock>,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    pending: Vec<InputEvent>,
    cursor: Option<Vec2>,
    error: Option<ClientError>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let timestep = FixedTimestep::from_rate(config.frame_rate);
        Self {
            game: Match::new(config),
            timestep,
            clock: None,
            window: None,
            renderer: None,
            pending: Vec::new(),
            cursor: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let playfield = self.game.config().playfield();
        let attrs = Window::default_attributes()
            .with_title("PONG")
            .with_inner_size(LogicalSize::new(
                playfield.x * WINDOW_SCALE,
                playfield.y * WINDOW_SCALE,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(attrs)?);
        info!(
            target: "app",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), playfield))?;

        let clock = FrameClock::new(self.game.config().frame_rate, Instant::now());
        debug!(target: "app", "Frame interval {:?}", clock.interval());

        window.request_redraw();
        self.clock = Some(clock);
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        error!(target: "app", "{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(clock) = self.clock.as_mut() else {
            return;
        };
        let elapsed = clock.begin_frame(Instant::now());

        if self.game.handle_events(self.pending.drain(..)) == LoopControl::Quit {
            info!(target: "app", "Quit requested");
            event_loop.exit();
            return;
        }

        let ticks = self.timestep.advance(elapsed);
        let simulated = self.game.run_ticks(ticks);
        trace!(target: "app", "Frame: {} of {} ticks simulated", simulated, ticks);

        let mut frame = Frame::default();
        draw_match(&self.game, &mut frame);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(err) = renderer.render(&frame) {
            self.fail(event_loop, err);
        }
    }

    /// Drop time banked while the window was hidden
    fn resync(&mut self) {
        if let Some(clock) = self.clock.as_mut() {
            clock.reset(Instant::now());
        }
        self.timestep.reset();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "app", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::Occluded(false) => self.resync(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(input) = map_key(code, event.state) {
                        self.pending.push(input);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let playfield = self.game.config().playfield();
                    if let Some(pos) = to_playfield(position, window.inner_size(), playfield) {
                        self.cursor = Some(pos);
                    }
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(press) = pointer_press(self.cursor) {
                    self.pending.push(press);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(clock), Some(window)) = (&self.clock, &self.window) else {
            return;
        };
        if clock.is_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(clock.deadline()));
    }
}

mod app;
mod camera;
mod clock;
mod error;
mod font;
mod frame;
mod input;
mod mesh;
mod renderer;

use anyhow::Context;
use app::App;
use error::ClientError;
use game_core::Config;
use log::info;
use winit::event_loop::EventLoop;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::new();
    config.validate().context("invalid match configuration")?;
    info!(
        "Starting PONG: {}x{} playfield, first to {}",
        config.playfield_width, config.playfield_height, config.winning_score
    );

    let event_loop = EventLoop::new().map_err(ClientError::from)?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).map_err(ClientError::from)?;

    if let Some(err) = app.take_error() {
        return Err(err).context("pong stopped");
    }
    info!("Goodbye");
    Ok(())
}

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use virion::app::App;
use virion::build_info;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    info!(build = %build_info::version_string(), "Virion starting");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::from_env();
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")?;

    Ok(())
}

//! Console rendition: prints each generation as text.

use std::path::PathBuf;

use gridlife::{
    PatternLibrary, Result, SimulationConfig,
    application::build_engine,
    config::CONSOLE_ITERATIONS,
    rendering::TextRenderer,
    telemetry,
};
use tracing::{error, info};

fn main() {
    telemetry::init_tracing();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = SimulationConfig::load(std::env::args().nth(1).map(PathBuf::from))?;
    let library = PatternLibrary::standard()?;
    let mut engine = build_engine(&config, &library)?;

    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::from_config(stdout.lock(), &config);
    renderer.render_frame(engine.grid())?;

    let iterations = config.iterations_or(CONSOLE_ITERATIONS);
    let shown = renderer.play(engine.produce_sequence(iterations))?;
    info!(generations = shown, "simulation complete");
    Ok(())
}

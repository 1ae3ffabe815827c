use std::path::PathBuf;

use gridlife::{
    Animation, PatternLibrary, Result, SimulationConfig,
    application::build_engine,
    config::WINDOW_ITERATIONS,
    rendering::window::{self, CellLayout},
    telemetry,
};
use macroquad::prelude::*;
use tracing::{error, info};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 900,
        window_height: 450,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init_tracing();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = SimulationConfig::load(std::env::args().nth(1).map(PathBuf::from))?;
    let library = PatternLibrary::standard()?;
    let mut engine = build_engine(&config, &library)?;

    let boundary = engine.boundary();
    let initial = engine.grid().clone();
    let iterations = config.iterations_or(WINDOW_ITERATIONS);
    let mut animation = Animation::new(
        initial,
        engine.produce_sequence(iterations),
        config.frame_delay(),
    );
    info!(iterations, "starting animation");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        animation = animation.tick(get_frame_time());

        clear_background(WHITE);
        let layout = CellLayout::fit(animation.grid.dimensions(), screen_width(), screen_height());
        window::draw_grid(&animation.grid, &layout);
        window::draw_status(
            &animation.grid,
            &layout,
            animation.generation,
            boundary,
            animation.is_finished,
        );

        next_frame().await;
    }

    Ok(())
}

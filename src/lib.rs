// Domain layer - grid, rule engine, patterns
pub mod domain;

// Application layer - wiring config to the engine, frame-driven playback
pub mod application;

// Infrastructure layer - renderers, config, logging
pub mod rendering;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{
    BoundaryMode, Cell, Dimensions, Grid, GridEngine, OutOfBoundsPolicy, Pattern, PatternLibrary,
    presets,
};
pub use application::Animation;
pub use config::SimulationConfig;
pub use error::{Error, Result};

//! Configuration for a simulation run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{BoundaryMode, OutOfBoundsPolicy};
use crate::error::{Error, Result};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "GRIDLIFE_CONFIG";

/// Generations the window plays when the config leaves `iterations` unset
pub const WINDOW_ITERATIONS: usize = 50_000_000;
/// Generations the console prints when the config leaves `iterations` unset
pub const CONSOLE_ITERATIONS: usize = 100;

/// Everything needed to build an engine and drive a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Grid height in cells
    pub rows: isize,
    /// Grid width in cells
    pub cols: isize,
    /// Pattern name from the library, or `soup`
    pub pattern: String,
    pub boundary: BoundaryMode,
    /// Handling of pattern cells outside a bounded grid
    pub out_of_bounds: OutOfBoundsPolicy,
    /// Number of generations to produce, else the binary's own default
    pub iterations: Option<usize>,
    /// Real-time pause between generations
    pub frame_delay_ms: u64,
    /// Console glyph for live cells
    pub alive_glyph: String,
    /// Console glyph for dead cells
    pub dead_glyph: String,
    /// Clear the terminal between console frames
    pub clear_screen: bool,
    /// Live-cell probability for the `soup` pattern
    pub soup_density: f64,
    /// Seed for the `soup` pattern, random when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            pattern: "glider".to_string(),
            boundary: BoundaryMode::Toroidal,
            out_of_bounds: OutOfBoundsPolicy::Skip,
            iterations: None,
            frame_delay_ms: 500,
            alive_glyph: "0".to_string(),
            dead_glyph: "-".to_string(),
            clear_screen: true,
            soup_density: 0.3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from an explicit path, else from `GRIDLIFE_CONFIG`, else defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        match path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => Self::from_file(&path),
            None => {
                info!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn iterations_or(&self, default: usize) -> usize {
        self.iterations.unwrap_or(default)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.soup_density) {
            return Err(Error::Config(format!(
                "soup_density {} is outside [0, 1]",
                self.soup_density
            )));
        }
        if self.alive_glyph == self.dead_glyph {
            return Err(Error::Config("alive_glyph and dead_glyph must differ".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_setup() {
        let config = SimulationConfig::default();
        assert_eq!((config.rows, config.cols), (20, 50));
        assert_eq!(config.pattern, "glider");
        assert_eq!(config.boundary, BoundaryMode::Toroidal);
        assert_eq!(config.frame_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_iterations_default_per_binary() {
        let config = SimulationConfig::default();
        assert_eq!(config.iterations_or(CONSOLE_ITERATIONS), 100);
        assert_eq!(config.iterations_or(WINDOW_ITERATIONS), 50_000_000);

        let config = SimulationConfig::from_json(r#"{ "iterations": 7 }"#).unwrap();
        assert_eq!(config.iterations_or(CONSOLE_ITERATIONS), 7);
        assert_eq!(config.iterations_or(WINDOW_ITERATIONS), 7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(
            r#"{ "rows": 30, "boundary": "bounded", "out_of_bounds": "reject" }"#,
        )
        .unwrap();
        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 50);
        assert_eq!(config.boundary, BoundaryMode::Bounded);
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Reject);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            SimulationConfig::from_json(r#"{ "colour": "red" }"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_density_rejected() {
        assert!(SimulationConfig::from_json(r#"{ "soup_density": 2.0 }"#).is_err());
    }

    #[test]
    fn test_same_glyphs_rejected() {
        assert!(SimulationConfig::from_json(r#"{ "alive_glyph": "-" }"#).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimulationConfig::load(Some(PathBuf::from("/nonexistent/gridlife.json")));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

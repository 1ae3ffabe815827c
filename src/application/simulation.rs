use rand::Rng;
use tracing::{error, info};

use crate::config::SimulationConfig;
use crate::domain::{Dimensions, GridEngine, Pattern, PatternLibrary, SOUP_PATTERN};
use crate::error::Result;

/// Look up the configured pattern, generating a soup when asked for one.
pub fn resolve_pattern(config: &SimulationConfig, library: &PatternLibrary) -> Result<Pattern> {
    if config.pattern == SOUP_PATTERN {
        let dimensions = Dimensions::new(config.rows, config.cols)?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, density = config.soup_density, "generating random soup");
        return Pattern::random_soup(dimensions, config.soup_density, seed);
    }
    library.get(&config.pattern).cloned().inspect_err(|_| {
        let available = library.names().collect::<Vec<_>>().join(", ");
        error!(pattern = %config.pattern, %available, "unknown pattern");
    })
}

/// Build the engine described by `config`.
pub fn build_engine(config: &SimulationConfig, library: &PatternLibrary) -> Result<GridEngine> {
    let pattern = resolve_pattern(config, library)?;
    GridEngine::with_policy(
        (config.rows, config.cols),
        &pattern,
        config.boundary,
        config.out_of_bounds,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundaryMode, OutOfBoundsPolicy};
    use crate::error::Error;

    #[test]
    fn test_default_config_builds_glider() {
        let library = PatternLibrary::standard().unwrap();
        let engine = build_engine(&SimulationConfig::default(), &library).unwrap();
        assert_eq!(engine.grid().population(), 5);
        assert_eq!(engine.boundary(), BoundaryMode::Toroidal);
        assert_eq!(engine.dimensions().cols(), 50);
    }

    #[test]
    fn test_unknown_pattern_surfaces() {
        let library = PatternLibrary::standard().unwrap();
        let config = SimulationConfig {
            pattern: "nope".to_string(),
            ..Default::default()
        };
        assert!(matches!(build_engine(&config, &library), Err(Error::UnknownPattern(_))));
    }

    #[test]
    fn test_reject_policy_with_small_bounded_grid() {
        let library = PatternLibrary::standard().unwrap();
        let config = SimulationConfig {
            rows: 5,
            cols: 5,
            boundary: BoundaryMode::Bounded,
            out_of_bounds: OutOfBoundsPolicy::Reject,
            ..Default::default()
        };
        assert!(matches!(
            build_engine(&config, &library),
            Err(Error::PatternOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_seeded_soup_is_reproducible() {
        let library = PatternLibrary::new();
        let config = SimulationConfig {
            rows: 8,
            cols: 8,
            pattern: SOUP_PATTERN.to_string(),
            seed: Some(7),
            ..Default::default()
        };
        let a = build_engine(&config, &library).unwrap();
        let b = build_engine(&config, &library).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_soup_with_invalid_dimensions() {
        let config = SimulationConfig {
            rows: 0,
            pattern: SOUP_PATTERN.to_string(),
            ..Default::default()
        };
        assert!(matches!(
            build_engine(&config, &PatternLibrary::new()),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}

use std::time::Duration;

use crate::domain::Grid;

/// Animation drives a generation sequence from a frame loop.
/// At most one generation is pulled per elapsed frame delay.
pub struct Animation<I> {
    sequence: I,
    pub grid: Grid,
    pub generation: u64,
    pub is_finished: bool,
    pub update_timer: f32,
    pub frame_delay: f32,
}

impl<I: Iterator<Item = Grid>> Animation<I> {
    /// Start from `initial`; the first tick pulls immediately.
    pub fn new(initial: Grid, sequence: I, frame_delay: Duration) -> Self {
        let frame_delay = frame_delay.as_secs_f32();
        Self {
            sequence,
            grid: initial,
            generation: 0,
            is_finished: false,
            update_timer: frame_delay,
            frame_delay,
        }
    }

    /// Advance the clock by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.is_finished {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer < self.frame_delay {
            return self;
        }

        match self.sequence.next() {
            Some(grid) => {
                self.grid = grid;
                self.generation += 1;
            }
            None => {
                tracing::info!(generation = self.generation, "sequence exhausted");
                self.is_finished = true;
            }
        }
        self.update_timer = 0.0;

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundaryMode, GridEngine, presets};

    #[test]
    fn test_first_tick_pulls_immediately() {
        let mut engine =
            GridEngine::new((10, 10), &presets::blinker(), BoundaryMode::Bounded).unwrap();
        let initial = engine.grid().clone();
        let delay = Duration::from_millis(500);
        let animation = Animation::new(initial.clone(), engine.produce_sequence(3), delay);

        let animation = animation.tick(0.0);
        assert_eq!(animation.generation, 1);
        assert_ne!(animation.grid, initial);
    }

    #[test]
    fn test_waits_for_frame_delay() {
        let mut engine =
            GridEngine::new((10, 10), &presets::blinker(), BoundaryMode::Bounded).unwrap();
        let initial = engine.grid().clone();
        let delay = Duration::from_millis(500);
        let animation = Animation::new(initial, engine.produce_sequence(3), delay)
            .tick(0.0)
            .tick(0.2)
            .tick(0.2);
        assert_eq!(animation.generation, 1);

        let animation = animation.tick(0.2);
        assert_eq!(animation.generation, 2);
    }

    #[test]
    fn test_stops_when_exhausted() {
        let mut engine =
            GridEngine::new((10, 10), &presets::block(), BoundaryMode::Bounded).unwrap();
        let initial = engine.grid().clone();
        let mut animation = Animation::new(initial, engine.produce_sequence(2), Duration::ZERO);
        for _ in 0..5 {
            animation = animation.tick(0.016);
        }
        assert!(animation.is_finished);
        assert_eq!(animation.generation, 2);
        assert_eq!(animation.grid.population(), 4);
    }
}

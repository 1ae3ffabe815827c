/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Compute the next state under B3/S23:
    /// 1. Live cell with fewer than 2 neighbors dies (underpopulation)
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Live cell with more than 3 neighbors dies (overpopulation)
    /// 4. Dead cell with exactly 3 neighbors becomes alive (reproduction)
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead);
        }
    }
}

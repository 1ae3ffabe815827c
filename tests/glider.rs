use gridlife::{BoundaryMode, GridEngine, Pattern, presets};
use pretty_assertions::assert_eq;

fn live_set(engine: &GridEngine) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = engine.grid().live_cells().collect();
    cells.sort();
    cells
}

fn shifted(
    pattern: &Pattern,
    rows: usize,
    cols: usize,
    dr: isize,
    dc: isize,
) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = pattern
        .cells
        .iter()
        .map(|&(r, c)| {
            (
                (r + dr).rem_euclid(rows as isize) as usize,
                (c + dc).rem_euclid(cols as isize) as usize,
            )
        })
        .collect();
    cells.sort();
    cells
}

#[test]
fn glider_moves_one_diagonal_step_per_period() {
    let glider = presets::glider();
    let mut engine = GridEngine::new((20, 50), &glider, BoundaryMode::Toroidal).unwrap();

    for period in 1..=3 {
        engine.produce_sequence(4).for_each(drop);
        let p = period as isize;
        assert_eq!(live_set(&engine), shifted(&glider, 20, 50, p, p));
    }
}

#[test]
fn glider_crosses_the_torus_seam() {
    let glider = presets::glider().translated(14, 42);
    let mut engine = GridEngine::new((20, 50), &glider, BoundaryMode::Toroidal).unwrap();

    let last = engine.produce_sequence(4).last().unwrap();
    assert_eq!(last.population(), 5);
    assert_eq!(live_set(&engine), shifted(&glider, 20, 50, 1, 1));
}

#[test]
fn glider_returns_home_after_full_lap() {
    let glider = presets::glider();
    let mut engine =
        GridEngine::new((12, 12), &glider.translated(-3, -3), BoundaryMode::Toroidal).unwrap();
    let start = live_set(&engine);

    assert_eq!(engine.produce_sequence(48).count(), 48);
    assert_eq!(live_set(&engine), start);
}

#[test]
fn bounded_glider_never_wraps() {
    let glider = presets::glider();
    let mut engine = GridEngine::new((10, 10), &glider, BoundaryMode::Bounded).unwrap();

    for grid in engine.produce_sequence(40) {
        for row in 0..4 {
            for col in 0..4 {
                assert!(!grid.is_alive(row, col));
            }
        }
    }
}

/// The settling engine: removal → gravity → refill.
///
/// Runs unconditionally every tick; with nothing to remove, gravity
/// and refill are no-ops. Gravity iterates full top-to-bottom passes
/// until a pass moves nothing, so multi-row gaps cascade in one tick
/// without recursion; each pass drops a tile at most one row per scan
/// step, and the loop reaches its fixed point within `rows` passes.
///
/// Both gravity sourcing and refill scan rows `0..rows-1`: the bottom
/// row only ever receives tiles that fall into it, never fresh spawns.
/// A cleared bottom-row cell stays empty until something lands there.

use rand::rngs::SmallRng;

use crate::domain::grid::{random_color, Coord, Grid};
use crate::domain::tile::Tile;

/// What one settle pass did, for events and the status line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SettleReport {
    /// Cells flipped from a color to empty by removal.
    pub removed: usize,
    /// Single-row drops performed by gravity.
    pub moves: usize,
    /// Empty cells given a fresh color by refill.
    pub refilled: usize,
}

/// Apply all three phases in order.
pub fn settle(
    grid: &mut Grid,
    regions: &[Vec<Coord>],
    rng: &mut SmallRng,
    palette_len: u8,
) -> SettleReport {
    let removed = remove_regions(grid, regions);
    let moves = apply_gravity(grid);
    let refilled = refill(grid, rng, palette_len);
    SettleReport {
        removed,
        moves,
        refilled,
    }
}

/// Phase 1: clear every cell of every region. Idempotent; a cell
/// shared by overlapping regions is cleared and counted once.
pub fn remove_regions(grid: &mut Grid, regions: &[Vec<Coord>]) -> usize {
    let mut removed = 0;
    for region in regions {
        for &cell in region {
            if !grid.is_empty(cell) {
                grid.set(cell, Tile::Empty);
                removed += 1;
            }
        }
    }
    removed
}

/// Phase 2: drop tiles into empty cells below until stable.
pub fn apply_gravity(grid: &mut Grid) -> usize {
    let mut total = 0;
    loop {
        let mut moved = false;
        for row in 0..grid.rows().saturating_sub(1) {
            for col in 0..grid.cols() {
                let here = Coord::new(col, row);
                let below = Coord::new(col, row + 1);
                if grid.is_empty(below) && !grid.is_empty(here) {
                    grid.set(below, grid.get(here));
                    grid.set(here, Tile::Empty);
                    moved = true;
                    total += 1;
                }
            }
        }
        if !moved {
            break;
        }
    }
    total
}

/// Phase 3: respawn random colors into empty cells, bottom row
/// excluded.
pub fn refill(grid: &mut Grid, rng: &mut SmallRng, palette_len: u8) -> usize {
    let mut refilled = 0;
    for row in 0..grid.rows().saturating_sub(1) {
        for col in 0..grid.cols() {
            let cell = Coord::new(col, row);
            if grid.is_empty(cell) {
                grid.set(cell, random_color(rng, palette_len));
                refilled += 1;
            }
        }
    }
    refilled
}

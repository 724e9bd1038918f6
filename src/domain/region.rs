/// Region collection: breadth-first flood fill from a matched cell
/// over 4-directional same-color neighbors.
///
/// Collection runs against the grid as it stood at detection time; the
/// settler removes every collected region afterwards, so regions from
/// overlapping matches are harmless (removal is idempotent).

use std::collections::{HashSet, VecDeque};

use super::grid::{Coord, Grid};

/// The connected same-color component containing `seed`, in BFS order.
/// A seed holding the empty sentinel yields an empty region (it cannot
/// come from a validated match, but the settler must never grow a
/// region out of cleared cells).
pub fn collect_region(grid: &Grid, seed: Coord) -> Vec<Coord> {
    let color = grid.get(seed);
    if color.is_empty() {
        return Vec::new();
    }

    let mut found = Vec::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut queue: VecDeque<Coord> = VecDeque::new();
    seen.insert(seed);
    queue.push_back(seed);

    while let Some(cell) = queue.pop_front() {
        for neighbor in neighbors(cell, grid.cols(), grid.rows()) {
            // `seen` covers both collected and still-queued cells, so
            // nothing is enqueued twice.
            if grid.get(neighbor).same_color(color) && seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
        found.push(cell);
    }
    found
}

/// In-bounds 4-directional neighbors of `c`.
fn neighbors(c: Coord, cols: usize, rows: usize) -> Vec<Coord> {
    const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
    let mut out = Vec::with_capacity(4);
    for (dc, dr) in DIRECTIONS {
        let col = c.col as i32 + dc;
        let row = c.row as i32 + dr;
        if col >= 0 && row >= 0 && (col as usize) < cols && (row as usize) < rows {
            out.push(Coord::new(col as usize, row as usize));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile::Tile;
    use std::collections::HashSet;

    /// Helper: build a grid from a string diagram, one string per row.
    /// Legend: 'r','g','b','o','t' = palette colors 0..4, '.' = empty.
    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let tile = match "rgbot".find(ch) {
                    Some(i) => Tile::Color(i as u8),
                    None => Tile::Empty,
                };
                grid.set(Coord::new(x, y), tile);
            }
        }
        grid
    }

    fn as_set(cells: Vec<Coord>) -> HashSet<Coord> {
        cells.into_iter().collect()
    }

    #[test]
    fn l_shaped_region_found_from_any_member() {
        // Five r-cells in an L, surrounded by other colors.
        let grid = grid_from(&[
            "rgbg",
            "rbgb",
            "rrro",
        ]);
        let expected: HashSet<Coord> = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 2),
            Coord::new(2, 2),
        ]
        .into_iter()
        .collect();

        for &seed in &expected {
            let region = collect_region(&grid, seed);
            assert_eq!(region.len(), 5, "region from {:?} has wrong size", seed);
            assert_eq!(as_set(region), expected);
        }
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let grid = grid_from(&[
            "rg",
            "gr",
        ]);
        let region = collect_region(&grid, Coord::new(0, 0));
        assert_eq!(region, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn region_stops_at_color_boundaries() {
        let grid = grid_from(&[
            "rrg",
            "grr",
        ]);
        let region = as_set(collect_region(&grid, Coord::new(0, 0)));
        assert_eq!(
            region,
            [Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1), Coord::new(2, 1)]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn empty_seed_yields_empty_region() {
        let grid = grid_from(&[
            "r.r",
            "...",
        ]);
        assert!(collect_region(&grid, Coord::new(1, 0)).is_empty());
    }

    #[test]
    fn empty_cells_do_not_bridge_regions() {
        let grid = grid_from(&[
            "r.r",
        ]);
        let region = collect_region(&grid, Coord::new(0, 0));
        assert_eq!(region, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn seed_starts_the_bfs_order() {
        let grid = grid_from(&[
            "rrr",
        ]);
        let region = collect_region(&grid, Coord::new(1, 0));
        assert_eq!(region[0], Coord::new(1, 0));
        assert_eq!(region.len(), 3);
    }
}

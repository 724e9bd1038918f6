/// Match detection: scanning columns and rows for runs of three or
/// more same-colored tiles.
///
/// The scan is greedy and non-overlapping: once three consecutive
/// matching tiles are claimed, the cursor jumps past them and the tail
/// is rescanned as a fresh candidate. A run of four therefore yields
/// one match and a run of six yields two. Empty cells never begin or
/// extend a run.

use super::grid::{Coord, Grid};
use super::tile::Tile;

/// Which scan produced a match.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Column,
    Row,
}

/// The starting coordinate of one detected 3-run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineMatch {
    pub origin: Coord,
    pub axis: Axis,
}

/// Scan every column top-to-bottom, then every row left-to-right.
/// Column matches come first, so the output order is deterministic for
/// downstream region collection.
pub fn find_lines(grid: &Grid) -> Vec<LineMatch> {
    let mut matches = Vec::new();
    for col in 0..grid.cols() {
        for start in scan_line(&grid.column(col)) {
            matches.push(LineMatch {
                origin: Coord::new(col, start),
                axis: Axis::Column,
            });
        }
    }
    for row in 0..grid.rows() {
        for start in scan_line(&grid.row(row)) {
            matches.push(LineMatch {
                origin: Coord::new(start, row),
                axis: Axis::Row,
            });
        }
    }
    matches
}

/// Offsets within one line where a 3-run starts.
///
/// `target` is the candidate run start, `count` how many cells past it
/// have matched so far. A probe past the end of the line compares
/// unequal, which ends the run like any color change.
fn scan_line(cells: &[Tile]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut target = 0;
    let mut count = 0;
    while target < cells.len() {
        let extends = cells
            .get(target + count + 1)
            .map_or(false, |&next| next.same_color(cells[target]));
        if extends {
            count += 1;
            if count == 2 {
                starts.push(target);
                target += 3;
                count = 0;
            }
        } else {
            count = 0;
            target += 1;
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn line(s: &str) -> Vec<Tile> {
        grid_from(&[s]).row(0)
    }

    // ── scan_line ──

    #[test]
    fn three_run_at_line_start() {
        assert_eq!(scan_line(&line("rrrb")), vec![0]);
    }

    #[test]
    fn four_run_yields_a_single_match() {
        assert_eq!(scan_line(&line("rrrr")), vec![0]);
    }

    #[test]
    fn five_run_yields_a_single_match() {
        assert_eq!(scan_line(&line("rrrrr")), vec![0]);
    }

    #[test]
    fn six_run_yields_two_matches() {
        assert_eq!(scan_line(&line("rrrrrr")), vec![0, 3]);
    }

    #[test]
    fn run_in_the_middle() {
        assert_eq!(scan_line(&line("bgggr")), vec![1]);
    }

    #[test]
    fn no_three_run_no_match() {
        assert!(scan_line(&line("rrbrrg")).is_empty());
    }

    #[test]
    fn short_line_no_match() {
        assert!(scan_line(&line("rr")).is_empty());
    }

    #[test]
    fn empty_cells_never_form_a_run() {
        assert!(scan_line(&line("...")).is_empty());
        assert!(scan_line(&line("rr.r")).is_empty());
    }

    #[test]
    fn two_separate_runs_on_one_line() {
        assert_eq!(scan_line(&line("rrrgbbb")), vec![0, 4]);
    }

    // ── find_lines ──

    #[test]
    fn detects_a_vertical_run() {
        let grid = grid_from(&[
            "rgb",
            "rbg",
            "rgb",
        ]);
        let found = find_lines(&grid);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].origin, Coord::new(0, 0));
        assert_eq!(found[0].axis, Axis::Column);
    }

    #[test]
    fn detects_a_horizontal_run() {
        let grid = grid_from(&[
            "rgb",
            "ggg",
            "bgr",
        ]);
        // The middle column is also a vertical g-run through (1,1).
        let found = find_lines(&grid);
        assert!(found.contains(&LineMatch {
            origin: Coord::new(0, 1),
            axis: Axis::Row,
        }));
    }

    #[test]
    fn column_matches_come_before_row_matches() {
        let grid = grid_from(&[
            "rbbb",
            "rgot",
            "rtog",
        ]);
        let found = find_lines(&grid);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].axis, Axis::Column);
        assert_eq!(found[1].axis, Axis::Row);
    }

    #[test]
    fn quiet_grid_has_no_matches() {
        let grid = grid_from(&[
            "rgb",
            "gbr",
            "brg",
        ]);
        assert!(find_lines(&grid).is_empty());
    }

    #[test]
    fn degenerate_grid_has_no_matches() {
        let grid = grid_from(&[
            "rr",
            "rr",
        ]);
        assert!(find_lines(&grid).is_empty());
    }
}

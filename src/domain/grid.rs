/// Grid state: the rows × cols board of tiles.
///
/// The grid is the single source of truth for the simulation, owned by
/// the world and mutated only through `set` / `swap` / the settler.
/// All accessors index directly: an out-of-bounds coordinate is a
/// programming error and panics, never a clamped or defaulted read.
/// Callers (detector, settler, input adapter) guarantee bounds.

use rand::rngs::SmallRng;
use rand::Rng;

use super::tile::Tile;

/// A cell coordinate. Structural equality and hash, so coordinate sets
/// compare by value rather than identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// cells[row][col]; row 0 is the top.
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// A grid with every cell empty.
    pub fn new(cols: usize, rows: usize) -> Self {
        Grid {
            cols,
            rows,
            cells: vec![vec![Tile::Empty; cols]; rows],
        }
    }

    /// A grid with every cell a uniformly-random palette color.
    pub fn random(cols: usize, rows: usize, rng: &mut SmallRng, palette_len: u8) -> Self {
        let mut grid = Self::new(cols, rows);
        grid.fill_random(rng, palette_len);
        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.col < self.cols && c.row < self.rows
    }

    /// Tile at `c`. Panics when `c` is out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Tile {
        self.cells[c.row][c.col]
    }

    /// Overwrite the tile at `c`. Panics when `c` is out of bounds.
    #[inline]
    pub fn set(&mut self, c: Coord, tile: Tile) {
        self.cells[c.row][c.col] = tile;
    }

    #[inline]
    pub fn is_empty(&self, c: Coord) -> bool {
        self.get(c).is_empty()
    }

    /// Exchange the tiles at `a` and `b`.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let tile_a = self.get(a);
        self.set(a, self.get(b));
        self.set(b, tile_a);
    }

    /// Assign every cell a fresh random palette color.
    pub fn fill_random(&mut self, rng: &mut SmallRng, palette_len: u8) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = random_color(rng, palette_len);
            }
        }
    }

    /// One column, top to bottom (the detector's vertical scan line).
    pub fn column(&self, col: usize) -> Vec<Tile> {
        (0..self.rows).map(|r| self.cells[r][col]).collect()
    }

    /// One row, left to right.
    pub fn row(&self, row: usize) -> Vec<Tile> {
        self.cells[row].clone()
    }
}

/// Draw one uniformly-random palette color.
pub fn random_color(rng: &mut SmallRng, palette_len: u8) -> Tile {
    Tile::Color(rng.gen_range(0..palette_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

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

    #[test]
    fn get_set_roundtrip() {
        let mut grid = Grid::new(4, 3);
        let c = Coord::new(2, 1);
        assert!(grid.is_empty(c));
        grid.set(c, Tile::Color(3));
        assert_eq!(grid.get(c), Tile::Color(3));
        assert!(!grid.is_empty(c));
    }

    #[test]
    fn bounds() {
        let grid = Grid::new(4, 3);
        assert!(grid.in_bounds(Coord::new(3, 2)));
        assert!(!grid.in_bounds(Coord::new(4, 2)));
        assert!(!grid.in_bounds(Coord::new(3, 3)));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get_panics() {
        let grid = Grid::new(2, 2);
        grid.get(Coord::new(2, 0));
    }

    #[test]
    fn swap_exchanges_tiles() {
        let mut grid = grid_from(&["rg"]);
        grid.swap(Coord::new(0, 0), Coord::new(1, 0));
        assert_eq!(grid.get(Coord::new(0, 0)), Tile::Color(1));
        assert_eq!(grid.get(Coord::new(1, 0)), Tile::Color(0));
    }

    #[test]
    fn line_views() {
        let grid = grid_from(&[
            "rgb",
            "otr",
        ]);
        assert_eq!(grid.row(1), vec![Tile::Color(3), Tile::Color(4), Tile::Color(0)]);
        assert_eq!(grid.column(2), vec![Tile::Color(2), Tile::Color(0)]);
    }

    #[test]
    fn random_fill_covers_grid_and_respects_palette() {
        let mut rng = SmallRng::seed_from_u64(7);
        let grid = Grid::random(6, 6, &mut rng, 5);
        for row in 0..6 {
            for col in 0..6 {
                match grid.get(Coord::new(col, row)) {
                    Tile::Color(i) => assert!(i < 5),
                    Tile::Empty => panic!("random fill left an empty cell"),
                }
            }
        }
    }

    #[test]
    fn random_fill_is_deterministic_for_a_seed() {
        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        let a = Grid::random(5, 4, &mut rng_a, 5);
        let b = Grid::random(5, 4, &mut rng_b, 5);
        assert_eq!(a, b);
    }
}

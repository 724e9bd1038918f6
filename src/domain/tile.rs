/// Tile: one cell's content, either a palette color or the empty
/// sentinel.
/// Colors are indices into the session palette (configuration order);
/// the domain never sees terminal colors.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    /// A palette color, by index.
    Color(u8),
}

impl Tile {
    /// Is this the empty sentinel?
    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Match-equality: true only for two equal colors.
    /// Empty never matches anything, itself included, so cleared cells
    /// can neither begin nor extend a run.
    pub fn same_color(self, other: Tile) -> bool {
        match (self, other) {
            (Tile::Color(a), Tile::Color(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_colors_match() {
        assert!(Tile::Color(2).same_color(Tile::Color(2)));
    }

    #[test]
    fn different_colors_do_not_match() {
        assert!(!Tile::Color(0).same_color(Tile::Color(1)));
    }

    #[test]
    fn empty_never_matches_even_itself() {
        assert!(!Tile::Empty.same_color(Tile::Empty));
        assert!(!Tile::Empty.same_color(Tile::Color(0)));
        assert!(!Tile::Color(0).same_color(Tile::Empty));
    }
}

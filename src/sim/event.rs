/// Events emitted by the simulation.
/// The presentation layer consumes these for status messages and sound.

use crate::domain::grid::Coord;
use crate::domain::lines::Axis;

#[derive(Clone, Copy, Debug)]
pub enum GameEvent {
    TileSelected { at: Coord },
    SelectionCleared,
    TilesSwapped { a: Coord, b: Coord },
    SwapRejected { selected: Coord, pressed: Coord },
    MatchFound { origin: Coord, axis: Axis, size: usize },
    BoardSettled { removed: usize, refilled: usize },
}

/// The selection/interaction state machine.
///
/// Two states: `Idle` (no tile armed) and `Selected` (one tile armed,
/// waiting for the second press). The second press either swaps with a
/// 4-directionally adjacent tile or cancels; either way the machine
/// returns to `Idle`. Whether a swap produces a match is not checked
/// here; an unproductive swap stands and simply gives the next tick's
/// detector nothing to find.

use crate::domain::grid::Coord;
use crate::sim::event::GameEvent;
use crate::sim::world::WorldState;

/// Current interaction state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selection {
    Idle,
    Selected(Coord),
}

/// Are `a` and `b` 4-directionally adjacent?
/// Exactly one axis differs by exactly one. Diagonal neighbors and the
/// cell itself are not adjacent.
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    let dc = a.col.abs_diff(b.col);
    let dr = a.row.abs_diff(b.row);
    (dc == 1 && dr == 0) || (dc == 0 && dr == 1)
}

/// A press at an in-bounds coordinate. The input adapter guarantees
/// bounds; anything else is a caller bug and fails fast.
pub fn handle_press(world: &mut WorldState, at: Coord) -> Vec<GameEvent> {
    debug_assert!(world.grid.in_bounds(at));
    match world.selection {
        Selection::Idle => {
            world.selection = Selection::Selected(at);
            vec![GameEvent::TileSelected { at }]
        }
        Selection::Selected(selected) => {
            world.selection = Selection::Idle;
            if is_adjacent(selected, at) {
                world.grid.swap(selected, at);
                vec![GameEvent::TilesSwapped { a: selected, b: at }]
            } else {
                vec![GameEvent::SwapRejected { selected, pressed: at }]
            }
        }
    }
}

/// The cancel key: drop any armed selection.
pub fn handle_cancel(world: &mut WorldState) -> Vec<GameEvent> {
    match world.selection {
        Selection::Selected(_) => {
            world.selection = Selection::Idle;
            vec![GameEvent::SelectionCleared]
        }
        Selection::Idle => Vec::new(),
    }
}

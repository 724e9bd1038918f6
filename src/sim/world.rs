/// WorldState: the complete snapshot of a running game.
///
/// Owns the grid, the interaction selection, the injected PRNG, and
/// the presentation-facing bits (tick counter, pause flag, status
/// message). Constructed in `main` and passed by `&mut` to the tick
/// driver and the interaction handlers; there are no ambient globals,
/// so tests can run as many worlds side by side as they like.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::domain::grid::Grid;
use crate::sim::select::Selection;

pub struct WorldState {
    pub grid: Grid,
    pub selection: Selection,
    /// The only randomness source for board init and refill. Seeded,
    /// so a fixed seed replays the exact same session.
    pub rng: SmallRng,
    /// Number of colors tiles are drawn from.
    pub palette_len: u8,
    pub tick: u64,
    pub paused: bool,

    // ── UI ──
    pub message: String,
    pub message_timer: u32,
}

impl WorldState {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let palette_len = config.palette.colors.len() as u8;
        let grid = Grid::random(config.grid.cols, config.grid.rows, &mut rng, palette_len);
        WorldState {
            grid,
            selection: Selection::Idle,
            rng,
            palette_len,
            tick: 0,
            paused: false,
            message: String::new(),
            message_timer: 0,
        }
    }

    pub fn set_message(&mut self, msg: &str, duration: u32) {
        self.message = msg.to_string();
        self.message_timer = duration;
    }

    /// Count down the transient status message; clears it on expiry.
    pub fn tick_message(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message.clear();
            }
        }
    }
}

/// Entry point and frame loop.
///
/// Two independent external triggers drive the simulation, both
/// serialized on this thread: the fixed-cadence tick (detect, collect,
/// settle) and asynchronous input events feeding the selection state
/// machine. Every frame drains input, possibly runs one tick, and
/// redraws.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use config::GameConfig;
use sim::event::GameEvent;
use sim::select;
use sim::step;
use sim::world::WorldState;
use ui::board::BoardGeometry;
use ui::input::{InputEvent, InputState};
use ui::renderer::Renderer;
use ui::sound::SoundEngine;

const FRAME_SLEEP: Duration = Duration::from_millis(5);
/// Status messages live this many simulation ticks.
const MESSAGE_TICKS: u32 = 12;

fn main() {
    let config = GameConfig::load();
    let mut world = WorldState::new(&config, resolve_seed(&config));

    let mut renderer = Renderer::new(&config.palette.colors);
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let sound = SoundEngine::new();

    let result = game_loop(&mut world, &mut renderer, sound.as_ref(), &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Tile Crush!");
}

/// Seed from config when pinned, otherwise from the system clock.
fn resolve_seed(config: &GameConfig) -> u64 {
    config.general.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed)
    })
}

fn game_loop(
    world: &mut WorldState,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = InputState::new();
    let geometry = BoardGeometry::new(config);
    let tick_rate = Duration::from_millis(config.speed.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        input.drain_events();
        if input.ctrl_c_pressed() {
            break;
        }

        let mut quit = false;
        for &ev in input.events() {
            match ev {
                InputEvent::Quit => quit = true,
                InputEvent::Pause => world.paused = !world.paused,
                InputEvent::Restart => {
                    *world = WorldState::new(config, resolve_seed(config));
                    world.set_message("fresh board", MESSAGE_TICKS);
                    last_tick = Instant::now();
                }
                InputEvent::Cancel if !world.paused => {
                    let events = select::handle_cancel(world);
                    react(world, sound, &events);
                }
                InputEvent::PressAt { x, y } if !world.paused => {
                    // The geometry adapter resolves the press to a grid
                    // coordinate; presses outside the board are dropped.
                    if let Some(coord) = geometry.cell_at(x, y) {
                        let events = select::handle_press(world, coord);
                        react(world, sound, &events);
                    }
                }
                _ => {}
            }
        }
        if quit {
            break;
        }

        if !world.paused && last_tick.elapsed() >= tick_rate {
            let events = step::step(world);
            react(world, sound, &events);
            last_tick = Instant::now();
        }

        renderer.render(world, &geometry)?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

/// Turn simulation events into status messages and sound.
fn react(world: &mut WorldState, sound: Option<&SoundEngine>, events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::TileSelected { .. } => {
                if let Some(sfx) = sound {
                    sfx.play_select();
                }
            }
            GameEvent::SelectionCleared => {
                world.set_message("selection cleared", MESSAGE_TICKS);
            }
            GameEvent::TilesSwapped { a, b } => {
                world.set_message(
                    &format!("swapped ({}, {}) and ({}, {})", a.col, a.row, b.col, b.row),
                    MESSAGE_TICKS,
                );
                if let Some(sfx) = sound {
                    sfx.play_swap();
                }
            }
            GameEvent::SwapRejected { .. } => {
                world.set_message("not adjacent, selection cleared", MESSAGE_TICKS);
                if let Some(sfx) = sound {
                    sfx.play_reject();
                }
            }
            GameEvent::MatchFound { .. } => {}
            GameEvent::BoardSettled { removed, .. } => {
                world.set_message(&format!("cleared {removed} tiles"), MESSAGE_TICKS);
                if let Some(sfx) = sound {
                    sfx.play_clear();
                }
            }
        }
    }
}

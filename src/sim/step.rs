/// The tick driver: advances the world by one simulation step.
///
/// Processing order, per tick:
///   1. Match detection (column scans, then row scans)
///   2. Region collection, per match, against the pre-removal grid
///   3. Settling: removal → gravity → refill
///
/// The settle phases run even when detection found nothing; gravity
/// and refill are then no-ops (the common idle case). Collecting every
/// region before removing any is safe: two matches of one color either
/// share their entire connected component or are disjoint, and removal
/// is idempotent over the overlap.

use crate::domain::lines;
use crate::domain::region;
use crate::sim::event::GameEvent;
use crate::sim::settle;
use crate::sim::world::WorldState;

pub fn step(world: &mut WorldState) -> Vec<GameEvent> {
    world.tick += 1;
    world.tick_message();

    let mut events: Vec<GameEvent> = Vec::new();

    let matches = lines::find_lines(&world.grid);
    let mut regions = Vec::with_capacity(matches.len());
    for m in &matches {
        let cells = region::collect_region(&world.grid, m.origin);
        events.push(GameEvent::MatchFound {
            origin: m.origin,
            axis: m.axis,
            size: cells.len(),
        });
        regions.push(cells);
    }

    let report = settle::settle(
        &mut world.grid,
        &regions,
        &mut world.rng,
        world.palette_len,
    );
    if report.removed > 0 {
        events.push(GameEvent::BoardSettled {
            removed: report.removed,
            refilled: report.refilled,
        });
    }

    events
}

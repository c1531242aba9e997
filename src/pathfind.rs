//! Shortest-path search over the battlefield snapshot.

use axial::Axial;
use log::debug;
use pathfinding::prelude::*;

use crate::tile::{Grid, Occupancy};

/// A* from `start` to `goal` over the six-neighbor hex graph. Returns the
/// hex sequence from `start` to `goal` inclusive, or `None` when no path
/// exists.
///
/// A step is rejected outright when the destination is off-map, costs
/// infinitely (obstacle terrain or a wall), or is occupied. The goal hex
/// itself is exempt from the occupancy rule, so callers can ask "can I
/// reach a hex adjacent to this occupied target".
pub fn find_path(
    grid: &Grid,
    occupied: Option<&Occupancy>,
    start: Axial,
    goal: Axial,
    can_fly: bool,
) -> Option<Vec<Axial>> {
    if start == goal { return Some(vec![start]) }
    // an off-map start is immediately impassable, not an error
    if !grid.contains(start) { return None }

    let result = astar(
        &start,
        |&at| successors(grid, occupied, goal, can_fly, at),
        |&at| at.distance(&goal) as u32,
        |&at| at == goal,
    );
    if result.is_none() { debug!("no path from {start} to {goal}"); }
    result.map(|(path, _)| path)
}

fn successors(
    grid: &Grid,
    occupied: Option<&Occupancy>,
    goal: Axial,
    can_fly: bool,
    at: Axial,
) -> Vec<(Axial, u32)> {
    at.neighbors().into_iter().filter_map(|next| {
        let tile = grid.get(next)?;
        let cost = tile.step_cost(can_fly)?;
        if next != goal && occupied.is_some_and(|it| it.contains(&next)) { return None }
        Some((next, cost as u32))
    }).collect()
}

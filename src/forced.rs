//! Push/pull resolution.
//!
//! Two modes. The straight-line resolver steps the target along the
//! source→target line and reports a single deterministic outcome. The
//! enumeration resolver walks a bounded BFS and returns every destination a
//! controlling player may pick, under the rule that each step must strictly
//! increase (push) or decrease (pull) distance from the source.

use std::collections::{HashSet, VecDeque};

use axial::Axial;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::tile::{Feature, Grid, Occupancy, Terrain, TerrainEffect};

/// Which way displacement moves the target relative to the source.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Displacement {
    Push,
    Pull,
}

/// Why a straight-line displacement stopped short.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopCause {
    OffMap,
    Obstacle,
    Wall,
    Occupied,
}

/// Outcome of one straight-line push or pull.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MovementResult {
    pub final_position: Axial,
    pub stopped_by: Option<StopCause>,
    pub damage_applied: i16,
    pub terrain_effects: Vec<TerrainEffect>,
}

/// Push `target` up to `magnitude` hexes along the line away from `source`.
pub fn apply_push(
    grid: &Grid,
    occupied: &Occupancy,
    source: Axial,
    target: Axial,
    magnitude: i16,
) -> MovementResult {
    displace(grid, occupied, source, target, magnitude, Displacement::Push)
}

/// Pull `target` up to `magnitude` hexes along the line toward `source`.
pub fn apply_pull(
    grid: &Grid,
    occupied: &Occupancy,
    source: Axial,
    target: Axial,
    magnitude: i16,
) -> MovementResult {
    displace(grid, occupied, source, target, magnitude, Displacement::Pull)
}

fn displace(
    grid: &Grid,
    occupied: &Occupancy,
    source: Axial,
    target: Axial,
    magnitude: i16,
    kind: Displacement,
) -> MovementResult {
    let mut result = MovementResult {
        final_position: target,
        stopped_by: None,
        damage_applied: 0,
        terrain_effects: Vec::new(),
    };

    let dir = (target - source).unit();
    if dir == Axial::ZERO || magnitude <= 0 { return result }
    let step = match kind {
        Displacement::Push => dir,
        Displacement::Pull => -dir,
    };

    for _ in 0..magnitude {
        let next = result.final_position + step;
        match step_block(grid, occupied, next) {
            Some(cause) => {
                debug!("{kind:?} from {source} stopped at {}: {cause:?}", result.final_position);
                result.stopped_by = Some(cause);
                break;
            }
            None => {
                result.final_position = next;
                let Some(tile) = grid.get(next) else { continue };
                for effect in tile.entry_effects() {
                    result.damage_applied += effect.damage();
                    result.terrain_effects.push(effect);
                }
            }
        }
    }
    result
}

fn step_block(grid: &Grid, occupied: &Occupancy, next: Axial) -> Option<StopCause> {
    let Some(tile) = grid.get(next) else { return Some(StopCause::OffMap) };
    if tile.terrain == Terrain::Obstacle { return Some(StopCause::Obstacle) }
    if tile.has_feature(Feature::Wall) { return Some(StopCause::Wall) }
    if occupied.contains(&next) { return Some(StopCause::Occupied) }
    None
}

/// Every destination the controlling player may choose for a forced move of
/// up to `magnitude` steps. A hex joins the result only when it is walkable
/// and unoccupied per the caller's predicates and its distance from `source`
/// is strictly greater (push) or strictly less (pull) than that of the hex
/// it was stepped from. The constraint holds on every edge, not just the
/// endpoint, so lateral or doubling-back routes never qualify.
pub fn forced_destinations(
    source: Axial,
    target: Axial,
    magnitude: i16,
    kind: Displacement,
    is_walkable: impl Fn(Axial) -> bool,
    is_occupied: impl Fn(Axial) -> bool,
) -> HashSet<Axial> {
    let mut destinations = HashSet::new();
    if magnitude <= 0 || source == target { return destinations }

    let mut visited = HashSet::from([target]);
    let mut frontier = VecDeque::from([(target, 0_i16)]);
    while let Some((at, steps)) = frontier.pop_front() {
        if steps == magnitude { continue }
        let here = source.distance(&at);
        for next in at.neighbors() {
            if visited.contains(&next) { continue }
            if !is_walkable(next) || is_occupied(next) { continue }
            let there = source.distance(&next);
            let monotonic = match kind {
                Displacement::Push => there > here,
                Displacement::Pull => there < here,
            };
            if !monotonic { continue }
            visited.insert(next);
            destinations.insert(next);
            frontier.push_back((next, steps + 1));
        }
    }
    destinations
}

/// Commit a destination chosen from either mode. No validation: legality was
/// established during resolution.
pub fn commit_move(occupied: &mut Occupancy, from: Axial, to: Axial) {
    occupied.remove(&from);
    occupied.insert(to);
}

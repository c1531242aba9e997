//! Hex-grid tactical movement engine.
//!
//! Stateless between calls: every entry point takes a battlefield snapshot
//! (`Grid`) and an occupancy snapshot, searches in memory, and returns plain
//! value data. The turn/ability layer that owns game state lives elsewhere.

mod forced;
mod pathfind;
mod reach;
mod tile;

pub use axial::{round, Axial, Convert, Layout, Map, DIRECTIONS};
pub use forced::{
    apply_pull, apply_push, commit_move, forced_destinations, Displacement, MovementResult,
    StopCause,
};
pub use pathfind::find_path;
pub use reach::reachable_hexes;
pub use tile::{Feature, Grid, Occupancy, Terrain, TerrainEffect, Tile};

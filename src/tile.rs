use std::collections::HashSet;

use axial::Axial;
use serde::{Deserialize, Serialize};

/// Base terrain class of a hex. Determines traversal cost and whether
/// hazard effects apply on entry.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Normal,
    Difficult,
    Hazardous,
    Obstacle,
}

/// Extra tags attached to a hex on top of its terrain. A wall blocks
/// traversal exactly like obstacle terrain, whatever the terrain says.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Wall,
    Trap,
}

/// Effects triggered by entering a hex during forced movement.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainEffect {
    Hazard,
    Trap,
}

impl TerrainEffect {
    /// Damage dealt per hex entered.
    pub fn damage(&self) -> i16 {
        match self {
            TerrainEffect::Hazard => 1,
            TerrainEffect::Trap => 1,
        }
    }
}

/// One hex of the battlefield snapshot.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tile {
    pub terrain: Terrain,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Tile {
    pub fn new(terrain: Terrain) -> Self {
        Self { terrain, features: Vec::new() }
    }

    pub fn with_feature(terrain: Terrain, feature: Feature) -> Self {
        Self { terrain, features: vec![feature] }
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Cost of stepping onto this tile, or `None` when it cannot be entered.
    /// Flying flattens terrain cost to 1 but never crosses obstacles or
    /// walls.
    pub fn step_cost(&self, can_fly: bool) -> Option<i16> {
        if self.terrain == Terrain::Obstacle || self.has_feature(Feature::Wall) { return None }
        if can_fly { return Some(1) }
        match self.terrain {
            Terrain::Normal => Some(1),
            Terrain::Difficult => Some(2),
            Terrain::Hazardous => Some(3),
            Terrain::Obstacle => None,
        }
    }

    /// Effects applied once per entry, in a fixed order.
    pub fn entry_effects(&self) -> Vec<TerrainEffect> {
        let mut effects = Vec::new();
        if self.terrain == Terrain::Hazardous { effects.push(TerrainEffect::Hazard); }
        if self.has_feature(Feature::Trap) { effects.push(TerrainEffect::Trap); }
        effects
    }
}

/// Battlefield snapshot: hex → tile. Absent coordinate means off-map, which
/// is always impassable. Supplied fresh per engine call, never cached.
pub type Grid = axial::Map<Tile>;

/// Hexes currently blocked by units. Supplied fresh per engine call.
pub type Occupancy = HashSet<Axial>;

//! Tile storage keyed by hex coordinate.
//!
//! Dual store: a `HashMap` for O(1) lookup and a `BTreeMap` for ordered,
//! deterministic iteration. A coordinate with no entry is off-map.

use std::collections::{BTreeMap, HashMap};

use derive_more::*;

use crate::axial::Axial;

#[derive(Clone, Debug, Default, IntoIterator)]
pub struct Map<T> {
    #[into_iterator(owned)]
    tree: BTreeMap<Axial, T>,
    hash: HashMap<Axial, T>,
}

impl<T> Map<T>
where T: Clone {
    pub fn new() -> Self {
        Self { tree: BTreeMap::new(), hash: HashMap::new() }
    }

    pub fn get(&self, at: Axial) -> Option<&T> {
        self.hash.get(&at)
    }

    pub fn contains(&self, at: Axial) -> bool {
        self.hash.contains_key(&at)
    }

    pub fn insert(&mut self, at: Axial, obj: T) {
        self.tree.insert(at, obj.clone());
        self.hash.insert(at, obj);
    }

    pub fn remove(&mut self, at: Axial) -> Option<T> {
        self.tree.remove(&at);
        self.hash.remove(&at)
    }

    pub fn len(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Axial, &T)> {
        self.tree.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Axial> {
        self.tree.keys()
    }

    /// The neighbors of `at` that exist on the map, in direction-table order.
    pub fn neighbors(&self, at: Axial) -> Vec<(Axial, T)> {
        let mut neighbors = Vec::new();
        for check in at.neighbors() {
            let Some(obj) = self.get(check) else { continue };
            neighbors.push((check, obj.clone()));
        }
        neighbors
    }
}

impl<T> FromIterator<(Axial, T)> for Map<T>
where T: Clone {
    fn from_iter<I: IntoIterator<Item = (Axial, T)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (at, obj) in iter {
            map.insert(at, obj);
        }
        map
    }
}

//! Movement-budget reachability.

use std::collections::{HashMap, HashSet, VecDeque};

use axial::Axial;

use crate::tile::{Grid, Occupancy};

/// All hexes reachable from `start` with total traversal cost ≤ `budget`,
/// excluding `start` itself. Rejection rules match `find_path`, with no
/// goal exemption for occupancy.
///
/// Flood fill carrying the cheapest known cost per hex. A hex is re-enqueued
/// only when a strictly cheaper cost is found, so a hex already reached via
/// a cheaper-or-equal path is never re-expanded. Recording the cheapest cost
/// rather than the first-found cost keeps the result order-independent:
/// raising the budget can only grow the set.
pub fn reachable_hexes(
    grid: &Grid,
    occupied: Option<&Occupancy>,
    start: Axial,
    budget: i16,
    can_fly: bool,
) -> HashSet<Axial> {
    debug_assert!(budget >= 0, "movement budget must be non-negative, got {budget}");
    if budget <= 0 || !grid.contains(start) { return HashSet::new() }

    let mut best = HashMap::from([(start, 0_i16)]);
    let mut frontier = VecDeque::from([(start, 0_i16)]);
    while let Some((at, spent)) = frontier.pop_front() {
        // superseded by a cheaper visit queued after this entry
        if best.get(&at).is_some_and(|&cheapest| cheapest < spent) { continue }
        for next in at.neighbors() {
            let Some(tile) = grid.get(next) else { continue };
            let Some(cost) = tile.step_cost(can_fly) else { continue };
            if occupied.is_some_and(|it| it.contains(&next)) { continue }
            let total = spent + cost;
            if total > budget { continue }
            if best.get(&next).is_some_and(|&cheapest| cheapest <= total) { continue }
            best.insert(next, total);
            frontier.push_back((next, total));
        }
    }
    best.into_keys().filter(|at| *at != start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfind::find_path;
    use crate::tile::{Feature, Terrain, Tile};

    fn hex_patch(radius: i16, terrain: Terrain) -> Grid {
        let mut grid = Grid::new();
        for q in -radius..=radius {
            for r in -radius..=radius {
                let at = Axial { q, r };
                if Axial::ZERO.distance(&at) <= radius {
                    grid.insert(at, Tile::new(terrain));
                }
            }
        }
        grid
    }

    #[test]
    fn test_excludes_start() {
        let grid = hex_patch(2, Terrain::Normal);
        let reachable = reachable_hexes(&grid, None, Axial::ZERO, 2, false);
        assert!(!reachable.contains(&Axial::ZERO));
    }

    #[test]
    fn test_budget_rings_on_open_ground() {
        let grid = hex_patch(3, Terrain::Normal);
        let reachable = reachable_hexes(&grid, None, Axial::ZERO, 2, false);

        // rings 1 and 2 of a hex board: 6 + 12 hexes
        assert_eq!(reachable.len(), 18);
        for at in &reachable {
            assert!(Axial::ZERO.distance(at) <= 2);
        }
    }

    #[test]
    fn test_zero_budget_reaches_nothing() {
        let grid = hex_patch(2, Terrain::Normal);
        assert!(reachable_hexes(&grid, None, Axial::ZERO, 0, false).is_empty());
    }

    #[test]
    fn test_difficult_terrain_halves_range() {
        let grid = hex_patch(3, Terrain::Difficult);
        let reachable = reachable_hexes(&grid, None, Axial::ZERO, 4, false);

        // every step costs 2, so budget 4 buys 2 rings
        assert_eq!(reachable.len(), 18);
    }

    #[test]
    fn test_flying_flattens_cost() {
        let grid = hex_patch(3, Terrain::Difficult);
        let flying = reachable_hexes(&grid, None, Axial::ZERO, 2, true);
        let walking = reachable_hexes(&grid, None, Axial::ZERO, 2, false);

        assert_eq!(flying.len(), 18);
        assert_eq!(walking.len(), 6);
    }

    #[test]
    fn test_never_includes_off_map() {
        let grid: Grid = (0..3).map(|q| (Axial { q, r: 0 }, Tile::new(Terrain::Normal))).collect();
        let reachable = reachable_hexes(&grid, None, Axial::ZERO, 5, false);
        for at in &reachable {
            assert!(grid.contains(*at), "{:?} is off-map", at);
        }
        assert_eq!(reachable.len(), 2);
    }

    #[test]
    fn test_off_map_start_reaches_nothing() {
        // (3,0) borders the patch, so without the guard the fill would leak
        // back onto the map
        let grid = hex_patch(2, Terrain::Normal);
        assert!(reachable_hexes(&grid, None, Axial { q: 3, r: 0 }, 3, false).is_empty());
    }

    #[test]
    fn test_obstacles_walls_and_occupancy_block() {
        let mut grid = hex_patch(2, Terrain::Normal);
        grid.insert(Axial { q: 1, r: 0 }, Tile::new(Terrain::Obstacle));
        grid.insert(Axial { q: 0, r: 1 }, Tile::with_feature(Terrain::Normal, Feature::Wall));
        let occupied = Occupancy::from([Axial { q: -1, r: 0 }]);

        let reachable = reachable_hexes(&grid, Some(&occupied), Axial::ZERO, 1, false);
        assert!(!reachable.contains(&Axial { q: 1, r: 0 }));
        assert!(!reachable.contains(&Axial { q: 0, r: 1 }));
        assert!(!reachable.contains(&Axial { q: -1, r: 0 }), "no goal exemption here");
        assert_eq!(reachable.len(), 3);
    }

    #[test]
    fn test_budget_increase_is_monotonic() {
        let mut grid = hex_patch(3, Terrain::Normal);
        grid.insert(Axial { q: 1, r: 0 }, Tile::new(Terrain::Difficult));
        grid.insert(Axial { q: 0, r: 1 }, Tile::new(Terrain::Hazardous));
        grid.insert(Axial { q: -1, r: 0 }, Tile::new(Terrain::Obstacle));

        let mut previous = HashSet::new();
        for budget in 0..=6 {
            let reachable = reachable_hexes(&grid, None, Axial::ZERO, budget, false);
            assert!(
                previous.is_subset(&reachable),
                "budget {budget} lost hexes reachable at budget {}", budget - 1
            );
            previous = reachable;
        }
    }

    #[test]
    fn test_expensive_first_visit_does_not_hide_cheaper_route() {
        // (1,1) can be reached for 4 through the hazard at (0,1) or for 2
        // through (1,0); (2,1) hangs off (1,1) alone. Whichever route is
        // found first, (2,1) must stay reachable once the budget covers the
        // cheap route plus one step.
        let mut grid = Grid::new();
        grid.insert(Axial { q: 0, r: 0 }, Tile::new(Terrain::Normal));
        grid.insert(Axial { q: 0, r: 1 }, Tile::new(Terrain::Hazardous));
        grid.insert(Axial { q: 1, r: 0 }, Tile::new(Terrain::Normal));
        grid.insert(Axial { q: 1, r: 1 }, Tile::new(Terrain::Normal));
        grid.insert(Axial { q: 2, r: 1 }, Tile::new(Terrain::Normal));

        let at_3 = reachable_hexes(&grid, None, Axial::ZERO, 3, false);
        let at_4 = reachable_hexes(&grid, None, Axial::ZERO, 4, false);
        assert!(at_3.contains(&Axial { q: 2, r: 1 }));
        assert!(at_4.contains(&Axial { q: 2, r: 1 }));
        assert!(at_3.is_subset(&at_4), "budget 4 lost hexes reachable at budget 3");

        let mut previous = HashSet::new();
        for budget in 0..=6 {
            let reachable = reachable_hexes(&grid, None, Axial::ZERO, budget, false);
            assert!(previous.is_subset(&reachable));
            previous = reachable;
        }
    }

    #[test]
    fn test_every_reachable_hex_has_a_path_within_budget() {
        let mut grid = hex_patch(2, Terrain::Normal);
        grid.insert(Axial { q: 1, r: 0 }, Tile::new(Terrain::Difficult));
        let budget = 3;

        for at in reachable_hexes(&grid, None, Axial::ZERO, budget, false) {
            let path = find_path(&grid, None, Axial::ZERO, at, false)
                .unwrap_or_else(|| panic!("no path to reachable hex {:?}", at));
            let cost: i16 = path[1..].iter()
                .map(|step| grid.get(*step).and_then(|tile| tile.step_cost(false)).unwrap_or(i16::MAX))
                .sum();
            assert!(cost <= budget, "hex {:?} costs {} over budget {}", at, cost, budget);
        }
    }
}

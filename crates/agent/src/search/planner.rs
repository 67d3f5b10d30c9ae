//! A* path planning that yields only the next primitive action.
//!
//! The planner is re-run every cycle, so reconstructing more than the first
//! edge would be wasted work: the world (and our knowledge of it) may have
//! changed by the time a second step would be taken.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use arena_core::{Action, Coordinate, Direction};

use crate::knowledge::MapKnowledge;

/// Returns the next action that moves from `start` (facing `facing`) along a
/// shortest known-safe path to `target`.
///
/// Returns `None` when already at the target or when no path exists.
pub fn next_step_towards(
    map: &MapKnowledge,
    start: Coordinate,
    facing: Direction,
    target: Coordinate,
) -> Option<Action> {
    let step = first_step_towards(map, start, target)?;
    let required = start.bearing_to(step)?;
    Some(Action::toward(facing, required))
}

/// A* search returning the first cell of a shortest path.
///
/// Every intermediate cell must be visited; the target itself need not be.
/// Edges cost 1 and the heuristic is Manhattan distance, which is admissible
/// on the 4-neighborhood. Open-set ties on `f` are broken by insertion order.
pub fn first_step_towards(
    map: &MapKnowledge,
    start: Coordinate,
    target: Coordinate,
) -> Option<Coordinate> {
    if start == target {
        return None;
    }

    let traversable = |pos: Coordinate| pos == target || map.is_visited(pos);

    let mut open = BinaryHeap::new();
    let mut counter: u64 = 0;
    let mut g_scores: HashMap<Coordinate, u32> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<Coordinate, Coordinate> = HashMap::new();
    let mut closed: HashSet<Coordinate> = HashSet::new();

    open.push(Reverse((start.manhattan(target), counter, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if current == target {
            let first = first_edge(&parents, start, target);
            if let Some(step) = first {
                tracing::debug!("path {} -> {} starts with {}", start, target, step);
            }
            return first;
        }

        // Stale heap entry for a cell already expanded with a better g.
        if !closed.insert(current) {
            continue;
        }
        let g = g_scores.get(&current).copied().unwrap_or(u32::MAX);

        for neighbor in current.neighbors() {
            if !traversable(neighbor) {
                continue;
            }
            let tentative = g.saturating_add(1);
            if g_scores.get(&neighbor).is_some_and(|&known| known <= tentative) {
                continue;
            }
            g_scores.insert(neighbor, tentative);
            parents.insert(neighbor, current);
            counter += 1;
            open.push(Reverse((tentative + neighbor.manhattan(target), counter, neighbor)));
        }
    }

    tracing::debug!("no known-safe path {} -> {}", start, target);
    None
}

/// Walks parent links back from `target` to the cell right after `start`.
fn first_edge(
    parents: &HashMap<Coordinate, Coordinate>,
    start: Coordinate,
    target: Coordinate,
) -> Option<Coordinate> {
    let mut current = target;
    loop {
        let parent = *parents.get(&current)?;
        if parent == start {
            return Some(current);
        }
        current = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor(cells: &[(i32, i32)]) -> MapKnowledge {
        let mut map = MapKnowledge::new(true);
        for &(x, y) in cells {
            map.mark_visited(Coordinate::new(x, y));
        }
        map
    }

    #[test]
    fn target_behind_resolves_to_right_turn() {
        let map = corridor(&[(2, 2), (2, 3)]);
        let action = next_step_towards(
            &map,
            Coordinate::new(2, 2),
            Direction::North,
            Coordinate::new(2, 3),
        );
        assert_eq!(action, Some(Action::TurnRight));
    }

    #[test]
    fn moves_forward_when_facing_the_step() {
        let map = corridor(&[(0, 0), (1, 0), (2, 0)]);
        let action = next_step_towards(
            &map,
            Coordinate::new(0, 0),
            Direction::East,
            Coordinate::new(2, 0),
        );
        assert_eq!(action, Some(Action::MoveForward));
    }

    #[test]
    fn turns_left_for_counter_clockwise_bearing() {
        let map = corridor(&[(1, 1)]);
        // (0,1) is unvisited but is the target itself.
        let action = next_step_towards(
            &map,
            Coordinate::new(1, 1),
            Direction::North,
            Coordinate::new(0, 1),
        );
        assert_eq!(action, Some(Action::TurnLeft));
    }

    #[test]
    fn routes_around_unvisited_cells() {
        // U-shaped corridor: (0,0) -> (0,1) -> (0,2) -> (1,2) -> (2,2) -> (2,1) -> (2,0).
        // (1,0) and (1,1) were never walked, so the direct line is unavailable.
        let map = corridor(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]);
        let step = first_step_towards(&map, Coordinate::new(0, 0), Coordinate::new(2, 0));
        assert_eq!(step, Some(Coordinate::new(0, 1)));
    }

    #[test]
    fn no_path_through_unknown_ground() {
        let map = corridor(&[(0, 0)]);
        assert_eq!(first_step_towards(&map, Coordinate::new(0, 0), Coordinate::new(3, 3)), None);
    }

    #[test]
    fn already_at_target() {
        let map = corridor(&[(4, 4)]);
        assert_eq!(
            next_step_towards(&map, Coordinate::new(4, 4), Direction::West, Coordinate::new(4, 4)),
            None
        );
    }
}

//! BFS (breadth-first search) for the nearest exploration target.

use std::collections::{HashSet, VecDeque};

use arena_core::Coordinate;

use crate::knowledge::MapKnowledge;

/// Finds the nearest cell that is provably safe but not yet visited.
///
/// The search expands only through visited cells. An unvisited neighbor is a
/// candidate target and is checked with [`MapKnowledge::is_safe`]; the first
/// one that passes ends the search. Equidistant frontiers resolve by
/// discovery order, which follows the fixed neighbor order.
///
/// Returns `None` if no frontier is reachable through visited territory.
pub fn find_nearest_frontier(map: &mut MapKnowledge, start: Coordinate) -> Option<Coordinate> {
    if !map.is_visited(start) && map.is_safe(start) {
        return Some(start);
    }

    let mut queue = VecDeque::from([start]);
    let mut seen = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbor in current.neighbors() {
            if seen.contains(&neighbor) {
                continue;
            }
            if map.is_visited(neighbor) {
                seen.insert(neighbor);
                queue.push_back(neighbor);
            } else if map.is_safe(neighbor) {
                tracing::debug!("frontier {} found from {}", neighbor, start);
                return Some(neighbor);
            }
        }
    }

    tracing::debug!("no frontier reachable from {}", start);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(visited: &[(i32, i32)], breezy: &[(i32, i32)]) -> MapKnowledge {
        let mut map = MapKnowledge::new(true);
        for &(x, y) in visited {
            map.mark_visited(Coordinate::new(x, y));
        }
        for &(x, y) in breezy {
            map.record_breeze(Coordinate::new(x, y));
        }
        map
    }

    #[test]
    fn adjacent_frontier_in_neighbor_order() {
        let mut map = map_with(&[(2, 2)], &[]);
        // North is enumerated first.
        assert_eq!(
            find_nearest_frontier(&mut map, Coordinate::new(2, 2)),
            Some(Coordinate::new(2, 1))
        );
    }

    #[test]
    fn skips_past_breezy_cells_to_reach_frontier() {
        // (1,1) breezy start; (2,1) quiet visited corridor cell.
        let mut map = map_with(&[(1, 1), (2, 1)], &[(1, 1)]);
        let found = find_nearest_frontier(&mut map, Coordinate::new(1, 1));

        // (1,1) can prove nothing, so the target hangs off (2,1): north first.
        assert_eq!(found, Some(Coordinate::new(2, 0)));
    }

    #[test]
    fn never_returns_visited_cells() {
        let mut map = map_with(&[(1, 1), (1, 2), (2, 1), (2, 2)], &[]);
        let found = find_nearest_frontier(&mut map, Coordinate::new(1, 1)).unwrap();
        assert!(!map.is_visited(found));
    }

    #[test]
    fn none_when_enclosed_by_cues() {
        let mut map = map_with(&[(3, 3)], &[(3, 3)]);
        assert_eq!(find_nearest_frontier(&mut map, Coordinate::new(3, 3)), None);
    }

    #[test]
    fn does_not_tunnel_through_unvisited_cells() {
        // (2,1) is proven safe but unvisited: it is itself the frontier, and
        // nothing behind it may be offered while it has not been walked.
        let mut map = map_with(&[(1, 1)], &[(1, 1)]);
        map.mark_safe(Coordinate::new(2, 1));

        let found = find_nearest_frontier(&mut map, Coordinate::new(1, 1));
        assert_eq!(found, Some(Coordinate::new(2, 1)));
    }
}

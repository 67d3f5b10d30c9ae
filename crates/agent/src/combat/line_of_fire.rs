use arena_core::{Coordinate, Direction};

use crate::knowledge::{CellClass, MapKnowledge};

/// Returns true if no known wall sits strictly between `origin` and the cell
/// `distance` steps along `facing`.
///
/// Unknown cells are assumed passable. The end cell is where the enemy
/// stands and is never inspected.
/// The walk is linear in `distance`, so callers cap it at the sight range.
pub fn has_line_of_fire(
    map: &MapKnowledge,
    origin: Coordinate,
    facing: Direction,
    distance: u32,
) -> bool {
    for step in 1..distance {
        let Ok(step) = i32::try_from(step) else {
            break;
        };
        let pos = origin.ahead(facing, step);
        if map.classify(pos) == CellClass::Wall {
            tracing::debug!("line of fire from {} blocked by wall at {}", origin, pos);
            return false;
        }
    }
    true
}

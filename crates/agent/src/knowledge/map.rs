use std::collections::{HashMap, HashSet};

use arena_core::Coordinate;

/// Classification of a single cell. `Unknown` is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum CellClass {
    Unknown,
    Safe,
    Wall,
}

/// Map knowledge accumulated over one session.
///
/// # Invariants
///
/// - every visited cell is in `safe` and classified [`CellClass::Safe`]
/// - `safe` and `hazards` are disjoint
/// - breeze/flash sources are evidence only and never hazards themselves
#[derive(Clone, Debug, Default)]
pub struct MapKnowledge {
    cells: HashMap<Coordinate, CellClass>,
    visited: HashSet<Coordinate>,
    safe: HashSet<Coordinate>,
    hazards: HashSet<Coordinate>,
    breeze_sources: HashSet<Coordinate>,
    flash_sources: HashSet<Coordinate>,
    non_negative_grid: bool,
}

impl MapKnowledge {
    pub fn new(non_negative_grid: bool) -> Self {
        Self {
            non_negative_grid,
            ..Self::default()
        }
    }

    /// Records that the agent stands on `pos`. Standing there proves it safe.
    pub fn mark_visited(&mut self, pos: Coordinate) {
        if self.hazards.remove(&pos) {
            tracing::warn!("standing on {} which was recorded as a hazard; clearing it", pos);
        }
        self.visited.insert(pos);
        self.mark_safe(pos);
    }

    pub(crate) fn mark_safe(&mut self, pos: Coordinate) {
        self.safe.insert(pos);
        self.cells.insert(pos, CellClass::Safe);
    }

    /// Records a wall at `pos`, inferred from a refused move.
    ///
    /// Returns `false` without changing anything if `pos` was visited: a cell
    /// we stood on cannot be a wall, so the cue is inconsistent.
    pub fn mark_wall(&mut self, pos: Coordinate) -> bool {
        if self.visited.contains(&pos) {
            tracing::warn!("ignoring wall inference at visited cell {}", pos);
            return false;
        }
        self.safe.remove(&pos);
        self.hazards.insert(pos);
        self.cells.insert(pos, CellClass::Wall);
        true
    }

    pub fn record_breeze(&mut self, pos: Coordinate) {
        self.breeze_sources.insert(pos);
    }

    pub fn record_flash(&mut self, pos: Coordinate) {
        self.flash_sources.insert(pos);
    }

    /// Classification lookup; absent cells are `Unknown`.
    pub fn classify(&self, pos: Coordinate) -> CellClass {
        self.cells.get(&pos).copied().unwrap_or(CellClass::Unknown)
    }

    pub fn is_visited(&self, pos: Coordinate) -> bool {
        self.visited.contains(&pos)
    }

    /// Membership in the safe set, without attempting inference.
    pub fn is_known_safe(&self, pos: Coordinate) -> bool {
        self.safe.contains(&pos)
    }

    pub fn is_hazard(&self, pos: Coordinate) -> bool {
        self.hazards.contains(&pos)
    }

    pub fn has_breeze(&self, pos: Coordinate) -> bool {
        self.breeze_sources.contains(&pos)
    }

    pub fn has_flash(&self, pos: Coordinate) -> bool {
        self.flash_sources.contains(&pos)
    }

    /// Off-map cells when the grid is known to start at the origin.
    pub fn is_off_map(&self, pos: Coordinate) -> bool {
        self.non_negative_grid && !pos.is_non_negative()
    }

    pub fn visited(&self) -> impl Iterator<Item = &Coordinate> {
        self.visited.iter()
    }
}

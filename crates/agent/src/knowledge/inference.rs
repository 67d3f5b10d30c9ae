//! Local safety inference.
//!
//! Hazards (pits, teleports) always announce themselves to their orthogonal
//! neighbors with a breeze or flash. Contrapositive: a visited neighbor that
//! sensed neither proves the cell hazard-free. The inference is one hop only;
//! no constraint propagation across several breeze readings.

use arena_core::Coordinate;

use super::MapKnowledge;

impl MapKnowledge {
    /// Returns true if `pos` is known or provably safe.
    ///
    /// A successful proof is recorded, so once this returns true for a cell
    /// it keeps returning true (barring a later wall proof).
    pub fn is_safe(&mut self, pos: Coordinate) -> bool {
        if self.is_off_map(pos) {
            return false;
        }
        if self.is_known_safe(pos) {
            return true;
        }
        if self.is_hazard(pos) {
            return false;
        }

        match self.safety_witness(pos) {
            Some(witness) => {
                tracing::debug!("inferred {} safe from cue-free neighbor {}", pos, witness);
                self.mark_safe(pos);
                true
            }
            None => false,
        }
    }

    /// First visited neighbor (N, E, S, W order) that sensed no breeze or flash.
    pub fn safety_witness(&self, pos: Coordinate) -> Option<Coordinate> {
        pos.neighbors().into_iter().find(|neighbor| {
            self.is_visited(*neighbor) && !self.has_breeze(*neighbor) && !self.has_flash(*neighbor)
        })
    }
}

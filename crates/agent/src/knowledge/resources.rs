use std::collections::BTreeSet;

use arena_core::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Gold,
    PowerUp,
}

/// Remembered item cells.
///
/// Entries are added when the item glow is sensed and removed when the cell
/// is revisited without the glow (the item is assumed consumed). Ordered sets
/// keep nearest-item selection deterministic across runs.
#[derive(Clone, Debug, Default)]
pub struct ResourceMemory {
    gold: BTreeSet<Coordinate>,
    power_ups: BTreeSet<Coordinate>,
}

impl ResourceMemory {
    fn set(&self, kind: ResourceKind) -> &BTreeSet<Coordinate> {
        match kind {
            ResourceKind::Gold => &self.gold,
            ResourceKind::PowerUp => &self.power_ups,
        }
    }

    fn set_mut(&mut self, kind: ResourceKind) -> &mut BTreeSet<Coordinate> {
        match kind {
            ResourceKind::Gold => &mut self.gold,
            ResourceKind::PowerUp => &mut self.power_ups,
        }
    }

    pub fn remember(&mut self, kind: ResourceKind, pos: Coordinate) {
        if self.set_mut(kind).insert(pos) {
            tracing::debug!("remembering {} at {}", kind, pos);
        }
    }

    pub fn forget(&mut self, kind: ResourceKind, pos: Coordinate) -> bool {
        let removed = self.set_mut(kind).remove(&pos);
        if removed {
            tracing::debug!("forgetting {} at {}", kind, pos);
        }
        removed
    }

    /// Syncs memory for the current cell with what is sensed there now.
    pub fn reconcile(&mut self, kind: ResourceKind, pos: Coordinate, sensed: bool) {
        if sensed {
            self.remember(kind, pos);
        } else {
            self.forget(kind, pos);
        }
    }

    pub fn contains(&self, kind: ResourceKind, pos: Coordinate) -> bool {
        self.set(kind).contains(&pos)
    }

    pub fn is_empty(&self, kind: ResourceKind) -> bool {
        self.set(kind).is_empty()
    }

    /// Closest remembered cell by Manhattan distance; ties go to the
    /// smallest coordinate.
    pub fn nearest(&self, kind: ResourceKind, from: Coordinate) -> Option<Coordinate> {
        self.set(kind)
            .iter()
            .copied()
            .min_by_key(|pos| (pos.manhattan(from), *pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_adds_and_purges() {
        let mut memory = ResourceMemory::default();
        let cell = Coordinate::new(3, 4);

        memory.reconcile(ResourceKind::Gold, cell, true);
        assert!(memory.contains(ResourceKind::Gold, cell));
        assert!(memory.is_empty(ResourceKind::PowerUp));

        memory.reconcile(ResourceKind::Gold, cell, false);
        assert!(memory.is_empty(ResourceKind::Gold));
    }

    #[test]
    fn nearest_breaks_ties_deterministically() {
        let mut memory = ResourceMemory::default();
        memory.remember(ResourceKind::PowerUp, Coordinate::new(5, 2));
        memory.remember(ResourceKind::PowerUp, Coordinate::new(3, 2));
        memory.remember(ResourceKind::PowerUp, Coordinate::new(1, 0));

        let from = Coordinate::new(3, 0);
        // (3, 2) and (1, 0) are both two steps away; (1, 0) sorts first.
        assert_eq!(
            memory.nearest(ResourceKind::PowerUp, from),
            Some(Coordinate::new(1, 0))
        );
        assert_eq!(memory.nearest(ResourceKind::Gold, from), None);
    }
}

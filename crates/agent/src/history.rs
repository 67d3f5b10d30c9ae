use std::collections::VecDeque;

use arena_core::Coordinate;

/// Bounded record of recent positions, newest last.
#[derive(Clone, Debug)]
pub struct PositionHistory {
    positions: VecDeque<Coordinate>,
    capacity: usize,
}

impl PositionHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            positions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `pos`, evicting the oldest entry when full.
    pub fn push(&mut self, pos: Coordinate) {
        if self.positions.len() == self.capacity {
            self.positions.pop_front();
        }
        self.positions.push_back(pos);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        self.positions.contains(&pos)
    }

    /// True when the last `window` positions all share one x or one y.
    ///
    /// Standing still (or turning in place) is collinear too, which is
    /// exactly the spinning pattern this is meant to catch.
    pub fn is_stuck(&self, window: usize) -> bool {
        if window == 0 || self.positions.len() < window {
            return false;
        }
        let mut recent = self.positions.iter().rev().take(window);
        let Some(first) = recent.next().copied() else {
            return false;
        };
        let (mut same_x, mut same_y) = (true, true);
        for pos in recent {
            same_x &= pos.x == first.x;
            same_y &= pos.y == first.y;
        }
        same_x || same_y
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(cells: &[(i32, i32)]) -> PositionHistory {
        let mut history = PositionHistory::new(10);
        for &(x, y) in cells {
            history.push(Coordinate::new(x, y));
        }
        history
    }

    #[test]
    fn bounded_by_capacity() {
        let mut history = PositionHistory::new(3);
        for x in 0..5 {
            history.push(Coordinate::new(x, 0));
        }
        assert_eq!(history.len(), 3);
        assert!(!history.contains(Coordinate::new(1, 0)));
        assert!(history.contains(Coordinate::new(4, 0)));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn stuck_needs_a_full_window() {
        assert!(!history_of(&[(0, 0), (0, 1), (0, 2)]).is_stuck(4));
        assert!(history_of(&[(0, 0), (0, 1), (0, 2), (0, 3)]).is_stuck(4));
        assert!(history_of(&[(1, 5), (2, 5), (3, 5), (4, 5)]).is_stuck(4));
    }

    #[test]
    fn only_the_trailing_window_counts() {
        let history = history_of(&[(9, 9), (0, 0), (1, 0), (1, 1), (2, 1)]);
        assert!(!history.is_stuck(4));

        let history = history_of(&[(9, 9), (3, 0), (3, 1), (3, 2), (3, 3)]);
        assert!(history.is_stuck(4));
    }
}

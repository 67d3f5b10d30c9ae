use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;

/// Discrete grid cell expressed in arena coordinates.
///
/// The grid is unbounded with no wraparound. `y` grows southwards, so
/// north is `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by walking `steps` cells along `facing`.
    ///
    /// Saturates at the edge of the `i32` range instead of wrapping.
    pub fn ahead(self, facing: Direction, steps: i32) -> Self {
        let (dx, dy) = facing.delta();
        Self::new(
            self.x.saturating_add(dx.saturating_mul(steps)),
            self.y.saturating_add(dy.saturating_mul(steps)),
        )
    }

    /// Orthogonal neighbors in N, E, S, W order.
    ///
    /// Every search in the agent enumerates neighbors in this order, which is
    /// what makes tie-breaking between equidistant cells deterministic.
    pub fn neighbors(self) -> [Coordinate; 4] {
        Direction::ALL.map(|dir| self.ahead(dir, 1))
    }

    pub fn manhattan(self, other: Coordinate) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Direction of an orthogonally adjacent cell, if `other` is one.
    pub fn bearing_to(self, other: Coordinate) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.ahead(*dir, 1) == other)
    }

    pub const fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Facing direction. Variant order is the clockwise turn cycle.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position in the clockwise cycle (north = 0).
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn turned_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn turned_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Clockwise quarter turns needed to face `required` (0..=3).
    pub const fn quarter_turns_to(self, required: Direction) -> usize {
        (required.index() + 4 - self.index()) % 4
    }

    /// True for north/south, whose lateral axis is `x`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Parses a protocol direction tag, case-insensitively.
    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        Self::from_str(raw.trim()).map_err(|_| ProtocolError::UnknownDirection(raw.to_owned()))
    }
}

/// Session lifecycle tag reported by the server.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LifecycleState {
    #[default]
    Ready,
    Game,
    #[strum(to_string = "over", serialize = "gameover")]
    #[cfg_attr(feature = "serde", serde(alias = "gameover"))]
    Over,
}

impl LifecycleState {
    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        Self::from_str(raw.trim()).map_err(|_| ProtocolError::UnknownLifecycle(raw.to_owned()))
    }
}

/// Own status as last reported by the server. Replaced wholesale on update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStatus {
    pub position: Coordinate,
    pub facing: Direction,
    pub lifecycle: LifecycleState,
    pub score: i64,
    pub energy: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_clockwise_order() {
        let around = Coordinate::new(3, 3).neighbors();
        assert_eq!(
            around,
            [
                Coordinate::new(3, 2),
                Coordinate::new(4, 3),
                Coordinate::new(3, 4),
                Coordinate::new(2, 3),
            ]
        );
    }

    #[test]
    fn north_decreases_y() {
        assert_eq!(
            Coordinate::ORIGIN.ahead(Direction::North, 2),
            Coordinate::new(0, -2)
        );
        assert_eq!(
            Coordinate::ORIGIN.ahead(Direction::West, 1),
            Coordinate::new(-1, 0)
        );
    }

    #[test]
    fn far_projection_saturates_at_grid_edge() {
        let from = Coordinate::new(5, -5);
        assert_eq!(
            from.ahead(Direction::East, i32::MAX),
            Coordinate::new(i32::MAX, -5)
        );
        assert_eq!(
            from.ahead(Direction::North, i32::MAX),
            Coordinate::new(5, i32::MIN)
        );

        let corner = Coordinate::new(i32::MIN, i32::MIN);
        let opposite = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(corner.manhattan(opposite), u32::MAX);
    }

    #[test]
    fn quarter_turns_wrap_around_the_cycle() {
        assert_eq!(Direction::North.quarter_turns_to(Direction::East), 1);
        assert_eq!(Direction::North.quarter_turns_to(Direction::West), 3);
        assert_eq!(Direction::West.quarter_turns_to(Direction::North), 1);
        assert_eq!(Direction::South.quarter_turns_to(Direction::North), 2);
        assert_eq!(Direction::East.turned_left(), Direction::North);
        assert_eq!(Direction::West.turned_right(), Direction::North);
    }

    #[test]
    fn bearing_only_for_adjacent_cells() {
        let origin = Coordinate::new(1, 1);
        assert_eq!(origin.bearing_to(Coordinate::new(1, 2)), Some(Direction::South));
        assert_eq!(origin.bearing_to(Coordinate::new(2, 2)), None);
        assert_eq!(origin.bearing_to(origin), None);
    }

    #[test]
    fn direction_and_lifecycle_parse_case_insensitively() {
        assert_eq!(Direction::parse("NORTH"), Ok(Direction::North));
        assert_eq!(Direction::parse(" west "), Ok(Direction::West));
        assert!(matches!(
            Direction::parse("up"),
            Err(ProtocolError::UnknownDirection(_))
        ));

        assert_eq!(LifecycleState::parse("Game"), Ok(LifecycleState::Game));
        assert_eq!(LifecycleState::parse("GameOver"), Ok(LifecycleState::Over));
        assert_eq!(LifecycleState::Over.to_string(), "over");
    }
}

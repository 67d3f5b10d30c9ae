use crate::state::LifecycleState;

/// One row of the server scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
    #[cfg_attr(feature = "serde", serde(default = "connected_by_default"))]
    pub connected: bool,
}

#[cfg(feature = "serde")]
fn connected_by_default() -> bool {
    true
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
            connected: true,
        }
    }
}

/// Scoreboard snapshot plus match clock, delivered periodically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreboardUpdate {
    pub entries: Vec<ScoreEntry>,
    /// Seconds elapsed since the match started.
    pub game_time_secs: u32,
    pub lifecycle: LifecycleState,
}

//! Protocol vocabulary and plain data shared by the arena agent crates.
//!
//! `arena-core` defines the typed boundary between the decision engine and the
//! external transport: sensor [`Cue`]s coming in, a single [`Action`] going
//! out, and the status/scoreboard records refreshed every cycle. Nothing here
//! performs I/O or holds mutable session state; the decision logic lives in
//! `arena-agent`.
pub mod error;
pub mod protocol;
pub mod scoreboard;
pub mod state;

pub use error::ProtocolError;
pub use protocol::{Action, Cue};
pub use scoreboard::{ScoreEntry, ScoreboardUpdate};
pub use state::{AgentStatus, Coordinate, Direction, LifecycleState};

//! Decision engine for an agent in a partially observable combat arena.
//!
//! The arena is an unbounded grid hiding pits, teleports and walls. The
//! agent senses only its own cell (breeze, flash, item glow, footsteps, an
//! enemy straight ahead) and answers every cycle with one primitive action.
//!
//! # Architecture
//!
//! - [`knowledge`]: map classification, one-hop safety inference, item memory
//! - [`search`]: BFS frontier search and the single-step A* planner
//! - [`combat`]: line of fire, enemy tracking, the strafe maneuver
//! - [`strategy`]: scoreboard standings and the strategic mode
//! - [`policy`]: the tiered decision ladder and its blackboard
//! - [`Agent`]: facade tying the above to the transport's update calls
//!
//! All state is owned per [`Agent`] and lives for one session. The engine is
//! single-threaded and synchronous; callers that receive updates on several
//! threads must serialize access themselves.

pub mod agent;
pub mod combat;
pub mod config;
pub mod events;
pub mod history;
pub mod knowledge;
pub mod policy;
pub mod search;
pub mod strategy;

pub use agent::Agent;
pub use combat::ShotCall;
pub use config::{AgentConfig, ConfigError};
pub use events::AgentEvent;
pub use knowledge::{CellClass, MapKnowledge, ResourceKind};
pub use policy::AgentState;
pub use strategy::{Standings, StrategicMode};

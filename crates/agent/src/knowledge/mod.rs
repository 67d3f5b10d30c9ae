//! What the agent knows about the arena.
//!
//! - [`map`]: cell classification and the visited/safe/hazard/cue-source sets
//! - [`inference`]: one-hop safety proofs from cue-free visited neighbors
//! - [`resources`]: remembered gold and power-up cells
//!
//! All knowledge is per-agent and lives for one session. Safety only grows;
//! the single exception is a wall proven by a refused move.

pub mod inference;
pub mod map;
pub mod resources;

pub use map::{CellClass, MapKnowledge};
pub use resources::{ResourceKind, ResourceMemory};

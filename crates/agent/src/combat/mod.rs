//! Threat assessment and the combat maneuvers built on it.
//!
//! - [`line_of_fire`]: straight-line wall check along the current facing
//! - [`tracker`]: enemy position estimates, velocities, and shot calls
//! - [`strafe`]: the three-cycle turn, advance, turn-back maneuver

pub mod line_of_fire;
pub mod strafe;
pub mod tracker;

pub use line_of_fire::has_line_of_fire;
pub use strafe::StrafeState;
pub use tracker::{EnemyTrack, EnemyTracker, ShotCall, TrackId};

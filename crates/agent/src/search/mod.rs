//! Graph searches over known-safe territory.
//!
//! Both searches walk the 4-neighborhood in N, E, S, W order and only step
//! through visited cells, so every returned target or step is reachable
//! without crossing unproven ground.

pub mod frontier;
pub mod planner;

pub use frontier::find_nearest_frontier;
pub use planner::{first_step_towards, next_step_towards};

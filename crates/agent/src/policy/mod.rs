//! Priority arbitration over everything the agent knows.
//!
//! The policy is an explicit [`Ladder`] of named tiers evaluated once per
//! cycle against an [`AgentContext`]:
//!
//! ```text
//! anti_stuck        collinear history, no gold known -> turn right
//! critical_energy   energy < critical                -> power-up here / toward nearest
//! refuel            critical <= energy < refuel      -> power-up here / toward nearest
//! gold              glow here / toward nearest gold
//! retreat           enemy visible, low energy or DEFENSIVE -> random turn
//! engage            enemy visible -> attack / close in / start strafe
//! strafe            continue strafe
//! events            pending damage/hit -> spin
//! hunt              steps sensed -> spin
//! explore           next step toward nearest frontier
//! fallback          scored forward/right/left
//! ```
//!
//! The ladder's default (`virar_direita`) guarantees an action even if a
//! future tier list stops ending in an unconditional rung.

pub mod context;
pub mod fallback;
pub mod telemetry;
pub mod tiers;

use arena_core::Action;
use decision_ladder::{Guarded, Ladder};

pub use context::AgentContext;
pub use telemetry::AgentState;

/// The agent's decision ladder in priority order.
pub fn build_ladder() -> Ladder<AgentContext, Action> {
    Ladder::new(
        vec![
            Box::new(tiers::AntiStuck),
            Box::new(Guarded::new(
                |ctx: &AgentContext| ctx.status.energy < ctx.config.critical_energy,
                Box::new(tiers::Refuel::CRITICAL),
            )),
            Box::new(Guarded::new(
                |ctx: &AgentContext| {
                    let energy = ctx.status.energy;
                    energy >= ctx.config.critical_energy && energy < ctx.config.refuel_energy
                },
                Box::new(tiers::Refuel::PROACTIVE),
            )),
            Box::new(tiers::Gold),
            Box::new(tiers::Retreat),
            Box::new(tiers::Engage),
            Box::new(tiers::Strafe),
            Box::new(tiers::Events),
            Box::new(tiers::Hunt),
            Box::new(tiers::Explore),
            Box::new(tiers::Fallback),
        ],
        Action::DEFAULT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_order() {
        assert_eq!(
            build_ladder().tier_names(),
            vec![
                tiers::ANTI_STUCK,
                tiers::CRITICAL_ENERGY,
                tiers::REFUEL,
                tiers::GOLD,
                tiers::RETREAT,
                tiers::ENGAGE,
                tiers::STRAFE,
                tiers::EVENTS,
                tiers::HUNT,
                tiers::EXPLORE,
                tiers::FALLBACK,
            ]
        );
    }
}

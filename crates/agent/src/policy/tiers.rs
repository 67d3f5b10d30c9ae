//! The rungs of the decision ladder, highest priority first.
//!
//! Every tier either acts or passes. A tier that passes may still leave a
//! trace in the context (history push, stale memory purge) and the ladder
//! order makes those side effects deterministic.

use arena_core::{Action, Cue};
use decision_ladder::{Tier, Verdict};

use super::context::AgentContext;
use super::fallback;
use crate::combat::{ShotCall, has_line_of_fire};
use crate::events::AgentEvent;
use crate::knowledge::ResourceKind;
use crate::search::find_nearest_frontier;
use crate::strategy::StrategicMode;

pub const ANTI_STUCK: &str = "anti_stuck";
pub const CRITICAL_ENERGY: &str = "critical_energy";
pub const REFUEL: &str = "refuel";
pub const GOLD: &str = "gold";
pub const RETREAT: &str = "retreat";
pub const ENGAGE: &str = "engage";
pub const STRAFE: &str = "strafe";
pub const EVENTS: &str = "events";
pub const HUNT: &str = "hunt";
pub const EXPLORE: &str = "explore";
pub const FALLBACK: &str = "fallback";

// ============================================================================
// Survival
// ============================================================================

/// Breaks out of straight-line oscillation.
///
/// Records the current position on every pass. When the trailing window is
/// collinear and no gold is worth walking toward, the history is wiped and
/// the agent turns right.
pub struct AntiStuck;

impl Tier<AgentContext, Action> for AntiStuck {
    fn name(&self) -> &'static str {
        ANTI_STUCK
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        let window = ctx.config.stuck_window;
        if ctx.history.is_stuck(window) && ctx.resources.is_empty(ResourceKind::Gold) {
            tracing::info!(
                "last {} positions collinear at {}; breaking out",
                window,
                ctx.status.position
            );
            ctx.history.clear();
            return Verdict::Act(Action::TurnRight);
        }
        ctx.history.push(ctx.status.position);
        Verdict::Pass
    }
}

/// Collects a visible power-up or walks toward the nearest remembered one.
///
/// The same tier serves both energy bands; the band itself is enforced by
/// the guard it is wrapped in.
pub struct Refuel {
    name: &'static str,
}

impl Refuel {
    pub const CRITICAL: Refuel = Refuel { name: CRITICAL_ENERGY };
    pub const PROACTIVE: Refuel = Refuel { name: REFUEL };
}

impl Tier<AgentContext, Action> for Refuel {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        if ctx.senses(&Cue::RedLight) {
            tracing::info!("{}: energy {}, power-up here", self.name, ctx.status.energy);
            return Verdict::Act(Action::CollectPowerUp);
        }
        let step = pursue(ctx, ResourceKind::PowerUp);
        if step.is_none() && self.name == CRITICAL_ENERGY {
            tracing::debug!("critical energy {} with no reachable power-up", ctx.status.energy);
        }
        step.into()
    }
}

// ============================================================================
// Looting
// ============================================================================

/// Collects gold (or an unidentified item) here, else walks toward the
/// nearest remembered gold.
pub struct Gold;

impl Tier<AgentContext, Action> for Gold {
    fn name(&self) -> &'static str {
        GOLD
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        if ctx.senses(&Cue::BlueLight) || ctx.senses(&Cue::WeakLight) {
            tracing::info!("item glow at {}; collecting", ctx.status.position);
            return Verdict::Act(Action::CollectGold);
        }
        pursue(ctx, ResourceKind::Gold).into()
    }
}

/// Next step toward the nearest remembered `kind`.
///
/// An entry on the current cell is stale (the glow would have been sensed)
/// and is dropped before retrying with the next nearest. Passes if the
/// nearest live entry has no known-safe path.
fn pursue(ctx: &mut AgentContext, kind: ResourceKind) -> Option<Action> {
    let here = ctx.status.position;
    loop {
        let target = ctx.resources.nearest(kind, here)?;
        if target == here {
            tracing::debug!("{} memory at {} is stale; discarding", kind, here);
            ctx.resources.forget(kind, here);
            continue;
        }
        let step = ctx.path_toward(target);
        if step.is_some() {
            tracing::debug!("heading for {} at {}", kind, target);
        }
        return step;
    }
}

// ============================================================================
// Combat
// ============================================================================

/// Disengages from a visible enemy when energy is low or the match calls
/// for protecting a lead.
pub struct Retreat;

impl Tier<AgentContext, Action> for Retreat {
    fn name(&self) -> &'static str {
        RETREAT
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        let Some(distance) = ctx.visible_enemy_distance() else {
            return Verdict::Pass;
        };

        let mode = ctx.strategic_mode();
        let low_energy = ctx.status.energy < ctx.config.low_energy;
        if !low_energy && mode != StrategicMode::Defensive {
            return Verdict::Pass;
        }

        if mode == StrategicMode::Defensive {
            tracing::info!(
                "retreat: protecting lead (rank {}/{}), enemy at {}",
                ctx.standings.rank,
                ctx.standings.total_players,
                distance
            );
        } else {
            tracing::info!("retreat: energy {} with enemy at {}", ctx.status.energy, distance);
        }
        ctx.strafe.interrupt();
        Verdict::Act(ctx.disengage_turn())
    }
}

/// Shoots, closes in, or starts a strafe against a visible enemy.
pub struct Engage;

impl Tier<AgentContext, Action> for Engage {
    fn name(&self) -> &'static str {
        ENGAGE
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        let Some(distance) = ctx.visible_enemy_distance() else {
            return Verdict::Pass;
        };
        ctx.strafe.interrupt();

        let here = ctx.status.position;
        let facing = ctx.status.facing;
        if !has_line_of_fire(&ctx.map, here, facing, distance) {
            return Verdict::Act(ctx.strafe.begin(facing));
        }

        let call = ctx.tracker.predict_interception(
            ctx.sighted_track,
            facing,
            distance,
            ctx.config.lateral_speed_threshold,
            ctx.config.close_range,
        );
        match call {
            ShotCall::Fire => {
                tracing::info!("enemy at {} with a clear shot; attacking", distance);
                Verdict::Act(Action::Attack)
            }
            ShotCall::Reposition => {
                tracing::info!("enemy at {} moving laterally; closing in", distance);
                Verdict::Act(Action::MoveForward)
            }
        }
    }
}

/// Continues an in-progress strafe.
pub struct Strafe;

impl Tier<AgentContext, Action> for Strafe {
    fn name(&self) -> &'static str {
        STRAFE
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        ctx.strafe.advance().into()
    }
}

/// Reacts to one pending out-of-band event by spinning to reacquire.
pub struct Events;

impl Tier<AgentContext, Action> for Events {
    fn name(&self) -> &'static str {
        EVENTS
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        let Some(event) = ctx.events.pop() else {
            return Verdict::Pass;
        };
        match event {
            AgentEvent::UnderAttack => tracing::info!("under attack; spinning to find the shooter"),
            AgentEvent::ShotConnected => {
                tracing::info!("shot connected; spinning to keep pressure")
            }
        }
        Verdict::Act(Action::TurnRight)
    }
}

/// Footsteps without a sighting: spin to bring the enemy into view.
pub struct Hunt;

impl Tier<AgentContext, Action> for Hunt {
    fn name(&self) -> &'static str {
        HUNT
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        if !ctx.enemy_nearby {
            return Verdict::Pass;
        }
        ctx.enemy_nearby = false;

        if ctx.strategic_mode() == StrategicMode::Aggressive {
            tracing::info!(
                "steps nearby; hunting actively from rank {}/{}",
                ctx.standings.rank,
                ctx.standings.total_players
            );
        } else {
            tracing::info!("steps nearby; scanning");
        }
        Verdict::Act(Action::TurnRight)
    }
}

// ============================================================================
// Movement
// ============================================================================

/// Walks toward the nearest safe unvisited cell.
pub struct Explore;

impl Tier<AgentContext, Action> for Explore {
    fn name(&self) -> &'static str {
        EXPLORE
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        let here = ctx.status.position;
        let Some(frontier) = find_nearest_frontier(&mut ctx.map, here) else {
            return Verdict::Pass;
        };
        ctx.path_toward(frontier).into()
    }
}

/// Scores the three movement primitives when nothing above applied.
pub struct Fallback;

impl Tier<AgentContext, Action> for Fallback {
    fn name(&self) -> &'static str {
        FALLBACK
    }

    fn evaluate(&self, ctx: &mut AgentContext) -> Verdict<Action> {
        Verdict::Act(fallback::best_move(ctx))
    }
}

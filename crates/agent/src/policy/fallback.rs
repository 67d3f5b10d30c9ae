//! Scored last-resort move when no frontier is reachable.

use arena_core::{Action, Coordinate};

use super::context::AgentContext;

const CANDIDATES: [Action; 3] = [Action::MoveForward, Action::TurnRight, Action::TurnLeft];

const SCORE_FRESH: i32 = 30;
const SCORE_REVISIT: i32 = 20;
const SCORE_UNKNOWN: i32 = 10;

/// Picks the candidate whose resulting cell is most desirable.
///
/// A turn is judged by the cell it will face. Hazards, walls and off-map
/// cells are excluded outright; recently occupied cells lose the
/// oscillation penalty. No candidates, or a flat tie across all of them,
/// yields the default turn.
pub fn best_move(ctx: &mut AgentContext) -> Action {
    let here = ctx.status.position;
    let facing = ctx.status.facing;

    let mut scored: Vec<(Action, i32)> = Vec::with_capacity(CANDIDATES.len());
    for action in CANDIDATES {
        let cell = here.ahead(action.resulting_facing(facing), 1);
        if let Some(score) = score_cell(ctx, cell) {
            scored.push((action, score));
        }
    }

    let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
        tracing::debug!("fallback: every direction is a known hazard");
        return Action::DEFAULT;
    };
    if scored.len() == CANDIDATES.len() && scored.iter().all(|&(_, score)| score == best) {
        return Action::DEFAULT;
    }

    let choice = scored
        .iter()
        .find(|&&(_, score)| score == best)
        .map_or(Action::DEFAULT, |&(action, _)| action);
    tracing::debug!("fallback: {} scored {} ({:?})", choice, best, scored);
    choice
}

fn score_cell(ctx: &mut AgentContext, cell: Coordinate) -> Option<i32> {
    if ctx.map.is_off_map(cell) || ctx.map.is_hazard(cell) {
        return None;
    }

    let base = if ctx.map.is_safe(cell) {
        if ctx.map.is_visited(cell) {
            SCORE_REVISIT
        } else {
            SCORE_FRESH
        }
    } else {
        SCORE_UNKNOWN
    };

    if ctx.history.contains(cell) {
        Some(base - ctx.config.oscillation_penalty)
    } else {
        Some(base)
    }
}

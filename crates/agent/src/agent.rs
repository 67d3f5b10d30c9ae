//! Public facade over the decision engine.

use arena_core::{Action, AgentStatus, Coordinate, Cue, ScoreboardUpdate};
use decision_ladder::{Decision, Ladder};

use crate::combat::{self, ShotCall};
use crate::config::AgentConfig;
use crate::knowledge::{MapKnowledge, ResourceMemory};
use crate::policy::{self, AgentContext, AgentState};
use crate::search;
use crate::strategy::{Standings, StrategicMode};

/// One arena agent for one session.
///
/// Drive it once per cycle: feed the latest status and observation (or
/// [`Agent::clear_observations`] when the server sent none), optionally a
/// scoreboard, then call [`Agent::decide`] and transmit the returned action.
/// The agent performs no I/O and never blocks.
///
/// # Example
///
/// ```
/// use arena_agent::{Agent, AgentConfig};
/// use arena_core::{Action, AgentStatus, Cue};
///
/// let mut agent = Agent::new(AgentConfig::default());
/// agent.record_status(AgentStatus { energy: 100, ..AgentStatus::default() });
/// agent.record_observation(&[Cue::BlueLight]);
/// assert_eq!(agent.decide(), Action::CollectGold);
/// ```
pub struct Agent {
    ctx: AgentContext,
    ladder: Ladder<AgentContext, Action>,
    last_decision: Option<Decision<Action>>,
    state: AgentState,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!("agent configuration is inconsistent: {}", err);
        }
        Self {
            ctx: AgentContext::new(config),
            ladder: policy::build_ladder(),
            last_decision: None,
            state: AgentState::default(),
        }
    }

    // ========================================================================
    // Updates from the transport
    // ========================================================================

    pub fn record_status(&mut self, status: AgentStatus) {
        self.ctx.record_status(status);
    }

    pub fn record_observation(&mut self, cues: &[Cue]) {
        self.ctx.record_observation(cues);
    }

    /// Parses raw cue strings and records them. Unknown strings are kept as
    /// [`Cue::Unrecognized`] and otherwise ignored.
    pub fn record_raw_observation<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cues = Cue::parse_all(raw);
        self.ctx.record_observation(&cues);
    }

    pub fn clear_observations(&mut self) {
        self.ctx.clear_observations();
    }

    pub fn update_scoreboard(&mut self, update: &ScoreboardUpdate) {
        self.ctx.update_scoreboard(update);
    }

    /// Overrides the remembered previous action.
    ///
    /// [`Agent::decide`] records its own output, so this is only needed
    /// when the transport sent something the agent did not choose.
    pub fn note_action(&mut self, action: Action) {
        self.ctx.last_action = Some(action);
    }

    // ========================================================================
    // Decision
    // ========================================================================

    /// Chooses exactly one action for this cycle.
    pub fn decide(&mut self) -> Action {
        let decision = self.ladder.decide(&mut self.ctx);
        let state = AgentState::from_tier(decision.tier);
        if state != self.state {
            tracing::info!("agent state {} -> {}", self.state, state);
            self.state = state;
        }
        tracing::debug!(
            "decided {} via {} at {} facing {} (energy {})",
            decision.action,
            decision.tier,
            self.ctx.status.position,
            self.ctx.status.facing,
            self.ctx.status.energy
        );

        self.ctx.last_action = Some(decision.action);
        self.last_decision = Some(decision);
        decision.action
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Proves `pos` safe if possible. A successful proof is remembered.
    pub fn is_safe(&mut self, pos: Coordinate) -> bool {
        self.ctx.map.is_safe(pos)
    }

    pub fn find_nearest_frontier(&mut self) -> Option<Coordinate> {
        let here = self.ctx.status.position;
        search::find_nearest_frontier(&mut self.ctx.map, here)
    }

    pub fn next_step_towards(&self, target: Coordinate) -> Option<Action> {
        self.ctx.path_toward(target)
    }

    /// Line of fire along the current facing. `None` scans the default depth;
    /// the scan never reaches past the configured sight range.
    pub fn has_line_of_fire(&self, distance: Option<u32>) -> bool {
        let distance = self.ctx.config.sight_distance(distance);
        combat::has_line_of_fire(
            &self.ctx.map,
            self.ctx.status.position,
            self.ctx.status.facing,
            distance,
        )
    }

    /// Shot recommendation for the enemy sighted in the current observation.
    pub fn predict_interception(&self, distance: u32) -> ShotCall {
        self.ctx.tracker.predict_interception(
            self.ctx.sighted_track,
            self.ctx.status.facing,
            self.ctx.config.sight_distance(Some(distance)),
            self.ctx.config.lateral_speed_threshold,
            self.ctx.config.close_range,
        )
    }

    pub fn strategic_mode(&mut self) -> StrategicMode {
        self.ctx.strategic_mode()
    }

    /// Cell `steps` ahead along the current facing.
    pub fn position_ahead(&self, steps: i32) -> Coordinate {
        self.ctx.status.position.ahead(self.ctx.status.facing, steps)
    }

    /// Orthogonal neighbors of the current cell in N, E, S, W order.
    pub fn adjacent_positions(&self) -> [Coordinate; 4] {
        self.ctx.status.position.neighbors()
    }

    pub fn status(&self) -> &AgentStatus {
        &self.ctx.status
    }

    pub fn config(&self) -> &AgentConfig {
        &self.ctx.config
    }

    pub fn map(&self) -> &MapKnowledge {
        &self.ctx.map
    }

    pub fn resources(&self) -> &ResourceMemory {
        &self.ctx.resources
    }

    pub fn standings(&self) -> &Standings {
        &self.ctx.standings
    }

    pub fn history_len(&self) -> usize {
        self.ctx.history.len()
    }

    pub fn last_decision(&self) -> Option<Decision<Action>> {
        self.last_decision
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn context(&self) -> &AgentContext {
        &self.ctx
    }
}

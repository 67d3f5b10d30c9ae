//! Decision blackboard.
//!
//! [`AgentContext`] owns every piece of per-session state the decision tiers
//! read and mutate: status, map knowledge, resource memory, combat state,
//! history and standings. It also absorbs the server's status and
//! observation updates, so ingestion and decision share one owner and need
//! no locking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arena_core::{Action, AgentStatus, Coordinate, Cue, ScoreboardUpdate};

use crate::combat::{EnemyTracker, StrafeState, TrackId};
use crate::config::AgentConfig;
use crate::events::{AgentEvent, PendingEvents};
use crate::history::PositionHistory;
use crate::knowledge::{MapKnowledge, ResourceKind, ResourceMemory};
use crate::search;
use crate::strategy::{Standings, StrategicMode};

/// Per-session state consumed by the decision ladder.
///
/// # Ownership
///
/// Every collection is created empty in [`AgentContext::new`] and owned by
/// this instance alone. Two agents never share map or memory state.
pub struct AgentContext {
    pub config: AgentConfig,

    /// Last status reported by the server.
    pub status: AgentStatus,

    pub map: MapKnowledge,
    pub resources: ResourceMemory,

    /// Environmental cues for the current cell. Event cues never land here.
    pub cues: Vec<Cue>,

    /// Set by a `steps` cue; consumed by the hunting tier.
    pub enemy_nearby: bool,

    pub events: PendingEvents,

    pub tracker: EnemyTracker,
    /// Track fed by the current observation's enemy sighting, if any.
    pub sighted_track: Option<TrackId>,
    pub strafe: StrafeState,

    pub history: PositionHistory,
    pub standings: Standings,

    /// Action emitted on the previous cycle. Correlated with `blocked`.
    pub last_action: Option<Action>,
    last_mode: StrategicMode,

    rng: StdRng,
}

impl AgentContext {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            status: AgentStatus::default(),
            map: MapKnowledge::new(config.non_negative_grid),
            resources: ResourceMemory::default(),
            cues: Vec::new(),
            enemy_nearby: false,
            events: PendingEvents::default(),
            tracker: EnemyTracker::new(config.track_match_radius, config.track_ttl_secs),
            sighted_track: None,
            strafe: StrafeState::default(),
            history: PositionHistory::new(config.history_capacity),
            standings: Standings::default(),
            last_action: None,
            last_mode: StrategicMode::default(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Replaces the status wholesale. The reported cell is proven safe.
    pub fn record_status(&mut self, status: AgentStatus) {
        self.status = status;
        self.map.mark_visited(status.position);
    }

    /// Absorbs the cue set for the current cell.
    ///
    /// An event cue (`damage`, `hit`) queues its event and returns without
    /// touching map state or the current cue set.
    pub fn record_observation(&mut self, cues: &[Cue]) {
        if cues.contains(&Cue::Damage) {
            tracing::info!("event: taking damage");
            self.events.push(AgentEvent::UnderAttack);
            return;
        }
        if cues.contains(&Cue::Hit) {
            tracing::info!("event: shot connected");
            self.events.push(AgentEvent::ShotConnected);
            return;
        }

        let here = self.status.position;
        let facing = self.status.facing;
        self.cues = cues.to_vec();
        self.sighted_track = None;
        self.map.mark_visited(here);

        for cue in cues {
            match cue {
                Cue::Breeze => self.map.record_breeze(here),
                Cue::Flash => self.map.record_flash(here),
                Cue::BlueLight => self.resources.remember(ResourceKind::Gold, here),
                Cue::RedLight => self.resources.remember(ResourceKind::PowerUp, here),
                Cue::Steps => {
                    if !self.enemy_nearby {
                        tracing::info!("steps sensed at {}; enemy nearby", here);
                    }
                    self.enemy_nearby = true;
                }
                Cue::Enemy { distance: Some(distance) } => {
                    let distance = self.config.sight_distance(Some(*distance));
                    let track = self.tracker.observe(
                        here,
                        facing,
                        distance,
                        self.standings.game_time_secs,
                    );
                    self.sighted_track = Some(track);
                }
                Cue::Enemy { distance: None } => {
                    tracing::warn!(
                        "enemy sighted with malformed distance; assuming {}",
                        self.config.default_scan_depth
                    );
                }
                Cue::Unrecognized(raw) => tracing::debug!("ignoring unrecognized cue {:?}", raw),
                Cue::Blocked | Cue::WeakLight | Cue::Damage | Cue::Hit => {}
            }
        }

        self.resources
            .reconcile(ResourceKind::Gold, here, cues.contains(&Cue::BlueLight));
        self.resources
            .reconcile(ResourceKind::PowerUp, here, cues.contains(&Cue::RedLight));

        if cues.contains(&Cue::Blocked) && self.last_action == Some(Action::MoveForward) {
            let wall = here.ahead(facing, 1);
            if self.map.mark_wall(wall) {
                tracing::info!("move from {} refused; wall at {}", here, wall);
            }
        }
    }

    /// The server reported nothing for this cycle.
    pub fn clear_observations(&mut self) {
        self.cues.clear();
        self.sighted_track = None;
        self.enemy_nearby = false;
    }

    pub fn update_scoreboard(&mut self, update: &ScoreboardUpdate) {
        self.standings.update(update, &self.config.player_name);
    }

    // ========================================================================
    // Queries used by the tiers
    // ========================================================================

    pub fn senses(&self, cue: &Cue) -> bool {
        self.cues.contains(cue)
    }

    /// Distance to the enemy straight ahead, if one is visible.
    ///
    /// A sighting whose distance could not be parsed reports the default
    /// scan depth. Distances are capped at the configured sight range.
    pub fn visible_enemy_distance(&self) -> Option<u32> {
        self.cues.iter().find_map(|cue| match cue {
            Cue::Enemy { distance } => Some(self.config.sight_distance(*distance)),
            _ => None,
        })
    }

    /// Next action toward `target` over known-safe cells.
    pub fn path_toward(&self, target: Coordinate) -> Option<Action> {
        search::next_step_towards(&self.map, self.status.position, self.status.facing, target)
    }

    /// Current strategic mode. Changes are logged with the score spread.
    pub fn strategic_mode(&mut self) -> StrategicMode {
        let mode = self.standings.strategic_mode(&self.config);
        if mode != self.last_mode {
            match self.standings.score_spread() {
                Some(spread) => tracing::info!(
                    "strategic mode {} -> {} (rank {}/{}, spread {:+})",
                    self.last_mode,
                    mode,
                    self.standings.rank,
                    self.standings.total_players,
                    spread
                ),
                None => tracing::info!("strategic mode {} -> {}", self.last_mode, mode),
            }
            self.last_mode = mode;
        }
        mode
    }

    /// Random left or right turn, drawn from the seeded session RNG.
    pub fn disengage_turn(&mut self) -> Action {
        if self.rng.gen_bool(0.5) {
            Action::TurnRight
        } else {
            Action::TurnLeft
        }
    }
}

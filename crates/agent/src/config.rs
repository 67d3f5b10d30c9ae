//! Agent tuning parameters and their environment loader.
use std::env;

/// Every threshold the decision policy consults.
///
/// Defaults reproduce the tournament-tested values. Each field can be
/// overridden from the environment through [`AgentConfig::from_env`].
#[derive(Clone, Debug, PartialEq)]
pub struct AgentConfig {
    /// Our name on the scoreboard; used to find our own row.
    pub player_name: String,

    /// Below this the agent is in the emergency refuel band.
    pub critical_energy: i32,
    /// Below this the agent refuses combat and disengages.
    pub low_energy: i32,
    /// Below this a known power-up is worth a detour.
    pub refuel_energy: i32,

    /// Positions remembered for oscillation checks.
    pub history_capacity: usize,
    /// Trailing positions that must be collinear to count as stuck.
    pub stuck_window: usize,
    /// Score deducted from a fallback candidate whose cell was recently occupied.
    pub oscillation_penalty: i32,

    /// Cells scanned ahead when an enemy's distance is unknown.
    pub default_scan_depth: u32,
    /// Farthest sighting taken at face value; longer reports are clamped.
    pub max_sight_range: u32,
    /// Lateral speed (cells/second) above which a shot is likely to miss.
    pub lateral_speed_threshold: f64,
    /// Distance at which we shoot regardless of lateral motion.
    pub close_range: u32,
    /// Manhattan radius within which a sighting joins an existing track.
    pub track_match_radius: u32,
    /// Seconds after which an unrefreshed track is dropped.
    pub track_ttl_secs: u32,

    pub match_length_secs: u32,
    /// Leading with less than this much time left turns the agent defensive.
    pub defensive_window_secs: u32,
    /// Rank percentile (rank / players) above which the agent turns aggressive.
    pub aggressive_percentile: f64,

    /// Treat negative coordinates as off-map: never inferred safe.
    pub non_negative_grid: bool,
    /// Seed for the disengage-turn coin flip.
    pub seed: u64,
}

impl AgentConfig {
    pub const DEFAULT_PLAYER_NAME: &'static str = "arena-agent";
    pub const DEFAULT_CRITICAL_ENERGY: i32 = 20;
    pub const DEFAULT_LOW_ENERGY: i32 = 30;
    pub const DEFAULT_REFUEL_ENERGY: i32 = 100;
    pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
    pub const DEFAULT_STUCK_WINDOW: usize = 4;
    pub const DEFAULT_OSCILLATION_PENALTY: i32 = 15;
    pub const DEFAULT_SCAN_DEPTH: u32 = 5;
    pub const DEFAULT_MAX_SIGHT_RANGE: u32 = 64;
    pub const DEFAULT_LATERAL_SPEED_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_CLOSE_RANGE: u32 = 3;
    pub const DEFAULT_TRACK_MATCH_RADIUS: u32 = 2;
    pub const DEFAULT_TRACK_TTL_SECS: u32 = 5;
    pub const DEFAULT_MATCH_LENGTH_SECS: u32 = 600;
    pub const DEFAULT_DEFENSIVE_WINDOW_SECS: u32 = 120;
    pub const DEFAULT_AGGRESSIVE_PERCENTILE: f64 = 0.7;

    pub fn new() -> Self {
        Self {
            player_name: Self::DEFAULT_PLAYER_NAME.to_owned(),
            critical_energy: Self::DEFAULT_CRITICAL_ENERGY,
            low_energy: Self::DEFAULT_LOW_ENERGY,
            refuel_energy: Self::DEFAULT_REFUEL_ENERGY,
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
            stuck_window: Self::DEFAULT_STUCK_WINDOW,
            oscillation_penalty: Self::DEFAULT_OSCILLATION_PENALTY,
            default_scan_depth: Self::DEFAULT_SCAN_DEPTH,
            max_sight_range: Self::DEFAULT_MAX_SIGHT_RANGE,
            lateral_speed_threshold: Self::DEFAULT_LATERAL_SPEED_THRESHOLD,
            close_range: Self::DEFAULT_CLOSE_RANGE,
            track_match_radius: Self::DEFAULT_TRACK_MATCH_RADIUS,
            track_ttl_secs: Self::DEFAULT_TRACK_TTL_SECS,
            match_length_secs: Self::DEFAULT_MATCH_LENGTH_SECS,
            defensive_window_secs: Self::DEFAULT_DEFENSIVE_WINDOW_SECS,
            aggressive_percentile: Self::DEFAULT_AGGRESSIVE_PERCENTILE,
            non_negative_grid: true,
            seed: 0,
        }
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (all optional, unparsable values are ignored):
    /// - `ARENA_PLAYER_NAME` - Scoreboard name (default: arena-agent)
    /// - `ARENA_CRITICAL_ENERGY` - Emergency refuel threshold (default: 20)
    /// - `ARENA_LOW_ENERGY` - Combat retreat threshold (default: 30)
    /// - `ARENA_REFUEL_ENERGY` - Proactive refuel threshold (default: 100)
    /// - `ARENA_HISTORY_CAPACITY` - Remembered positions (default: 10)
    /// - `ARENA_STUCK_WINDOW` - Collinear positions that mean stuck (default: 4)
    /// - `ARENA_OSCILLATION_PENALTY` - Fallback revisit penalty (default: 15)
    /// - `ARENA_SCAN_DEPTH` - Line-of-fire depth when distance unknown (default: 5)
    /// - `ARENA_MAX_SIGHT_RANGE` - Cap on reported enemy distance (default: 64)
    /// - `ARENA_LATERAL_SPEED` - Lateral speed miss threshold (default: 0.5)
    /// - `ARENA_CLOSE_RANGE` - Always-shoot distance (default: 3)
    /// - `ARENA_TRACK_RADIUS` - Enemy track match radius (default: 2)
    /// - `ARENA_TRACK_TTL` - Enemy track lifetime in seconds (default: 5)
    /// - `ARENA_MATCH_LENGTH` - Match length in seconds (default: 600)
    /// - `ARENA_DEFENSIVE_WINDOW` - Defensive end-game window (default: 120)
    /// - `ARENA_AGGRESSIVE_PERCENTILE` - Aggressive rank percentile (default: 0.7)
    /// - `ARENA_NON_NEGATIVE_GRID` - Negative cells are off-map (default: true)
    /// - `ARENA_SEED` - Disengage coin seed (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("ARENA_PLAYER_NAME") {
            config.player_name = name;
        }

        override_from_env(&mut config.critical_energy, "ARENA_CRITICAL_ENERGY");
        override_from_env(&mut config.low_energy, "ARENA_LOW_ENERGY");
        override_from_env(&mut config.refuel_energy, "ARENA_REFUEL_ENERGY");
        override_from_env(&mut config.history_capacity, "ARENA_HISTORY_CAPACITY");
        override_from_env(&mut config.stuck_window, "ARENA_STUCK_WINDOW");
        override_from_env(&mut config.oscillation_penalty, "ARENA_OSCILLATION_PENALTY");
        override_from_env(&mut config.default_scan_depth, "ARENA_SCAN_DEPTH");
        override_from_env(&mut config.max_sight_range, "ARENA_MAX_SIGHT_RANGE");
        override_from_env(&mut config.lateral_speed_threshold, "ARENA_LATERAL_SPEED");
        override_from_env(&mut config.close_range, "ARENA_CLOSE_RANGE");
        override_from_env(&mut config.track_match_radius, "ARENA_TRACK_RADIUS");
        override_from_env(&mut config.track_ttl_secs, "ARENA_TRACK_TTL");
        override_from_env(&mut config.match_length_secs, "ARENA_MATCH_LENGTH");
        override_from_env(&mut config.defensive_window_secs, "ARENA_DEFENSIVE_WINDOW");
        override_from_env(&mut config.aggressive_percentile, "ARENA_AGGRESSIVE_PERCENTILE");
        override_from_env(&mut config.non_negative_grid, "ARENA_NON_NEGATIVE_GRID");
        override_from_env(&mut config.seed, "ARENA_SEED");

        config.history_capacity = config.history_capacity.max(1);
        config
    }

    /// Rejects combinations the policy cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stuck_window < 2 {
            return Err(ConfigError::StuckWindowTooSmall(self.stuck_window));
        }
        if self.stuck_window > self.history_capacity {
            return Err(ConfigError::StuckWindowExceedsHistory {
                window: self.stuck_window,
                capacity: self.history_capacity,
            });
        }
        if self.critical_energy > self.refuel_energy {
            return Err(ConfigError::EnergyBandsInverted {
                critical: self.critical_energy,
                refuel: self.refuel_energy,
            });
        }
        if self.default_scan_depth == 0 {
            return Err(ConfigError::ZeroScanDepth);
        }
        if self.max_sight_range < self.default_scan_depth {
            return Err(ConfigError::SightRangeBelowScanDepth {
                range: self.max_sight_range,
                depth: self.default_scan_depth,
            });
        }
        Ok(())
    }

    /// Enemy distance the policy acts on.
    ///
    /// A missing distance becomes the default scan depth; anything beyond
    /// `max_sight_range` is clamped to it.
    pub fn sight_distance(&self, reported: Option<u32>) -> u32 {
        reported
            .unwrap_or(self.default_scan_depth)
            .min(self.max_sight_range)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("stuck window {0} must cover at least two positions")]
    StuckWindowTooSmall(usize),

    #[error("stuck window {window} exceeds history capacity {capacity}")]
    StuckWindowExceedsHistory { window: usize, capacity: usize },

    #[error("critical energy {critical} is above refuel energy {refuel}")]
    EnergyBandsInverted { critical: i32, refuel: i32 },

    #[error("default scan depth must be positive")]
    ZeroScanDepth,

    #[error("max sight range {range} is below the default scan depth {depth}")]
    SightRangeBelowScanDepth { range: u32, depth: u32 },
}

fn override_from_env<T>(slot: &mut T, key: &str)
where
    T: std::str::FromStr,
{
    if let Some(value) = read_env(key) {
        *slot = value;
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

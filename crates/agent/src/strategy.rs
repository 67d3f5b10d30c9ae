//! Scoreboard bookkeeping and the strategic mode derived from it.

use std::collections::BTreeMap;

use arena_core::{LifecycleState, ScoreboardUpdate};

use crate::config::AgentConfig;

/// Coarse behavioral gear. Modulates combat willingness, never adds actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum StrategicMode {
    /// Protecting a lead late in the match: avoid fights.
    Defensive,
    #[default]
    Balanced,
    /// Trailing the field: hunt actively.
    Aggressive,
}

/// Our view of the match standings, refreshed by scoreboard updates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Standings {
    pub my_score: i64,
    pub rivals: BTreeMap<String, i64>,
    /// 1-based; players with equal scores share the best rank. 0 before the
    /// first update.
    pub rank: usize,
    pub total_players: usize,
    pub game_time_secs: u32,
    pub lifecycle: LifecycleState,
}

impl Standings {
    /// Replaces the standings with `update`. Our own row is found by `my_name`;
    /// if absent, the previous own score is kept. Disconnected rivals are left
    /// out of rank and player count.
    pub fn update(&mut self, update: &ScoreboardUpdate, my_name: &str) {
        self.game_time_secs = update.game_time_secs;
        self.lifecycle = update.lifecycle;
        self.rivals.clear();

        for entry in &update.entries {
            if entry.name == my_name {
                self.my_score = entry.score;
            } else if entry.connected {
                self.rivals.insert(entry.name.clone(), entry.score);
            }
        }

        self.total_players = self.rivals.len() + 1;
        self.rank = 1 + self.rivals.values().filter(|&&score| score > self.my_score).count();

        tracing::info!(
            "scoreboard: rank {}/{}, score {}, time {}s",
            self.rank,
            self.total_players,
            self.my_score,
            self.game_time_secs
        );
    }

    /// Own score minus the best rival score; `None` without rivals.
    pub fn score_spread(&self) -> Option<i64> {
        let best = self.rivals.values().max()?;
        Some(self.my_score - best)
    }

    pub fn remaining_secs(&self, match_length_secs: u32) -> u32 {
        match_length_secs.saturating_sub(self.game_time_secs)
    }

    pub fn strategic_mode(&self, config: &AgentConfig) -> StrategicMode {
        if self.lifecycle != LifecycleState::Game || self.rivals.is_empty() {
            return StrategicMode::Balanced;
        }

        let remaining = self.remaining_secs(config.match_length_secs);
        if self.rank == 1 && remaining < config.defensive_window_secs {
            return StrategicMode::Defensive;
        }

        let percentile = self.rank as f64 / self.total_players as f64;
        if percentile > config.aggressive_percentile {
            StrategicMode::Aggressive
        } else {
            StrategicMode::Balanced
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_core::ScoreEntry;

    use super::*;

    fn board(entries: &[(&str, i64)], time: u32) -> ScoreboardUpdate {
        ScoreboardUpdate {
            entries: entries.iter().map(|&(name, score)| ScoreEntry::new(name, score)).collect(),
            game_time_secs: time,
            lifecycle: LifecycleState::Game,
        }
    }

    #[test]
    fn rank_counts_strictly_better_rivals() {
        let mut standings = Standings::default();
        standings.update(&board(&[("a", 50), ("me", 30), ("b", 30), ("c", 10)], 60), "me");

        assert_eq!(standings.rank, 2);
        assert_eq!(standings.total_players, 4);
        assert_eq!(standings.score_spread(), Some(-20));
    }

    #[test]
    fn disconnected_rivals_do_not_count() {
        let mut update = board(&[("a", 50), ("me", 30), ("b", 10)], 60);
        update.entries[0].connected = false;

        let mut standings = Standings::default();
        standings.update(&update, "me");

        assert_eq!(standings.rank, 1);
        assert_eq!(standings.total_players, 2);
        assert_eq!(standings.score_spread(), Some(20));
    }

    #[test]
    fn leader_turns_defensive_near_the_end() {
        let config = AgentConfig::default();
        let mut standings = Standings::default();

        standings.update(&board(&[("me", 90), ("a", 10)], 100), "me");
        assert_eq!(standings.strategic_mode(&config), StrategicMode::Balanced);

        standings.update(&board(&[("me", 90), ("a", 10)], 500), "me");
        assert_eq!(standings.strategic_mode(&config), StrategicMode::Defensive);
    }

    #[test]
    fn bottom_of_the_table_turns_aggressive() {
        let config = AgentConfig::default();
        let mut standings = Standings::default();
        standings.update(&board(&[("a", 90), ("b", 80), ("c", 70), ("me", 0)], 30), "me");

        assert_eq!(standings.rank, 4);
        assert_eq!(standings.strategic_mode(&config), StrategicMode::Aggressive);
    }

    #[test]
    fn balanced_outside_of_play_or_without_rivals() {
        let config = AgentConfig::default();
        let mut standings = Standings::default();
        standings.update(&board(&[("me", 0)], 590), "me");
        assert_eq!(standings.strategic_mode(&config), StrategicMode::Balanced);

        let mut update = board(&[("me", 0), ("a", 100)], 10);
        update.lifecycle = LifecycleState::Ready;
        standings.update(&update, "me");
        assert_eq!(standings.strategic_mode(&config), StrategicMode::Balanced);
    }

    #[test]
    fn mode_names() {
        assert_eq!(StrategicMode::Defensive.to_string(), "DEFENSIVE");
        assert_eq!(StrategicMode::Aggressive.as_ref(), "AGGRESSIVE");
    }
}

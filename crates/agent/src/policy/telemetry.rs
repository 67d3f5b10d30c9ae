use super::tiers;

/// Coarse label for what the agent is doing, derived from the tier that
/// produced the last action. Diagnostic only: no tier reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AgentState {
    #[default]
    Exploring,
    Collecting,
    Refueling,
    Combat,
    Retreating,
}

impl AgentState {
    pub fn from_tier(tier: &str) -> Self {
        match tier {
            tiers::CRITICAL_ENERGY | tiers::REFUEL => AgentState::Refueling,
            tiers::GOLD => AgentState::Collecting,
            tiers::RETREAT => AgentState::Retreating,
            tiers::ENGAGE | tiers::STRAFE | tiers::EVENTS | tiers::HUNT => AgentState::Combat,
            _ => AgentState::Exploring,
        }
    }
}

//! Sensor cues and command vocabulary shared with the game server.
//!
//! Both vocabularies are protocol constants: the transport sends the raw cue
//! strings and expects the raw action strings back, so the spellings below
//! must not drift from the server's.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;
use crate::state::Direction;

const ENEMY_PREFIX: &str = "enemy#";

/// A single sensor cue for the current cell.
///
/// `Damage` and `Hit` are out-of-band *event* cues; everything else is an
/// *environmental* cue describing the cell the agent stands on. Unknown
/// strings are preserved in [`Cue::Unrecognized`] and ignored downstream.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The last move was refused.
    Blocked,
    /// A pit is adjacent.
    Breeze,
    /// A teleport is adjacent.
    Flash,
    /// Gold on this cell.
    BlueLight,
    /// Power-up on this cell.
    RedLight,
    /// Some item of unknown kind on this cell.
    WeakLight,
    /// An unseen enemy is close by.
    Steps,
    /// Enemy straight ahead. `None` when the distance suffix is malformed.
    Enemy { distance: Option<u32> },
    /// We took a hit.
    Damage,
    /// Our shot connected.
    Hit,
    Unrecognized(String),
}

impl Cue {
    /// Parses one raw cue. Never fails: unknown tokens become `Unrecognized`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "blocked" => Cue::Blocked,
            "breeze" => Cue::Breeze,
            "flash" => Cue::Flash,
            "blueLight" => Cue::BlueLight,
            "redLight" => Cue::RedLight,
            "weakLight" => Cue::WeakLight,
            "steps" => Cue::Steps,
            "damage" => Cue::Damage,
            "hit" => Cue::Hit,
            _ => match raw.strip_prefix(ENEMY_PREFIX) {
                Some(_) => Cue::Enemy {
                    distance: parse_enemy_distance(raw).ok(),
                },
                None => Cue::Unrecognized(raw.to_owned()),
            },
        }
    }

    /// Parses a whole observation line split into tokens.
    pub fn parse_all<I, S>(raw: I) -> Vec<Cue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter().map(|token| Cue::parse(token.as_ref())).collect()
    }

    pub fn is_event(&self) -> bool {
        matches!(self, Cue::Damage | Cue::Hit)
    }
}

/// Extracts the integer distance from an `enemy#<n>` token.
pub fn parse_enemy_distance(raw: &str) -> Result<u32, ProtocolError> {
    raw.trim()
        .strip_prefix(ENEMY_PREFIX)
        .and_then(|suffix| suffix.trim().parse::<u32>().ok())
        .ok_or_else(|| ProtocolError::MalformedEnemyDistance(raw.to_owned()))
}

impl FromStr for Cue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Cue::parse(s))
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::Blocked => f.write_str("blocked"),
            Cue::Breeze => f.write_str("breeze"),
            Cue::Flash => f.write_str("flash"),
            Cue::BlueLight => f.write_str("blueLight"),
            Cue::RedLight => f.write_str("redLight"),
            Cue::WeakLight => f.write_str("weakLight"),
            Cue::Steps => f.write_str("steps"),
            Cue::Enemy { distance: Some(d) } => write!(f, "{ENEMY_PREFIX}{d}"),
            Cue::Enemy { distance: None } => f.write_str(ENEMY_PREFIX),
            Cue::Damage => f.write_str("damage"),
            Cue::Hit => f.write_str("hit"),
            Cue::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// One primitive command. Exactly one is emitted per decision cycle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    #[strum(serialize = "andar")]
    #[cfg_attr(feature = "serde", serde(rename = "andar"))]
    MoveForward,

    #[strum(serialize = "virar_direita")]
    #[cfg_attr(feature = "serde", serde(rename = "virar_direita"))]
    TurnRight,

    #[strum(serialize = "virar_esquerda")]
    #[cfg_attr(feature = "serde", serde(rename = "virar_esquerda"))]
    TurnLeft,

    #[strum(serialize = "atacar")]
    #[cfg_attr(feature = "serde", serde(rename = "atacar"))]
    Attack,

    #[strum(serialize = "pegar_ouro")]
    #[cfg_attr(feature = "serde", serde(rename = "pegar_ouro"))]
    CollectGold,

    #[strum(serialize = "pegar_powerup")]
    #[cfg_attr(feature = "serde", serde(rename = "pegar_powerup"))]
    CollectPowerUp,
}

impl Action {
    /// The guaranteed default when nothing better applies.
    pub const DEFAULT: Action = Action::TurnRight;

    /// Wire spelling sent to the server.
    pub fn as_protocol(self) -> &'static str {
        self.into()
    }

    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        Self::from_str(raw.trim()).map_err(|_| ProtocolError::UnknownAction(raw.to_owned()))
    }

    /// Single primitive that brings `current` closer to `required`.
    ///
    /// A 180 degree turn resolves to a right turn.
    pub fn toward(current: Direction, required: Direction) -> Self {
        match current.quarter_turns_to(required) {
            0 => Action::MoveForward,
            3 => Action::TurnLeft,
            _ => Action::TurnRight,
        }
    }

    /// Facing after this action is applied from `facing`.
    pub fn resulting_facing(self, facing: Direction) -> Direction {
        match self {
            Action::TurnRight => facing.turned_right(),
            Action::TurnLeft => facing.turned_left(),
            _ => facing,
        }
    }

    pub fn is_turn(self) -> bool {
        matches!(self, Action::TurnRight | Action::TurnLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_cues() {
        let cues = Cue::parse_all(["breeze", "flash", "blueLight", "steps", "enemy#4"]);
        assert_eq!(
            cues,
            vec![
                Cue::Breeze,
                Cue::Flash,
                Cue::BlueLight,
                Cue::Steps,
                Cue::Enemy { distance: Some(4) },
            ]
        );
    }

    #[test]
    fn malformed_enemy_keeps_sighting_without_distance() {
        assert_eq!(Cue::parse("enemy#far"), Cue::Enemy { distance: None });
        assert!(matches!(
            parse_enemy_distance("enemy#far"),
            Err(ProtocolError::MalformedEnemyDistance(_))
        ));
        assert_eq!(parse_enemy_distance("enemy#12"), Ok(12));
    }

    #[test]
    fn unknown_cues_are_preserved_not_rejected() {
        assert_eq!(Cue::parse("greenLight"), Cue::Unrecognized("greenLight".into()));
        assert_eq!(Cue::parse("enemy"), Cue::Unrecognized("enemy".into()));
        assert_eq!(Cue::parse("greenLight").to_string(), "greenLight");
    }

    #[test]
    fn event_cues_are_flagged() {
        assert!(Cue::Damage.is_event());
        assert!(Cue::Hit.is_event());
        assert!(!Cue::Breeze.is_event());
    }

    #[test]
    fn action_wire_spellings() {
        assert_eq!(Action::MoveForward.as_protocol(), "andar");
        assert_eq!(Action::TurnRight.to_string(), "virar_direita");
        assert_eq!(Action::parse("pegar_powerup"), Ok(Action::CollectPowerUp));
        assert!(Action::parse("andar_re").is_err());
    }

    #[test]
    fn turn_toward_prefers_right_on_reversal() {
        use Direction::*;
        assert_eq!(Action::toward(North, North), Action::MoveForward);
        assert_eq!(Action::toward(North, East), Action::TurnRight);
        assert_eq!(Action::toward(North, West), Action::TurnLeft);
        assert_eq!(Action::toward(North, South), Action::TurnRight);
        assert_eq!(Action::toward(East, West), Action::TurnRight);
    }
}

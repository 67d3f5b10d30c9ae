use arena_core::{Action, Direction};

/// Three-cycle maneuver around an obstruction: turn right, step, turn left.
///
/// `original` is the facing the enemy was seen along. The closing left turn
/// restores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum StrafeState {
    #[default]
    Idle,
    Turning { original: Direction },
    Moving { original: Direction },
}

impl StrafeState {
    /// Starts the maneuver. Returns the first action.
    pub fn begin(&mut self, facing: Direction) -> Action {
        *self = StrafeState::Turning { original: facing };
        tracing::info!("line of fire blocked facing {}; strafing", facing);
        Action::TurnRight
    }

    /// Emits the next action of an in-progress maneuver, or `None` when idle.
    pub fn advance(&mut self) -> Option<Action> {
        match *self {
            StrafeState::Idle => None,
            StrafeState::Turning { original } => {
                *self = StrafeState::Moving { original };
                tracing::info!("strafe: advancing");
                Some(Action::MoveForward)
            }
            StrafeState::Moving { original } => {
                *self = StrafeState::Idle;
                tracing::info!("strafe: turning back toward {}", original);
                Some(Action::TurnLeft)
            }
        }
    }

    /// Abandons any in-progress maneuver. Returns true if one was running.
    pub fn interrupt(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            tracing::debug!("strafe interrupted in state {}", self.as_str());
        }
        *self = StrafeState::Idle;
        was_active
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, StrafeState::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

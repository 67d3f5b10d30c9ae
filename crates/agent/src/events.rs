//! One-shot combat events delivered out of band.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AgentEvent {
    /// We took damage (`damage` cue).
    UnderAttack,
    /// Our shot landed (`hit` cue).
    ShotConnected,
}

/// Events waiting to be handled, oldest first.
///
/// Each kind is pending at most once: a second `damage` before the first is
/// handled does not earn a second reaction.
#[derive(Clone, Debug, Default)]
pub struct PendingEvents {
    queue: VecDeque<AgentEvent>,
}

impl PendingEvents {
    /// Queues `event` unless that kind is already pending.
    pub fn push(&mut self, event: AgentEvent) -> bool {
        if self.queue.contains(&event) {
            return false;
        }
        self.queue.push_back(event);
        true
    }

    /// Takes the oldest pending event. Each event is consumed exactly once.
    pub fn pop(&mut self) -> Option<AgentEvent> {
        self.queue.pop_front()
    }

    pub fn is_pending(&self, event: AgentEvent) -> bool {
        self.queue.contains(&event)
    }
}

//! Minimal grid world for driving an agent over many cycles.

#![allow(dead_code)]

use std::collections::HashSet;

use arena_agent::Agent;
use arena_core::{Action, AgentStatus, Coordinate, Cue, Direction, LifecycleState};

/// Rectangular world `[0, width) x [0, height)`. Leaving it is refused with a
/// `blocked` cue, the way the server reports a wall.
pub struct World {
    pub width: i32,
    pub height: i32,
    pub pits: HashSet<Coordinate>,
    pub gold: HashSet<Coordinate>,
    pub position: Coordinate,
    pub facing: Direction,
    pub energy: i32,
    blocked: bool,
}

impl World {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pits: HashSet::new(),
            gold: HashSet::new(),
            position: Coordinate::ORIGIN,
            facing: Direction::North,
            energy: 100,
            blocked: false,
        }
    }

    pub fn with_pit(mut self, x: i32, y: i32) -> Self {
        self.pits.insert(Coordinate::new(x, y));
        self
    }

    pub fn with_gold(mut self, x: i32, y: i32) -> Self {
        self.gold.insert(Coordinate::new(x, y));
        self
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            position: self.position,
            facing: self.facing,
            lifecycle: LifecycleState::Game,
            score: 0,
            energy: self.energy,
        }
    }

    pub fn cues(&self) -> Vec<Cue> {
        let mut cues = Vec::new();
        if self.blocked {
            cues.push(Cue::Blocked);
        }
        if self.position.neighbors().iter().any(|n| self.pits.contains(n)) {
            cues.push(Cue::Breeze);
        }
        if self.gold.contains(&self.position) {
            cues.push(Cue::BlueLight);
        }
        cues
    }

    pub fn apply(&mut self, action: Action) {
        self.blocked = false;
        match action {
            Action::MoveForward => {
                let next = self.position.ahead(self.facing, 1);
                if self.contains(next) {
                    self.position = next;
                } else {
                    self.blocked = true;
                }
            }
            Action::TurnRight => self.facing = self.facing.turned_right(),
            Action::TurnLeft => self.facing = self.facing.turned_left(),
            Action::CollectGold => {
                self.gold.remove(&self.position);
            }
            Action::Attack | Action::CollectPowerUp => {}
        }
    }
}

/// Runs one full cycle: status, observation, decision, world update.
pub fn cycle(agent: &mut Agent, world: &mut World) -> Action {
    agent.record_status(world.status());
    let cues = world.cues();
    if cues.is_empty() {
        agent.clear_observations();
    } else {
        agent.record_observation(&cues);
    }
    let action = agent.decide();
    world.apply(action);
    action
}

pub fn status_at(x: i32, y: i32, facing: Direction, energy: i32) -> AgentStatus {
    AgentStatus {
        position: Coordinate::new(x, y),
        facing,
        lifecycle: LifecycleState::Game,
        score: 0,
        energy,
    }
}

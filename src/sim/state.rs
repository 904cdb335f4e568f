//! Session state and core simulation types
//!
//! One `GameState` lives for the whole process; sessions reset it in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::ObstaclePair;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first activation; actor idle, no pipes spawn
    NotStarted,
    /// Physics active, pipes spawn and move, collisions evaluated
    Running,
    /// Run is over until the next activation resets it
    Ended,
}

/// Score counted in half points (one per pipe segment passed)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Score {
    halves: u32,
}

impl Score {
    pub const ZERO: Score = Score { halves: 0 };

    pub fn add_half(&mut self) {
        self.halves += 1;
    }

    /// Score as shown to the player
    pub fn value(self) -> f32 {
        self.halves as f32 * 0.5
    }

    pub fn is_whole(self) -> bool {
        self.halves.is_multiple_of(2)
    }

    /// Whole points earned (rounds half points down)
    pub fn whole(self) -> u32 {
        self.halves / 2
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole())
        } else {
            write!(f, "{}.5", self.whole())
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// Dropped past the bottom of the board
    OutOfBounds,
    /// Hit a pipe segment
    Collision,
}

/// Things that happened during a tick or activation, for collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// NotStarted -> Running
    SessionStarted,
    /// Impulse applied
    Jumped,
    /// Reached a whole point
    Scored { score: u32 },
    /// Pipe speed stepped up at a milestone
    SpeedUp { velocity_x: f32 },
    /// Running -> Ended
    SessionEnded { cause: EndCause, score: f32 },
    /// Best score beaten on entering Ended
    NewBest { best: f32 },
    /// Ended -> NotStarted
    SessionReset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: SessionPhase,
    pub actor: Actor,
    /// Live pipe pairs, oldest (leftmost) first
    pub pairs: Vec<ObstaclePair>,
    pub score: Score,
    /// Best score across sessions
    pub best: f32,
    /// Shared horizontal pipe velocity (negative is leftward)
    pub velocity_x: f32,
    /// Frames left on the score pulse
    pub score_flash: u32,
}

impl GameState {
    pub fn new(tuning: &Tuning, best: f32) -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            actor: Actor::new(tuning),
            pairs: Vec::new(),
            score: Score::ZERO,
            best: best.max(0.0),
            velocity_x: tuning.base_velocity_x,
            score_flash: 0,
        }
    }

    /// Full reset back to NotStarted. Best score survives.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.phase = SessionPhase::NotStarted;
        self.actor.reset(tuning);
        self.pairs.clear();
        self.score = Score::ZERO;
        self.velocity_x = tuning.base_velocity_x;
        self.score_flash = 0;
    }
}

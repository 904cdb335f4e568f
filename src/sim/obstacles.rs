//! Pipe pairs and the spawner that places them
//!
//! A pair is a top and bottom segment sharing one x. The opening between them
//! is placed at random on creation and never moves vertically afterwards.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameState, SessionPhase};
use crate::tuning::Tuning;

/// One half of a pipe pair
pub type Segment = Rect;

/// Top and bottom pipe moving together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub top: Segment,
    pub bottom: Segment,
    /// Set once the actor has cleared this pair; never cleared
    pub passed: bool,
}

impl ObstaclePair {
    /// Build a pair at `x` with the opening starting at `gap_y`.
    ///
    /// The top segment runs from the board top down to the gap, the bottom
    /// segment from the end of the gap to the board bottom.
    pub fn new(x: f32, gap_y: f32, tuning: &Tuning) -> Self {
        let gap_end = gap_y + tuning.gap_height;
        Self {
            top: Rect::new(x, 0.0, tuning.pipe_width, gap_y),
            bottom: Rect::new(x, gap_end, tuning.pipe_width, tuning.board_height - gap_end),
            passed: false,
        }
    }

    /// Shared x of both segments
    #[inline]
    pub fn x(&self) -> f32 {
        self.top.pos.x
    }

    /// Right edge; the actor must be past this to score
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.top.right()
    }

    /// Top edge of the opening
    pub fn gap_y(&self) -> f32 {
        self.top.bottom()
    }

    pub fn advance(&mut self, dx: f32) {
        self.top.pos.x += dx;
        self.bottom.pos.x += dx;
    }

    pub fn segments(&self) -> [&Segment; 2] {
        [&self.top, &self.bottom]
    }

    /// Fully past the left edge of the board
    pub fn is_offscreen(&self, pipe_width: f32) -> bool {
        self.x() < -pipe_width
    }
}

/// Places new pipe pairs at the right edge on a fixed period
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    rng: Pcg32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform gap position in `[min_gap_y, board_height - gap_height - min_gap_y]`
    pub fn gap_y(&mut self, tuning: &Tuning) -> f32 {
        let min = tuning.min_gap_y;
        let max = tuning.max_gap_y();
        let t: f32 = self.rng.random();
        (min + t * (max - min)).clamp(min, max)
    }

    /// Spawn timer callback. Does nothing unless the session is running.
    pub fn spawn(&mut self, state: &mut GameState, tuning: &Tuning) -> bool {
        if state.phase != SessionPhase::Running {
            return false;
        }

        let gap_y = self.gap_y(tuning);
        state.pairs.push(ObstaclePair::new(tuning.board_width, gap_y, tuning));
        log::debug!(
            "Spawned pipe pair with gap at {:.1} ({} live)",
            gap_y,
            state.pairs.len()
        );
        true
    }
}

//! Frame and spawn scheduling
//!
//! The host reports elapsed wall-clock time; the driver turns it into display
//! frames (at `frame_rate_hz`) and spawn timer firings (every
//! `spawn_period_ms`), replayed in chronological order. Queued input is
//! applied right before each frame, so it never lands mid-tick.

use std::time::Duration;

use super::input::{InputQueue, InputSender, input_channel};
use crate::Game;
use crate::consts::{MAX_FRAMES_PER_PUMP, MAX_PUMP_MS};

pub struct Driver {
    game: Game,
    inputs: InputQueue,
    sender: InputSender,
    frame_period: Duration,
    spawn_period: Duration,
    /// Time left until the next frame / spawn
    until_frame: Duration,
    until_spawn: Duration,
}

impl Driver {
    pub fn new(game: Game) -> Self {
        let tuning = game.tuning();
        let frame_period = Duration::from_secs(1) / tuning.frame_rate_hz.max(1);
        let spawn_period = Duration::from_millis(tuning.spawn_period_ms.max(1));
        let (sender, inputs) = input_channel();

        Self {
            game,
            inputs,
            sender,
            frame_period,
            spawn_period,
            until_frame: frame_period,
            until_spawn: spawn_period,
        }
    }

    /// Handle for pushing input from the host (any thread)
    pub fn sender(&self) -> InputSender {
        self.sender.clone()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Advance by `elapsed` wall-clock time. Returns the number of frames run.
    ///
    /// Long stalls (tab in background, debugger) are clamped rather than
    /// replayed in full.
    pub fn pump(&mut self, elapsed: Duration) -> u32 {
        let mut budget = elapsed.min(Duration::from_millis(MAX_PUMP_MS));
        let mut frames = 0;

        while frames < MAX_FRAMES_PER_PUMP {
            let step = self.until_frame.min(self.until_spawn);
            if step > budget {
                self.until_frame -= budget;
                self.until_spawn -= budget;
                return frames;
            }
            budget -= step;
            self.until_frame -= step;
            self.until_spawn -= step;

            // Timer callbacks due at the same instant as a frame go first
            if self.until_spawn.is_zero() {
                self.game.spawn_obstacle();
                self.until_spawn = self.spawn_period;
            }
            if self.until_frame.is_zero() {
                for _ in self.inputs.drain() {
                    self.game.activate();
                }
                self.game.frame();
                self.until_frame = self.frame_period;
                frames += 1;
            }
        }

        if !budget.is_zero() {
            log::debug!("Frame cap hit, dropping {:?} of backlog", budget);
        }
        frames
    }
}

//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-tuned from JSON
//! without recompiling. Defaults come from [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("board must have positive dimensions, got {width}x{height}")]
    EmptyBoard { width: f32, height: f32 },
    #[error("actor and pipes must have positive size")]
    EmptyBody,
    #[error("gap range is empty: min {min}, max {max}")]
    EmptyGapRange { min: f32, max: f32 },
    #[error("base velocity must move pipes left, got {0}")]
    VelocityNotLeftward(f32),
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("invalid tuning json: {0}")]
    Json(String),
}

/// Gameplay tuning for one process lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: f32,
    pub board_height: f32,

    pub actor_size: Vec2,

    pub pipe_width: f32,
    pub gap_height: f32,
    pub min_gap_y: f32,

    pub gravity: f32,
    pub jump_velocity: f32,
    pub base_velocity_x: f32,

    pub spawn_period_ms: u64,
    pub frame_rate_hz: u32,

    pub difficulty_threshold: u32,
    pub difficulty_scale: f32,

    pub rotation_factor: f32,
    pub rotation_min_deg: f32,
    pub rotation_max_deg: f32,

    pub score_flash_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            actor_size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            pipe_width: PIPE_WIDTH,
            gap_height: BOARD_HEIGHT / GAP_DIVISOR,
            min_gap_y: MIN_GAP_Y,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            base_velocity_x: BASE_VELOCITY_X,
            spawn_period_ms: SPAWN_PERIOD_MS,
            frame_rate_hz: FRAME_RATE_HZ,
            difficulty_threshold: DIFFICULTY_THRESHOLD,
            difficulty_scale: DIFFICULTY_SCALE,
            rotation_factor: ROTATION_FACTOR,
            rotation_min_deg: ROTATION_MIN_DEG,
            rotation_max_deg: ROTATION_MAX_DEG,
            score_flash_frames: SCORE_FLASH_FRAMES,
        }
    }
}

impl Tuning {
    /// Actor spawn point: an eighth of the way in, vertically centered
    pub fn actor_spawn(&self) -> Vec2 {
        Vec2::new(self.board_width / 8.0, self.board_height / 2.0)
    }

    /// Lowest allowed top edge of the gap
    pub fn max_gap_y(&self) -> f32 {
        self.board_height - self.gap_height - self.min_gap_y
    }

    /// Check invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("actor_size.x", self.actor_size.x),
            ("actor_size.y", self.actor_size.y),
            ("pipe_width", self.pipe_width),
            ("gap_height", self.gap_height),
            ("min_gap_y", self.min_gap_y),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("base_velocity_x", self.base_velocity_x),
            ("difficulty_scale", self.difficulty_scale),
            ("rotation_factor", self.rotation_factor),
            ("rotation_min_deg", self.rotation_min_deg),
            ("rotation_max_deg", self.rotation_max_deg),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(TuningError::NotFinite(name));
        }

        if self.board_width <= 0.0 || self.board_height <= 0.0 {
            return Err(TuningError::EmptyBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.actor_size.x <= 0.0 || self.actor_size.y <= 0.0 || self.pipe_width <= 0.0 {
            return Err(TuningError::EmptyBody);
        }
        if self.gap_height <= 0.0 {
            return Err(TuningError::NonPositive("gap_height"));
        }
        if self.min_gap_y < 0.0 || self.max_gap_y() < self.min_gap_y {
            return Err(TuningError::EmptyGapRange {
                min: self.min_gap_y,
                max: self.max_gap_y(),
            });
        }
        if self.base_velocity_x >= 0.0 {
            return Err(TuningError::VelocityNotLeftward(self.base_velocity_x));
        }
        if self.spawn_period_ms == 0 {
            return Err(TuningError::NonPositive("spawn_period_ms"));
        }
        if self.frame_rate_hz == 0 {
            return Err(TuningError::NonPositive("frame_rate_hz"));
        }
        if self.difficulty_threshold == 0 {
            return Err(TuningError::NonPositive("difficulty_threshold"));
        }
        // Pipes may only ever speed up
        if self.difficulty_scale < 0.0 {
            return Err(TuningError::Negative("difficulty_scale"));
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Json(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Rejected tuning {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

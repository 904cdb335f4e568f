//! Pillar Hop - a single-screen flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Simulation (actor physics, obstacles, collisions, session state)
//! - `game`: Session context that wires the simulation to its collaborators
//! - `renderer`: Abstract draw requests and the render sink seam
//! - `audio`: Sound cues and audio sinks
//! - `persistence`: Best score storage
//! - `platform`: Input normalization and the frame/spawn scheduler
//! - `tuning`: Data-driven game balance
//!
//! The crate is an rlib. On wasm32 it also exposes browser sinks
//! (`audio::web::WebAudio`, `persistence::LocalStorageStore`) for a host shell
//! that owns the canvas and DOM listeners and drives a [`platform::Driver`].

pub mod audio;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Default game constants (see [`Tuning`] for the runtime values)
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 480.0;
    pub const BOARD_HEIGHT: f32 = 720.0;

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 60.0;
    pub const ACTOR_HEIGHT: f32 = 60.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    /// Gap height is the board height divided by this
    pub const GAP_DIVISOR: f32 = 2.5;
    /// Minimum distance between the gap and the top/bottom margins
    pub const MIN_GAP_Y: f32 = 150.0;

    /// Per-frame physics (pixels per frame, pixels per frame²)
    pub const GRAVITY: f32 = 0.12;
    pub const JUMP_VELOCITY: f32 = -4.5;
    pub const BASE_VELOCITY_X: f32 = -0.6;

    /// Milliseconds between pipe spawns
    pub const SPAWN_PERIOD_MS: u64 = 2200;
    /// Display refresh used by the driver
    pub const FRAME_RATE_HZ: u32 = 60;
    /// Wall-clock time handed to one driver pump is clamped to this
    pub const MAX_PUMP_MS: u64 = 250;
    /// Frames simulated per pump at most (spiral-of-death guard)
    pub const MAX_FRAMES_PER_PUMP: u32 = 8;

    /// Difficulty: speed up every N whole points by SCALE per point
    pub const DIFFICULTY_THRESHOLD: u32 = 10;
    pub const DIFFICULTY_SCALE: f32 = 0.01;

    /// Display rotation = clamp(velocity * FACTOR, MIN, MAX) degrees
    pub const ROTATION_FACTOR: f32 = 3.0;
    pub const ROTATION_MIN_DEG: f32 = -25.0;
    pub const ROTATION_MAX_DEG: f32 = 90.0;

    /// Frames the score text pulses after a point
    pub const SCORE_FLASH_FRAMES: u32 = 10;
}

//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform dependencies:
//! - Per-frame physics (one call to `tick` per display frame)
//! - Seeded RNG only (gap placement)
//! - Pipe pairs kept in creation order

pub mod actor;
pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{Rect, intersects};
pub use difficulty::scaled_velocity;
pub use obstacles::{ObstaclePair, ObstacleSpawner, Segment};
pub use state::{EndCause, GameEvent, GameState, Score, SessionPhase};
pub use tick::{activate, tick};

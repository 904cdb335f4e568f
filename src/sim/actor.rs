//! The player-controlled actor
//!
//! Physics is per-frame (no dt): velocity is in pixels per frame and gravity
//! in pixels per frame squared.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// The flapping actor. Only `pos.y` and `velocity` change during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub velocity: f32,
}

impl Actor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.actor_spawn(),
            size: tuning.actor_size,
            velocity: 0.0,
        }
    }

    /// Apply one frame of gravity. The top edge clamps at 0 but there is no
    /// floor; falling off the board is how the out-of-bounds loss happens.
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.pos.y = (self.pos.y + self.velocity).max(0.0);
    }

    /// Jump: overwrite vertical velocity
    pub fn impulse(&mut self, jump_velocity: f32) {
        self.velocity = jump_velocity;
    }

    /// Display rotation in degrees. Cosmetic only.
    pub fn rotation_degrees(&self, tuning: &Tuning) -> f32 {
        (self.velocity * tuning.rotation_factor)
            .clamp(tuning.rotation_min_deg, tuning.rotation_max_deg)
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// True once the top edge has dropped past the bottom of the board
    pub fn is_below(&self, board_height: f32) -> bool {
        self.pos.y > board_height
    }

    /// Put the actor back at its spawn point, at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = tuning.actor_spawn();
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_applies_gravity_then_moves() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.velocity = 1.0;
        actor.integrate(0.5);
        assert_eq!(actor.velocity, 1.5);
        assert_eq!(actor.pos.y, 361.5);
    }

    #[test]
    fn test_top_clamp() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.pos.y = 2.0;
        actor.impulse(-4.5);
        actor.integrate(0.12);
        assert_eq!(actor.pos.y, 0.0);
        // Velocity keeps its value; only position is clamped
        assert!(actor.velocity < 0.0);
    }

    #[test]
    fn test_no_floor() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.pos.y = tuning.board_height;
        actor.velocity = 3.0;
        actor.integrate(tuning.gravity);
        assert!(actor.pos.y > tuning.board_height);
        assert!(actor.is_below(tuning.board_height));
    }

    #[test]
    fn test_rotation_clamps() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);

        actor.velocity = -4.5;
        assert_eq!(actor.rotation_degrees(&tuning), -13.5);

        actor.velocity = -20.0;
        assert_eq!(actor.rotation_degrees(&tuning), -25.0);

        actor.velocity = 50.0;
        assert_eq!(actor.rotation_degrees(&tuning), 90.0);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.pos.y = 900.0;
        actor.velocity = 7.0;
        actor.reset(&tuning);
        assert_eq!(actor, Actor::new(&tuning));
    }
}

//! Speed ramp keyed to score milestones

use crate::tuning::Tuning;

/// Pipe velocity for a whole-point score, or `None` when the score is not a
/// milestone. Pure, so re-evaluating at the same score gives the same speed.
pub fn scaled_velocity(whole_score: u32, tuning: &Tuning) -> Option<f32> {
    if whole_score == 0 || !whole_score.is_multiple_of(tuning.difficulty_threshold) {
        return None;
    }
    Some(tuning.base_velocity_x * (1.0 + whole_score as f32 * tuning.difficulty_scale))
}

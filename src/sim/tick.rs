//! Per-frame simulation step and activation handling
//!
//! The step order is fixed: actor physics, pipe movement, scoring and
//! collision per pair, then pruning from the front of the pipe list.

use super::collision::intersects;
use super::difficulty::scaled_velocity;
use super::state::{EndCause, GameEvent, GameState, SessionPhase};
use crate::tuning::Tuning;

/// Advance the game state by one display frame
pub fn tick(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    // Ended sessions are frozen until the next activation
    if state.phase == SessionPhase::Ended {
        return;
    }

    state.score_flash = state.score_flash.saturating_sub(1);

    let running = state.phase == SessionPhase::Running;
    let mut ended = None;

    if running {
        state.actor.integrate(tuning.gravity);
        if state.actor.is_below(tuning.board_height) {
            ended = Some(EndCause::OutOfBounds);
        }
    }

    let actor = state.actor.bounds();
    for pair in &mut state.pairs {
        pair.advance(state.velocity_x);

        if !pair.passed && actor.left() > pair.trailing_edge() {
            pair.passed = true;
            // Both segments share x, so they always cross together
            for _segment in pair.segments() {
                state.score.add_half();
                state.score_flash = tuning.score_flash_frames;

                if !state.score.is_whole() {
                    continue;
                }
                let whole = state.score.whole();
                events.push(GameEvent::Scored { score: whole });

                if let Some(velocity_x) = scaled_velocity(whole, tuning) {
                    state.velocity_x = velocity_x;
                    events.push(GameEvent::SpeedUp { velocity_x });
                    log::debug!("Score {} - pipe speed now {:.3}", whole, velocity_x);
                }
            }
        }

        if running
            && ended.is_none()
            && pair.segments().iter().any(|segment| intersects(&actor, segment))
        {
            ended = Some(EndCause::Collision);
        }
    }

    // Oldest pairs are leftmost, so only the front can be off-screen
    let offscreen = state
        .pairs
        .iter()
        .take_while(|pair| pair.is_offscreen(tuning.pipe_width))
        .count();
    state.pairs.drain(..offscreen);

    if let Some(cause) = ended {
        end_session(state, cause, events);
    }
}

/// Running -> Ended, folding the score into the best score
fn end_session(state: &mut GameState, cause: EndCause, events: &mut Vec<GameEvent>) {
    state.phase = SessionPhase::Ended;

    let score = state.score.value();
    log::info!("Session ended ({:?}) with score {}", cause, state.score);
    events.push(GameEvent::SessionEnded { cause, score });

    if score > state.best {
        state.best = score;
        log::info!("New best score: {}", state.score);
        events.push(GameEvent::NewBest { best: score });
    }
}

/// Handle one normalized activation (key, click or tap)
pub fn activate(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    match state.phase {
        SessionPhase::NotStarted => {
            state.phase = SessionPhase::Running;
            log::info!("Session started");
            events.push(GameEvent::SessionStarted);
            // The starting press is also the first flap
            state.actor.impulse(tuning.jump_velocity);
            events.push(GameEvent::Jumped);
        }
        SessionPhase::Running => {
            state.actor.impulse(tuning.jump_velocity);
            events.push(GameEvent::Jumped);
        }
        SessionPhase::Ended => {
            // Reset consumes the press; no flap
            state.reset(tuning);
            log::info!("Session reset");
            events.push(GameEvent::SessionReset);
        }
    }
}

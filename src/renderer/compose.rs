//! Builds one frame of draw commands from the game state

use glam::Vec2;

use super::Frame;
use super::commands::{DrawCommand, Sprite, TextAlign, colors};
use crate::sim::{GameState, SessionPhase};
use crate::tuning::Tuning;

const SCORE_FONT: f32 = 45.0;
const BEST_FONT: f32 = 20.0;
const BADGE_SIZE: f32 = 200.0;

/// Compose the frame for the current state.
///
/// Every frame starts with `Clear` and is complete on its own. An ended
/// session is frozen, so its frames repeat the same scene and summary.
pub fn compose_frame(state: &GameState, tuning: &Tuning, reduced_motion: bool) -> Frame {
    let mut frame = Frame::default();

    frame.push(DrawCommand::Clear);

    let actor = &state.actor;
    frame.push(DrawCommand::Sprite {
        sprite: Sprite::Actor,
        pos: actor.pos,
        size: actor.size,
        rotation_deg: actor.rotation_degrees(tuning),
    });

    for pair in &state.pairs {
        for (sprite, segment) in [(Sprite::PipeTop, &pair.top), (Sprite::PipeBottom, &pair.bottom)] {
            frame.push(DrawCommand::Sprite {
                sprite,
                pos: segment.pos,
                size: segment.size,
                rotation_deg: 0.0,
            });
        }
    }

    // Score pulses yellow and larger for a few frames after each point
    let (score_color, score_font) = if state.score_flash > 0 && !reduced_motion {
        (colors::SCORE_FLASH, SCORE_FONT + state.score_flash as f32)
    } else {
        (colors::WHITE, SCORE_FONT)
    };
    frame.push(DrawCommand::text(
        state.score.to_string(),
        Vec2::new(5.0, 45.0),
        score_font,
        score_color,
    ));
    frame.push(DrawCommand::text(
        format!("Best: {}", state.best),
        Vec2::new(5.0, 70.0),
        BEST_FONT,
        colors::WHITE,
    ));

    match state.phase {
        SessionPhase::Ended => push_summary(&mut frame, state, tuning),
        SessionPhase::NotStarted => frame.push(DrawCommand::text(
            "Press Space/Click to Start",
            Vec2::new(tuning.board_width / 2.0 - 140.0, tuning.board_height / 2.0),
            25.0,
            colors::WHITE,
        )),
        SessionPhase::Running => {}
    }

    frame
}

/// End-of-session summary: dimmed board, badge, score and retry hint
fn push_summary(frame: &mut Frame, state: &GameState, tuning: &Tuning) {
    let center = Vec2::new(tuning.board_width / 2.0, tuning.board_height / 2.0);

    frame.push(DrawCommand::FillRect {
        pos: Vec2::ZERO,
        size: Vec2::new(tuning.board_width, tuning.board_height),
        color: colors::OVERLAY,
    });
    frame.push(DrawCommand::Sprite {
        sprite: Sprite::YouLost,
        pos: Vec2::new(center.x - BADGE_SIZE / 2.0, center.y - 200.0),
        size: Vec2::splat(BADGE_SIZE),
        rotation_deg: 0.0,
    });

    frame.push(DrawCommand::Text {
        content: "Game Over".into(),
        pos: center + Vec2::new(0.0, 30.0),
        font_size: 40.0,
        color: colors::HEADLINE,
        align: TextAlign::Center,
        bold: true,
    });

    frame.push(DrawCommand::centered(
        format!("Score: {}", state.score),
        center + Vec2::new(0.0, 80.0),
        30.0,
        colors::WHITE,
    ));
    frame.push(DrawCommand::centered(
        format!("Best: {}", state.best),
        center + Vec2::new(0.0, 115.0),
        30.0,
        colors::WHITE,
    ));
    frame.push(DrawCommand::centered(
        "Try Again!",
        center + Vec2::new(0.0, 160.0),
        25.0,
        colors::RETRY,
    ));
    frame.push(DrawCommand::centered(
        "Press Space/Click to Restart",
        center + Vec2::new(0.0, 190.0),
        18.0,
        colors::WHITE,
    ));
}

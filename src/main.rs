//! Pillar Hop entry point
//!
//! Native builds run a headless session with a simple autopilot, which is
//! handy for checking balance changes from a tuning file:
//!
//! ```text
//! RUST_LOG=debug pillar-hop [tuning.json]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pillar_hop::audio::LogAudio;
    use pillar_hop::persistence::JsonFileStore;
    use pillar_hop::platform::{Driver, RawInput};
    use pillar_hop::renderer::FrameRecorder;
    use pillar_hop::sim::{GameState, SessionPhase};
    use pillar_hop::{Game, Settings, Tuning};

    const SESSIONS: u32 = 3;
    /// Give up on a session that survives this long
    const MAX_SESSION_SECS: u64 = 300;
    const BEST_SCORE_PATH: &str = "pillar-hop-best.json";

    /// Flap when the actor is sinking into the lower part of the next gap
    fn wants_flap(state: &GameState, tuning: &Tuning) -> bool {
        let actor = state.actor.bounds();
        let target = state
            .pairs
            .iter()
            .find(|pair| pair.trailing_edge() >= actor.left())
            .map(|pair| pair.gap_y())
            .unwrap_or((tuning.board_height - tuning.gap_height) / 2.0);

        actor.bottom() > target + 0.6 * tuning.gap_height && state.actor.velocity > 0.0
    }

    pub fn run() -> Result<(), pillar_hop::TuningError> {
        let tuning = match std::env::args().nth(1) {
            Some(path) => Tuning::load_or_default(path),
            None => Tuning::default(),
        };
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let game = Game::builder(tuning)
            .seed(seed)
            .settings(Settings::load())
            .renderer(FrameRecorder::default())
            .audio(LogAudio)
            .store(JsonFileStore::new(BEST_SCORE_PATH))
            .build()?;
        let mut driver = Driver::new(game);
        let input = driver.sender();
        let period = driver.frame_period();
        let max_frames = MAX_SESSION_SECS * u64::from(driver.game().tuning().frame_rate_hz);

        for session in 1..=SESSIONS {
            input.send(&RawInput::key("Space"));
            let mut frames = 0u64;

            loop {
                frames += u64::from(driver.pump(period));
                let game = driver.game();
                match game.state().phase {
                    SessionPhase::Ended => break,
                    SessionPhase::Running if wants_flap(game.state(), game.tuning()) => {
                        input.send(&RawInput::key("Space"));
                    }
                    _ => {}
                }
                if frames >= max_frames {
                    log::info!(
                        "Session {} still alive after {}s, stopping",
                        session,
                        MAX_SESSION_SECS
                    );
                    break;
                }
            }

            let state = driver.game().state();
            log::info!(
                "Session {}: score {} in {:.1}s (best {})",
                session,
                state.score,
                frames as f64 * period.as_secs_f64(),
                state.best
            );

            // Ended -> NotStarted; the next loop iteration starts a fresh run
            if state.phase == SessionPhase::Ended {
                input.send(&RawInput::key("Space"));
                driver.pump(period);
            } else {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pillar Hop (native, headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("Invalid tuning: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds link the library from the host shell; this binary is native only
}

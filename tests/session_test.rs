use std::time::Duration;

use pillar_hop::persistence::MemoryStore;
use pillar_hop::platform::{Driver, RawInput};
use pillar_hop::sim::{EndCause, GameEvent, GameState, ObstaclePair, SessionPhase, activate, tick};
use pillar_hop::{Game, Tuning};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_flap_then_ten_frames() {
    let tuning = Tuning::default();
    let mut state = GameState::new(&tuning, 0.0);
    let mut events = Vec::new();

    activate(&mut state, &tuning, &mut events);
    assert_eq!(state.actor.pos.y, 360.0);
    assert_eq!(state.actor.velocity, -4.5);

    // Same f32 recurrence, frame by frame
    let mut y: f32 = 360.0;
    let mut v: f32 = -4.5;
    for frame in 1..=10 {
        v += 0.12;
        y = (y + v).max(0.0);
        tick(&mut state, &tuning, &mut events);

        assert_eq!(state.actor.velocity, v, "velocity at frame {}", frame);
        assert_eq!(state.actor.pos.y, y, "y at frame {}", frame);
    }

    assert_eq!(state.phase, SessionPhase::Running);
    assert!(approx(state.actor.pos.y, 321.6));
    assert!(approx(state.actor.velocity, -3.3));
}

#[test]
fn test_ceiling_clamps_position_not_velocity() {
    let tuning = Tuning::default();
    let mut state = GameState::new(&tuning, 0.0);
    let mut events = Vec::new();
    activate(&mut state, &tuning, &mut events);
    state.actor.pos.y = 1.0;

    tick(&mut state, &tuning, &mut events);

    assert_eq!(state.actor.pos.y, 0.0);
    assert!(state.actor.velocity < 0.0);
    assert_eq!(state.phase, SessionPhase::Running);
}

#[test]
fn test_reset_restores_every_session_field() {
    let tuning = Tuning::default();
    let mut state = GameState::new(&tuning, 3.0);
    let mut events = Vec::new();

    activate(&mut state, &tuning, &mut events);
    state.pairs.push(ObstaclePair::new(300.0, 200.0, &tuning));
    state.velocity_x = -1.5;
    state.score.add_half();
    state.score.add_half();
    state.actor.pos.y = tuning.board_height + 2.0;
    state.actor.velocity = 0.0;
    tick(&mut state, &tuning, &mut events);
    assert_eq!(state.phase, SessionPhase::Ended);

    activate(&mut state, &tuning, &mut events);

    assert_eq!(state.actor.pos, tuning.actor_spawn());
    assert!(state.pairs.is_empty());
    assert_eq!(state.score.value(), 0.0);
    assert_eq!(state.velocity_x, tuning.base_velocity_x);
    assert_eq!(state.phase, SessionPhase::NotStarted);
    assert_eq!(state.best, 3.0);
}

#[test]
fn test_tenth_point_speeds_up_pipes() {
    let tuning = Tuning::default();
    let mut state = GameState::new(&tuning, 0.0);
    let mut events = Vec::new();
    activate(&mut state, &tuning, &mut events);

    // Stack ten pairs the actor is just about to clear, each in its own tick
    for _ in 0..10 {
        state.actor.pos.y = 300.0;
        state.actor.velocity = 0.0;
        state.pairs.push(ObstaclePair::new(
            tuning.actor_spawn().x - tuning.pipe_width - 0.5,
            150.0,
            &tuning,
        ));
        tick(&mut state, &tuning, &mut events);
    }

    assert_eq!(state.score.whole(), 10);
    assert!(approx(state.velocity_x, -0.66));
    let speedups: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::SpeedUp { .. }))
        .collect();
    assert_eq!(speedups.len(), 1);
}

#[test]
fn test_collision_ends_with_cause() {
    let tuning = Tuning::default();
    let mut state = GameState::new(&tuning, 0.0);
    let mut events = Vec::new();
    activate(&mut state, &tuning, &mut events);

    // Top segment reaches down to 500, well past the actor
    state.pairs.push(ObstaclePair::new(90.0, 500.0, &tuning));
    tick(&mut state, &tuning, &mut events);

    assert_eq!(state.phase, SessionPhase::Ended);
    assert!(events.contains(&GameEvent::SessionEnded {
        cause: EndCause::Collision,
        score: 0.0
    }));
}

#[test]
fn test_driver_session_round_trip() {
    let store = MemoryStore {
        best: Some(2.0),
        saves: 0,
    };
    let game = Game::builder(Tuning::default())
        .seed(11)
        .store(store)
        .build()
        .unwrap();
    let mut driver = Driver::new(game);
    let input = driver.sender();
    let period = driver.frame_period();

    assert_eq!(driver.game().state().best, 2.0);

    // Start and never flap again: the actor drops out of the board
    input.send(&RawInput::TouchStart);
    let mut frames = 0;
    while driver.game().state().phase != SessionPhase::Ended {
        frames += driver.pump(period);
        assert!(frames < 600, "actor never fell out");
    }
    // Fell before the first spawn (2.2 s)
    assert!(driver.game().state().pairs.is_empty());
    assert_eq!(driver.game().state().best, 2.0);

    // Ended is frozen until the next press
    let y = driver.game().state().actor.pos.y;
    driver.pump(Duration::from_millis(200));
    assert_eq!(driver.game().state().actor.pos.y, y);

    // Unrelated keys are ignored; Space resets
    assert!(!input.send(&RawInput::key("KeyQ")));
    driver.pump(period);
    assert_eq!(driver.game().state().phase, SessionPhase::Ended);

    assert!(input.send(&RawInput::key("Space")));
    driver.pump(period);
    let state = driver.game().state();
    assert_eq!(state.phase, SessionPhase::NotStarted);
    assert_eq!(state.actor.pos, driver.game().tuning().actor_spawn());
}

//! Session context
//!
//! `Game` owns the simulation state, the spawner and every collaborator, so
//! all mutation goes through one `&mut Game`. Hosts call [`Game::frame`] once
//! per display refresh, [`Game::spawn_obstacle`] on the spawn timer and
//! [`Game::activate`] for normalized input.

use crate::audio::{self, AudioSink, NullAudio};
use crate::persistence::{self, BestScoreStore, NullStore};
use crate::renderer::{Frame, RenderSink, compose_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, ObstacleSpawner, activate, tick};
use crate::tuning::{Tuning, TuningError};

/// Builder for [`Game`]; collaborators default to no-ops
pub struct GameBuilder {
    tuning: Tuning,
    settings: Settings,
    seed: u64,
    renderer: Option<Box<dyn RenderSink>>,
    audio: Box<dyn AudioSink>,
    store: Box<dyn BestScoreStore>,
}

impl GameBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn renderer(mut self, renderer: impl RenderSink + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    pub fn store(mut self, store: impl BestScoreStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Validate tuning and load the best score
    pub fn build(self) -> Result<Game, TuningError> {
        self.tuning.validate()?;

        let best = persistence::load_best_or_zero(self.store.as_ref());
        let state = GameState::new(&self.tuning, best);
        log::info!(
            "Game ready: board {}x{}, seed {}, best {}",
            self.tuning.board_width,
            self.tuning.board_height,
            self.seed,
            state.best
        );

        Ok(Game {
            state,
            spawner: ObstacleSpawner::new(self.seed),
            tuning: self.tuning,
            settings: self.settings,
            renderer: self.renderer,
            audio: self.audio,
            store: self.store,
            events: Vec::new(),
            last_frame: Frame::default(),
        })
    }
}

/// One game process: state plus collaborators
pub struct Game {
    state: GameState,
    spawner: ObstacleSpawner,
    tuning: Tuning,
    settings: Settings,
    renderer: Option<Box<dyn RenderSink>>,
    audio: Box<dyn AudioSink>,
    store: Box<dyn BestScoreStore>,
    /// Scratch buffer reused every tick
    events: Vec<GameEvent>,
    last_frame: Frame,
}

impl Game {
    pub fn builder(tuning: Tuning) -> GameBuilder {
        GameBuilder {
            tuning,
            settings: Settings::default(),
            seed: 0,
            renderer: None,
            audio: Box::new(NullAudio),
            store: Box::new(NullStore),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The frame composed by the most recent [`Game::frame`] call
    pub fn last_frame(&self) -> &Frame {
        &self.last_frame
    }

    /// Handle one normalized activation
    pub fn activate(&mut self) {
        activate(&mut self.state, &self.tuning, &mut self.events);
        self.flush_events();
    }

    /// Spawn timer callback. Returns true if a pair was added.
    pub fn spawn_obstacle(&mut self) -> bool {
        self.spawner.spawn(&mut self.state, &self.tuning)
    }

    /// One display frame: simulate, notify collaborators, render
    pub fn frame(&mut self) {
        tick(&mut self.state, &self.tuning, &mut self.events);
        self.flush_events();

        let reduced_motion = !self.settings.score_flash_enabled();
        self.last_frame = compose_frame(&self.state, &self.tuning, reduced_motion);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.present(&self.last_frame);
        }
    }

    fn flush_events(&mut self) {
        for event in self.events.drain(..) {
            audio::dispatch(self.audio.as_mut(), &event);
            if let GameEvent::NewBest { best } = event {
                persistence::save_best_logged(self.store.as_mut(), best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::persistence::MemoryStore;
    use crate::renderer::{DrawCommand, FrameRecorder};
    use crate::sim::{ObstaclePair, SessionPhase};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shares recorded data with the test after the game takes ownership
    #[derive(Default)]
    struct Shared<T>(Rc<RefCell<T>>);

    impl<T> Clone for Shared<T> {
        fn clone(&self) -> Self {
            Shared(Rc::clone(&self.0))
        }
    }

    impl RenderSink for Shared<FrameRecorder> {
        fn present(&mut self, frame: &Frame) {
            self.0.borrow_mut().present(frame);
        }
    }

    impl AudioSink for Shared<Vec<SoundEffect>> {
        fn play(&mut self, effect: SoundEffect) {
            self.0.borrow_mut().push(effect);
        }
    }

    impl BestScoreStore for Shared<MemoryStore> {
        fn load(&self) -> Result<Option<f32>, persistence::PersistenceError> {
            self.0.borrow().load()
        }

        fn save(&mut self, best: f32) -> Result<(), persistence::PersistenceError> {
            self.0.borrow_mut().save(best)
        }
    }

    #[test]
    fn test_build_rejects_bad_tuning() {
        let tuning = Tuning {
            board_height: -1.0,
            ..Default::default()
        };
        assert!(Game::builder(tuning).build().is_err());
    }

    #[test]
    fn test_best_loaded_at_start() {
        let store = MemoryStore {
            best: Some(8.0),
            saves: 0,
        };
        let game = Game::builder(Tuning::default())
            .store(store)
            .build()
            .unwrap();
        assert_eq!(game.state().best, 8.0);
    }

    #[test]
    fn test_one_present_per_frame() {
        let recorder = Shared::<FrameRecorder>::default();
        let mut game = Game::builder(Tuning::default())
            .renderer(recorder.clone())
            .build()
            .unwrap();

        for _ in 0..5 {
            game.frame();
        }
        assert_eq!(recorder.0.borrow().frames, 5);
        assert_eq!(recorder.0.borrow().last, *game.last_frame());
    }

    #[test]
    fn test_audio_follows_session() {
        let sounds = Shared::<Vec<SoundEffect>>::default();
        let tuning = Tuning::default();
        let mut game = Game::builder(tuning.clone())
            .audio(sounds.clone())
            .build()
            .unwrap();

        game.activate();
        game.activate();
        assert_eq!(*sounds.0.borrow(), vec![SoundEffect::Jump, SoundEffect::Jump]);

        // Drop a pipe on the actor
        game.state.pairs.push(ObstaclePair::new(60.0, 100.0, &tuning));
        game.frame();
        assert_eq!(game.state().phase, SessionPhase::Ended);
        assert_eq!(sounds.0.borrow().last(), Some(&SoundEffect::GameOver));

        // Reset is silent and does not jump
        game.activate();
        assert_eq!(game.state().phase, SessionPhase::NotStarted);
        assert_eq!(sounds.0.borrow().len(), 3);
    }

    #[test]
    fn test_new_best_is_saved() {
        let store = Shared::<MemoryStore>::default();
        let tuning = Tuning::default();
        let mut game = Game::builder(tuning.clone())
            .store(store.clone())
            .build()
            .unwrap();

        game.activate();
        game.state
            .pairs
            .push(ObstaclePair::new(60.0 - tuning.pipe_width - 0.5, 150.0, &tuning));
        game.frame();
        assert_eq!(game.state().score.value(), 1.0);

        game.state.actor.pos.y = tuning.board_height + 1.0;
        game.state.actor.velocity = 0.0;
        game.frame();

        assert_eq!(store.0.borrow().best, Some(1.0));
        assert_eq!(store.0.borrow().saves, 1);
    }

    #[test]
    fn test_spawn_gated_by_phase() {
        let mut game = Game::builder(Tuning::default()).seed(3).build().unwrap();
        assert!(!game.spawn_obstacle());
        game.activate();
        assert!(game.spawn_obstacle());
        assert_eq!(game.state().pairs.len(), 1);
    }

    #[test]
    fn test_ended_frames_repeat_full_scene() {
        let tuning = Tuning::default();
        let mut game = Game::builder(tuning.clone()).build().unwrap();
        game.activate();
        game.state.actor.pos.y = tuning.board_height + 1.0;
        game.state.actor.velocity = 0.0;

        game.frame();
        assert_eq!(game.state().phase, SessionPhase::Ended);
        let ended = game.last_frame().clone();
        assert_eq!(ended.iter().next(), Some(&DrawCommand::Clear));

        game.frame();
        game.frame();
        assert_eq!(*game.last_frame(), ended);
    }
}

//! Audio cues and sinks
//!
//! The core only announces *what* happened; sinks decide what it sounds like.
//! On the web, [`web::WebAudio`] synthesizes tones with the Web Audio API so no
//! sound files are needed.

use crate::sim::GameEvent;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Actor flapped
    Jump,
    /// Whole point scored (never on half points)
    Score,
    /// Run ended
    GameOver,
}

/// Background music changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCue {
    /// Looping background track while running
    Ambient,
    /// Looping lament after the run ends
    Lament,
    /// Stop everything (reset)
    Silence,
}

/// Something that can play the game's cues. Failures must stay inside the
/// sink; gameplay never waits on audio.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    fn set_music(&mut self, _cue: MusicCue) {}
}

/// Map a simulation event to the audio it triggers
pub fn dispatch(sink: &mut dyn AudioSink, event: &GameEvent) {
    match event {
        GameEvent::SessionStarted => sink.set_music(MusicCue::Ambient),
        GameEvent::Jumped => sink.play(SoundEffect::Jump),
        GameEvent::Scored { .. } => sink.play(SoundEffect::Score),
        GameEvent::SessionEnded { .. } => {
            sink.play(SoundEffect::GameOver);
            sink.set_music(MusicCue::Lament);
        }
        GameEvent::SessionReset => sink.set_music(MusicCue::Silence),
        GameEvent::SpeedUp { .. } | GameEvent::NewBest { .. } => {}
    }
}

/// Audio disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs cues instead of playing them (headless native runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
    }

    fn set_music(&mut self, cue: MusicCue) {
        log::debug!("music: {:?}", cue);
    }
}

#[cfg(target_arch = "wasm32")]
pub mod web {
    //! Web Audio API synthesis

    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, MusicCue, SoundEffect};
    use crate::settings::Settings;

    /// Procedural audio for the browser.
    ///
    /// Constructed by the browser host shell, which owns the page and its
    /// event listeners; this crate only provides the sink.
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        sfx_volume: f32,
        music_volume: f32,
        lament_volume: f32,
        muted: bool,
        /// Currently looping music voice
        music: Option<(OscillatorNode, GainNode)>,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context; the game runs silent then
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                sfx_volume: settings.sfx_volume,
                music_volume: settings.music_volume,
                lament_volume: settings.lament_volume,
                muted: !settings.sound_enabled,
                music: None,
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short enveloped blip
        fn blip(ctx: &AudioContext, freq: f32, osc_type: OscillatorType, vol: f32, secs: f64) {
            let Some((osc, gain)) = Self::create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + secs)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + secs).ok();
        }

        fn stop_music(&mut self) {
            if let Some((osc, _gain)) = self.music.take() {
                osc.stop().ok();
            }
        }

        fn start_loop(&mut self, freq: f32, osc_type: OscillatorType, vol: f32) {
            self.stop_music();
            let Some(ctx) = &self.ctx else { return };
            if let Some((osc, gain)) = Self::create_osc(ctx, freq, osc_type) {
                gain.gain().set_value(vol);
                osc.start().ok();
                self.music = Some((osc, gain));
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            if self.muted || self.sfx_volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = self.sfx_volume;
            match effect {
                SoundEffect::Jump => Self::blip(ctx, 400.0, OscillatorType::Sine, vol * 0.3, 0.1),
                SoundEffect::Score => {
                    Self::blip(ctx, 800.0, OscillatorType::Square, vol * 0.2, 0.15)
                }
                SoundEffect::GameOver => {
                    let Some((osc, gain)) = Self::create_osc(ctx, 300.0, OscillatorType::Sawtooth)
                    else {
                        return;
                    };
                    let t = ctx.current_time();
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.6)
                        .ok();
                    osc.frequency().set_value_at_time(300.0, t).ok();
                    osc.frequency()
                        .exponential_ramp_to_value_at_time(60.0, t + 0.6)
                        .ok();
                    osc.start().ok();
                    osc.stop_with_when(t + 0.6).ok();
                }
            }
        }

        fn set_music(&mut self, cue: MusicCue) {
            if self.muted {
                return;
            }
            match cue {
                MusicCue::Ambient => {
                    self.start_loop(110.0, OscillatorType::Sine, self.music_volume * 0.1)
                }
                MusicCue::Lament => {
                    self.start_loop(73.4, OscillatorType::Triangle, self.lament_volume * 0.1)
                }
                MusicCue::Silence => self.stop_music(),
            }
        }
    }
}

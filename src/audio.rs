//! Sound effects
//!
//! Each effect is a short sine tone synthesized with the Web Audio API, so no
//! audio files are needed.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Good item caught
    Catch,
    /// Bad item caught
    Hurt,
    /// Score crossed a milestone
    Milestone,
    /// Lives ran out
    GameOver,
}

impl Sound {
    pub fn name(self) -> &'static str {
        match self {
            Sound::Catch => "catch",
            Sound::Hurt => "hurt",
            Sound::Milestone => "milestone",
            Sound::GameOver => "gameover",
        }
    }

    /// Frequency (Hz) and duration (seconds) of the tone
    pub fn tone(self) -> (f32, f64) {
        match self {
            Sound::Catch => (880.0, 0.1),     // High ping
            Sound::Hurt => (150.0, 0.3),      // Low buzz
            Sound::Milestone => (660.0, 0.4), // Chime
            Sound::GameOver => (100.0, 1.0),  // Long low drone
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::Sound;

    /// Peak gain of every tone
    const VOLUME: f32 = 0.5;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Play a sound effect. Best effort: failures are logged and ignored.
        pub fn play(&self, sound: Sound) {
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            if self.play_tone(ctx, sound).is_none() {
                log::debug!("Audio play failed: {}", sound.name());
            }
        }

        /// Create an oscillator with a gain node wired to the output
        fn create_osc(&self, ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(&self, ctx: &AudioContext, sound: Sound) -> Option<()> {
            let (freq, duration) = sound.tone();
            let (osc, gain) = self.create_osc(ctx, freq)?;
            let t = ctx.current_time();

            gain.gain().set_value_at_time(VOLUME, t).ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + duration)
                .ok()?;

            osc.start().ok()?;
            osc.stop_with_when(t + duration).ok()?;
            Some(())
        }
    }
}

//! Sound effect boundary
//!
//! The simulation only says *which* effect to play; playback is fire-and-forget
//! and owned by whatever backend sits behind [`SoundPlayer`]. The native build
//! has no audio device, so [`AudioManager`] logs each effect and keeps a count.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A star was collected
    StarCollected,
}

impl SoundEffect {
    /// Asset name of the sample backing this effect
    pub fn sample_name(self) -> &'static str {
        match self {
            SoundEffect::StarCollected => "collect.wav",
        }
    }
}

/// Anything that can play a sound effect
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    plays: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            plays: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effects that were actually audible so far
    pub fn play_count(&self) -> u64 {
        self.plays
    }
}

impl SoundPlayer for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.plays += 1;
        log::debug!("play {} at volume {:.2}", effect.sample_name(), vol);
    }
}

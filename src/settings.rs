//! Game settings
//!
//! Read once at startup from a JSON file. A missing or broken file is never
//! fatal: the defaults are used and the problem is logged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, StarVariant};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Milliseconds per frame
    pub frame_interval_ms: u64,

    // === Gameplay ===
    pub star_variant: StarVariant,
    /// RNG seed; a fresh one is picked when absent
    pub seed: Option<u64>,
    /// Stop a headless session after this many frames
    pub max_frames: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            frame_interval_ms: FRAME_INTERVAL_MS,

            star_variant: StarVariant::Twinkling,
            seed: None,
            max_frames: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "star_catch_settings.json";

    /// Parse settings from JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize for writing a settings template
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.window_width.is_finite() && self.window_width > 0.0) {
            log::warn!("window_width {} out of range, using {}", self.window_width, defaults.window_width);
            self.window_width = defaults.window_width;
        }
        if !(self.window_height.is_finite() && self.window_height > 0.0) {
            log::warn!("window_height {} out of range, using {}", self.window_height, defaults.window_height);
            self.window_height = defaults.window_height;
        }
        if self.frame_interval_ms == 0 {
            log::warn!("frame_interval_ms must be positive, using {}", defaults.frame_interval_ms);
            self.frame_interval_ms = defaults.frame_interval_ms;
        }
        self.master_volume = clamp_volume(self.master_volume);
        self.sfx_volume = clamp_volume(self.sfx_volume);
        self
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.window_width, self.window_height)
    }

    /// Frame interval in seconds
    pub fn frame_secs(&self) -> f32 {
        self.frame_interval_ms as f32 / 1000.0
    }
}

fn clamp_volume(vol: f32) -> f32 {
    if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) }
}

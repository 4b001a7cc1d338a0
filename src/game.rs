//! Frame driver glue
//!
//! [`Game`] owns one session: state, RNG, audio and input bindings. A platform
//! loop feeds it input and wall-clock time and asks it to draw.

use rand_pcg::Pcg32;

use crate::audio::AudioManager;
use crate::consts::MAX_SUBSTEPS;
use crate::input::{Bindings, Button, ButtonState};
use crate::render::{Presenter, build_frame};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, seeded, tick};

/// Game instance holding all session state
pub struct Game {
    settings: Settings,
    seed: u64,
    state: GameState,
    rng: Pcg32,
    audio: AudioManager,
    bindings: Bindings,
    /// Intents applied on the next tick
    input: TickInput,
    accumulator: f32,
}

impl Game {
    /// Start a session, seeding from settings or picking a fresh seed
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let state = GameState::new(
            settings.arena(),
            settings.star_variant,
            settings.frame_interval_ms,
        );

        let mut audio = AudioManager::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        log::info!(
            "Session start: {}x{} {:?} stars, seed {}",
            settings.window_width,
            settings.window_height,
            settings.star_variant,
            seed
        );

        Self {
            settings,
            seed,
            state,
            rng: seeded(seed),
            audio,
            bindings: Bindings::default(),
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_bindings(&mut self, bindings: Bindings) {
        self.bindings = bindings;
    }

    pub fn is_closed(&self) -> bool {
        !self.state.is_running()
    }

    /// Record this frame's device state. A quit press sticks until a tick
    /// consumes it.
    pub fn handle_input(&mut self, held: &impl ButtonState, pressed: &[Button]) {
        let resolved = self.bindings.resolve(held, pressed);
        self.input = TickInput {
            quit: self.input.quit || resolved.quit,
            ..resolved
        };
    }

    /// Run exactly one tick with explicit intents
    pub fn update(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &mut self.rng, &mut self.audio);
    }

    /// Feed wall-clock time and run as many whole ticks as fit.
    ///
    /// Returns the number of ticks run (at most MAX_SUBSTEPS).
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() {
            return 0;
        }
        let step = self.settings.frame_secs();
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            let input = self.input;
            self.update(&input);
            self.accumulator -= step;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.quit = false;
        }

        // Drop backlog we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(step);
        }
        substeps
    }

    /// Hand the current frame to a presenter
    pub fn draw(&self, presenter: &mut impl Presenter) {
        presenter.present(&build_frame(&self.state));
    }

    /// Drive the session without a clock: one tick and one draw per frame,
    /// until quit or the settings' frame cap. Returns the final score.
    pub fn run_scripted(
        &mut self,
        mut script: impl FnMut(u64, &GameState) -> TickInput,
        presenter: &mut impl Presenter,
    ) -> u64 {
        let max_frames = self.settings.max_frames;
        while self.state.is_running() && max_frames.is_none_or(|max| self.state.time_ticks < max) {
            let input = script(self.state.time_ticks, &self.state);
            self.update(&input);
            self.draw(presenter);
        }

        log::info!(
            "Session finished: score {} after {} frames, {} stars live",
            self.state.score,
            self.state.time_ticks,
            self.state.stars.len()
        );
        self.state.score
    }
}

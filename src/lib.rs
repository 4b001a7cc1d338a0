//! Star Catch - an inertial ship collecting stars in a fixed window
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship movement, stars, scoring)
//! - `audio`: Sound effect boundary
//! - `input`: Keyboard/gamepad bindings resolved into per-frame intents
//! - `render`: Draw layers and per-frame draw commands
//! - `settings`: Runtime configuration
//! - `game`: Frame driver glue

pub mod audio;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;
pub use sim::StarVariant;

/// Game configuration constants
pub mod consts {
    /// Window caption
    pub const CAPTION: &str = "Star Catch";

    /// Default window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;

    /// Frame budget in milliseconds (50 frames/second)
    pub const FRAME_INTERVAL_MS: u64 = 20;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Degrees turned per turn intent
    pub const TURN_STEP_DEGREES: f32 = 4.5;
    /// Thrust magnitude added per accelerate intent
    pub const THRUST: f32 = 0.5;
    /// Velocity multiplier applied every integration step
    pub const DAMPING: f32 = 0.95;

    /// Capture radius for collecting a star (strictly less than)
    pub const CAPTURE_RADIUS: f32 = 35.0;
    /// Score credited per collected star
    pub const STAR_REWARD: u32 = 10;

    /// Live star cap
    pub const MAX_STARS: usize = 25;
    /// Spawn gate: chance out of 100 per frame
    pub const SPAWN_CHANCE_PERCENT: u32 = 4;

    /// Star sprite footprint (pixels, square)
    pub const STAR_SIZE: f32 = 25.0;
    /// Animation frames in the star sprite sheet
    pub const STAR_ANIMATION_FRAMES: usize = 10;
    /// Milliseconds each animation frame is shown
    pub const STAR_FRAME_MS: u64 = 100;
    /// Darkest allowed tint channel
    pub const TINT_FLOOR: u8 = 40;

    /// Falling star speed range (pixels per frame)
    pub const FALL_SPEED_MIN: f32 = 0.8;
    pub const FALL_SPEED_MAX: f32 = 3.3;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Horizontal component of a distance travelled along `angle` degrees.
///
/// 0° points up the screen and angles grow clockwise.
#[inline]
pub fn offset_x(angle: f32, distance: f32) -> f32 {
    angle.to_radians().sin() * distance
}

/// Vertical component of a distance travelled along `angle` degrees.
#[inline]
pub fn offset_y(angle: f32, distance: f32) -> f32 {
    -angle.to_radians().cos() * distance
}

/// Wrap a coordinate into [0, max) (toroidal)
#[inline]
pub fn wrap_coordinate(value: f32, max: f32) -> f32 {
    let wrapped = value.rem_euclid(max);
    if wrapped >= max { 0.0 } else { wrapped }
}

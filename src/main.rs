//! Star Catch entry point
//!
//! There is no window backend yet, so the native build runs a headless
//! session: an autopilot flies the ship toward the nearest star and the frame
//! summary goes to the log (`RUST_LOG=star_catch=trace` to see every frame).

use star_catch::consts::{CAPTION, TURN_STEP_DEGREES};
use star_catch::render::LogPresenter;
use star_catch::sim::{GameState, TickInput};
use star_catch::{Game, Settings};

/// Frames a headless run lasts when the settings do not cap it (one minute)
const DEFAULT_HEADLESS_FRAMES: u64 = 3000;

/// Heading error (degrees) below which the autopilot thrusts
const THRUST_CONE_DEGREES: f32 = 20.0;

fn main() {
    env_logger::init();
    log::info!("{} (native, headless) starting...", CAPTION);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Settings::FILE_NAME.to_string());
    let mut settings = Settings::load_from(&path);
    if settings.max_frames.is_none() {
        settings.max_frames = Some(DEFAULT_HEADLESS_FRAMES);
    }

    let mut game = Game::new(settings);
    let mut presenter = LogPresenter::new();
    let score = game.run_scripted(|_, state| autopilot(state), &mut presenter);

    println!(
        "{}: score {} in {} frames (seed {}, {} sounds played)",
        CAPTION,
        score,
        game.state().time_ticks,
        game.seed(),
        game.audio().play_count()
    );
}

/// Turn toward the nearest star and thrust once roughly facing it
fn autopilot(state: &GameState) -> TickInput {
    let ship = &state.ship;
    let Some(target) = state
        .stars
        .iter()
        .min_by(|a, b| {
            let dist_a = ship.pos.distance_squared(a.pos);
            let dist_b = ship.pos.distance_squared(b.pos);
            dist_a.total_cmp(&dist_b)
        })
    else {
        return TickInput::default();
    };

    // Heading with 0 degrees up, clockwise positive
    let to_target = target.pos - ship.pos;
    let heading = to_target.x.atan2(-to_target.y).to_degrees();
    let error = (heading - ship.angle + 540.0).rem_euclid(360.0) - 180.0;

    TickInput {
        turn_left: error < -TURN_STEP_DEGREES,
        turn_right: error > TURN_STEP_DEGREES,
        thrust: error.abs() < THRUST_CONE_DEGREES,
        quit: false,
    }
}

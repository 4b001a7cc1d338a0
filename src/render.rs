//! Presentation boundary
//!
//! The core never blits anything. Each frame it produces a list of
//! [`DrawCommand`]s ordered back-to-front, and a [`Presenter`] turns them into
//! pixels (or log lines, or nothing).

use glam::Vec2;

use crate::sim::{GameState, Tint};

/// Draw layer - controls draw order.
///
/// Layers are drawn back-to-front: Background first, UI last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DrawLayer {
    Background = 0,
    Stars = 1,
    Player = 2,
    UI = 3,
}

/// Score text placement and color
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(10.0, 10.0);
pub const SCORE_TEXT_TINT: Tint = Tint::YELLOW;

/// A single draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full-window background, once per frame
    Background,
    Star {
        pos: Vec2,
        tint: Tint,
        frame: usize,
    },
    Ship {
        pos: Vec2,
        angle: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        tint: Tint,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> DrawLayer {
        match self {
            DrawCommand::Background => DrawLayer::Background,
            DrawCommand::Star { .. } => DrawLayer::Stars,
            DrawCommand::Ship { .. } => DrawLayer::Player,
            DrawCommand::Text { .. } => DrawLayer::UI,
        }
    }
}

/// Consumer of a frame's draw commands
pub trait Presenter {
    fn present(&mut self, commands: &[DrawCommand]);
}

/// Build the draw list for the current state, sorted back-to-front
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.stars.len() + 3);

    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        pos: SCORE_TEXT_POS,
        tint: SCORE_TEXT_TINT,
    });
    commands.push(DrawCommand::Background);
    commands.push(DrawCommand::Ship {
        pos: state.ship.pos,
        angle: state.ship.angle,
    });
    for star in &state.stars {
        commands.push(DrawCommand::Star {
            pos: star.pos,
            tint: star.tint,
            frame: star.animation_frame(state.elapsed_ms),
        });
    }

    // Stable: stars keep spawn order within their layer
    commands.sort_by_key(DrawCommand::layer);
    commands
}

/// Presenter that only logs a per-frame summary
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        let stars = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Star { .. }))
            .count();
        let score = commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        });
        log::trace!("frame {}: {} stars, {}", self.frames, stars, score.unwrap_or(""));
    }
}

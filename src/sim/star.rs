//! Collectible stars
//!
//! A star is placed once when spawned and never re-randomized. Twinkling stars
//! stay put and only animate; falling stars drift down at their own speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::frame_index;
use super::random::RandomSource;
use super::state::Arena;
use crate::consts::*;

/// Which kind of star the session spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StarVariant {
    /// Static, animated in place
    #[default]
    Twinkling,
    /// Falls toward the bottom edge and is lost past it
    Falling,
}

/// Per-star motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StarKind {
    Twinkling,
    /// Downward speed in pixels per frame
    Falling { velocity: f32 },
}

/// Color tint applied to a star sprite (opaque)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const YELLOW: Tint = Tint { r: 255, g: 255, b: 0 };
    pub const WHITE: Tint = Tint { r: 255, g: 255, b: 255 };

    /// Random tint with every channel in [TINT_FLOOR, 255)
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let span = 255 - TINT_FLOOR as u32;
        let mut channel = || (TINT_FLOOR as u32 + rng.next_below(span)) as u8;
        let r = channel();
        let g = channel();
        let b = channel();
        Self { r, g, b }
    }

    /// Packed 0xAARRGGBB with full alpha
    pub fn to_argb(self) -> u32 {
        0xff00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// A collectible star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    /// Center of the sprite, window-local
    pub pos: Vec2,
    pub kind: StarKind,
    pub tint: Tint,
}

impl Star {
    /// Spawn a star at a random spot with its whole sprite inside the arena
    pub fn spawn(id: u32, variant: StarVariant, arena: &Arena, rng: &mut impl RandomSource) -> Self {
        let x = place_on_axis(rng.next_unit(), arena.width);
        let y = place_on_axis(rng.next_unit(), arena.height);
        let kind = match variant {
            StarVariant::Twinkling => StarKind::Twinkling,
            StarVariant::Falling => StarKind::Falling {
                velocity: rng.next_range(FALL_SPEED_MIN, FALL_SPEED_MAX),
            },
        };
        let tint = Tint::random(rng);

        Self {
            id,
            pos: Vec2::new(x, y),
            kind,
            tint,
        }
    }

    /// Advance motion by one frame
    pub fn update(&mut self) {
        if let StarKind::Falling { velocity } = self.kind {
            self.pos.y += velocity;
        }
    }

    /// True once the sprite's top edge has passed the bottom of the arena
    pub fn is_below(&self, arena: &Arena) -> bool {
        match self.kind {
            StarKind::Twinkling => false,
            StarKind::Falling { .. } => self.pos.y - STAR_SIZE / 2.0 >= arena.height,
        }
    }

    /// Sprite frame to draw at `elapsed_ms`
    pub fn animation_frame(&self, elapsed_ms: u64) -> usize {
        match self.kind {
            StarKind::Twinkling => frame_index(elapsed_ms, STAR_ANIMATION_FRAMES, STAR_FRAME_MS),
            StarKind::Falling { .. } => 0,
        }
    }
}

/// Map a unit draw onto an axis so a STAR_SIZE sprite centered there fits
fn place_on_axis(unit: f32, extent: f32) -> f32 {
    let span = extent - STAR_SIZE;
    if span <= 0.0 {
        return extent / 2.0;
    }
    STAR_SIZE / 2.0 + unit * span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{ScriptedRandom, seeded};

    fn arena() -> Arena {
        Arena::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    #[test]
    fn test_spawn_footprint_inside_window() {
        let arena = arena();
        let mut rng = seeded(3);
        for id in 0..500 {
            let star = Star::spawn(id, StarVariant::Twinkling, &arena, &mut rng);
            assert!(star.pos.x - STAR_SIZE / 2.0 >= 0.0);
            assert!(star.pos.x + STAR_SIZE / 2.0 <= arena.width);
            assert!(star.pos.y - STAR_SIZE / 2.0 >= 0.0);
            assert!(star.pos.y + STAR_SIZE / 2.0 <= arena.height);
        }
    }

    #[test]
    fn test_spawn_extremes() {
        let arena = arena();
        let mut rng = ScriptedRandom::constant(0.0, 0);
        let star = Star::spawn(1, StarVariant::Twinkling, &arena, &mut rng);
        assert_eq!(star.pos, Vec2::new(12.5, 12.5));
        assert_eq!(star.tint, Tint { r: 40, g: 40, b: 40 });
    }

    #[test]
    fn test_tint_channels_in_range() {
        let mut rng = seeded(11);
        for _ in 0..500 {
            let tint = Tint::random(&mut rng);
            for c in [tint.r, tint.g, tint.b] {
                assert!(c >= TINT_FLOOR);
                assert!(c < 255);
            }
        }
    }

    #[test]
    fn test_tint_argb() {
        let tint = Tint { r: 0x12, g: 0x34, b: 0x56 };
        assert_eq!(tint.to_argb(), 0xff12_3456);
        assert_eq!(Tint::YELLOW.to_argb(), 0xffff_ff00);
    }

    #[test]
    fn test_falling_speed_range() {
        let arena = arena();
        let mut rng = seeded(5);
        for id in 0..500 {
            let star = Star::spawn(id, StarVariant::Falling, &arena, &mut rng);
            match star.kind {
                StarKind::Falling { velocity } => {
                    assert!((FALL_SPEED_MIN..=FALL_SPEED_MAX).contains(&velocity));
                }
                StarKind::Twinkling => panic!("expected a falling star"),
            }
        }
    }

    #[test]
    fn test_twinkling_update_is_noop() {
        let mut rng = seeded(1);
        let mut star = Star::spawn(1, StarVariant::Twinkling, &arena(), &mut rng);
        let before = star.pos;
        for _ in 0..100 {
            star.update();
        }
        assert_eq!(star.pos, before);
        assert!(!star.is_below(&arena()));
    }

    #[test]
    fn test_falling_moves_down_and_leaves() {
        let arena = arena();
        let mut star = Star {
            id: 1,
            pos: Vec2::new(100.0, 470.0),
            kind: StarKind::Falling { velocity: 2.0 },
            tint: Tint::WHITE,
        };
        star.update();
        assert_eq!(star.pos, Vec2::new(100.0, 472.0));
        assert!(!star.is_below(&arena));

        // 472 + 10 * 2 = 492, top edge at 479.5 is still on screen
        for _ in 0..10 {
            star.update();
        }
        assert!(!star.is_below(&arena));
        star.update();
        assert!(star.is_below(&arena));
    }

    #[test]
    fn test_animation_frame() {
        let twinkle = Star {
            id: 1,
            pos: Vec2::ZERO,
            kind: StarKind::Twinkling,
            tint: Tint::WHITE,
        };
        assert_eq!(twinkle.animation_frame(0), 0);
        assert_eq!(twinkle.animation_frame(350), 3);
        assert_eq!(twinkle.animation_frame(1050), 0);

        let falling = Star {
            kind: StarKind::Falling { velocity: 1.0 },
            ..twinkle
        };
        assert_eq!(falling.animation_frame(350), 0);
    }

    #[test]
    fn test_tiny_arena_centers_star() {
        let arena = Arena::new(10.0, 10.0);
        let mut rng = ScriptedRandom::constant(0.9, 0);
        let star = Star::spawn(1, StarVariant::Twinkling, &arena, &mut rng);
        assert_eq!(star.pos, Vec2::new(5.0, 5.0));
    }
}

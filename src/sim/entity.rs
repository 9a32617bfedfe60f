//! Entity model
//!
//! The fixed balloon-kind table, the weighted spawn distribution, the
//! cosmetic color palette, and the balloon/projectile instance types.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::consts::*;
use crate::difficulty::DifficultyPreset;

/// A balloon species: geometry plus the score it is worth before the
/// difficulty multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalloonKind {
    pub label: &'static str,
    pub radius: f32,
    pub base_score: u32,
}

/// The fixed kind set, in spawn-weight order
pub const BALLOON_KINDS: [BalloonKind; 3] = [
    BalloonKind {
        label: "small",
        radius: 15.0,
        base_score: 3,
    },
    BalloonKind {
        label: "medium",
        radius: 20.0,
        base_score: 2,
    },
    BalloonKind {
        label: "large",
        radius: 27.0,
        base_score: 1,
    },
];

/// Spawn probabilities, keyed by kind label. Kept separate from
/// `BalloonKind` and looked up by label; weights sum to 1.0.
const SPAWN_WEIGHTS: [(&str, f32); 3] = [("small", 0.3), ("medium", 0.5), ("large", 0.2)];

/// Spawn probability for a kind label (0.0 for labels outside the fixed set)
pub fn spawn_weight(label: &str) -> f32 {
    SPAWN_WEIGHTS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, w)| *w)
        .unwrap_or(0.0)
}

/// Pick a balloon kind with the fixed spawn weights
pub fn choose_kind<R: Rng + ?Sized>(rng: &mut R) -> &'static BalloonKind {
    let roll: f32 = rng.random();
    let mut acc = 0.0;
    for kind in &BALLOON_KINDS {
        acc += spawn_weight(kind.label);
        if roll < acc {
            return kind;
        }
    }
    // roll == 1.0 edge after float accumulation
    &BALLOON_KINDS[BALLOON_KINDS.len() - 1]
}

/// Cosmetic balloon colors, assigned uniformly at random per spawn
pub const PALETTE: [[u8; 3]; 7] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 165, 0],
    [128, 0, 128],
    [255, 255, 0],
    [0, 255, 255],
];

/// A falling balloon instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balloon {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Sampled once at spawn from the active preset's range, never re-sampled
    pub fall_speed: f32,
    pub base_score: u32,
    /// Cosmetic only
    pub color: [u8; 3],
}

impl Balloon {
    /// Spawn a balloon at the top boundary with per-preset fall speed
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, preset: &DifficultyPreset) -> Self {
        let kind = choose_kind(rng);
        let x = rng.random_range(kind.radius..=PLAY_WIDTH - kind.radius);
        Self {
            pos: Vec2::new(x, -kind.radius),
            radius: kind.radius,
            fall_speed: rng.random_range(preset.min_fall_speed..=preset.max_fall_speed),
            base_score: kind.base_score,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }
}

/// A projectile fired by the shooter. Fixed size, climbs at `BULLET_SPEED`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    /// Top-left corner of the projectile rect
    pub pos: Vec2,
}

impl Projectile {
    /// Spawn a projectile centered on the shooter's muzzle
    pub fn fired_from(shooter_x: f32) -> Self {
        Self {
            pos: Vec2::new(
                shooter_x + SHOOTER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
                SHOOTER_Y - BULLET_HEIGHT,
            ),
        }
    }

    /// Center of the projectile rect, used for collision tests
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(BULLET_WIDTH / 2.0, BULLET_HEIGHT / 2.0)
    }
}

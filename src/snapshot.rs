//! Read-only frame snapshots for the presentation adapter
//!
//! After each update the core exposes everything a renderer needs; the
//! adapter never reaches into live state.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::game::Screen;

/// Shooter rect and its current speed setting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShooterView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

/// Balloon position, size, and cosmetic color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalloonView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
}

/// Projectile rect
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Everything the presentation layer may draw for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub screen: Screen,
    pub score: u64,
    pub lives: i32,
    pub high_score: u64,
    /// None outside an active session (start screen)
    pub shooter: Option<ShooterView>,
    pub balloons: Vec<BalloonView>,
    pub projectiles: Vec<ProjectileView>,
    /// Active difficulty name; None on the start screen
    pub difficulty: Option<&'static str>,
}

impl ShooterView {
    pub(crate) fn at(x: f32, speed: f32) -> Self {
        Self {
            x,
            y: SHOOTER_Y,
            width: SHOOTER_WIDTH,
            height: SHOOTER_HEIGHT,
            speed,
        }
    }
}

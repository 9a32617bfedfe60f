//! Difficulty presets
//!
//! A fixed registry of three named presets tuning spawn rate, fall speed, and
//! scoring. Pure lookup table, nothing mutates at runtime; a preset is
//! selected once per session from the start screen.

use serde::Serialize;
use thiserror::Error;

/// Lookup failure for a difficulty name outside the fixed set.
///
/// Should never occur with a well-formed input surface, but it is a defined
/// error rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty preset: {0:?}")]
pub struct UnknownDifficulty(pub String);

/// An immutable bundle of difficulty-tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyPreset {
    pub name: &'static str,
    /// Wall-clock interval between balloon spawns
    pub spawn_interval_ms: u64,
    /// Fall-speed range balloons sample from at spawn time (units/tick)
    pub min_fall_speed: f32,
    pub max_fall_speed: f32,
    /// Applied to each balloon's base score on pop, floored
    pub score_multiplier: f32,
    /// Accent color for presentation chrome; no gameplay effect
    pub accent_color: [u8; 3],
}

/// The fixed preset set, in selection-surface order
pub const PRESETS: [DifficultyPreset; 3] = [
    DifficultyPreset {
        name: "Easy",
        spawn_interval_ms: 1800,
        min_fall_speed: 1.5,
        max_fall_speed: 3.0,
        score_multiplier: 1.0,
        accent_color: [0, 150, 0],
    },
    DifficultyPreset {
        name: "Medium",
        spawn_interval_ms: 1300,
        min_fall_speed: 2.0,
        max_fall_speed: 4.5,
        score_multiplier: 1.5,
        accent_color: [255, 220, 0],
    },
    DifficultyPreset {
        name: "Hard",
        spawn_interval_ms: 800,
        min_fall_speed: 3.0,
        max_fall_speed: 6.0,
        score_multiplier: 2.0,
        accent_color: [255, 140, 0],
    },
];

/// Look up a preset by its exact name
pub fn get(name: &str) -> Result<&'static DifficultyPreset, UnknownDifficulty> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| UnknownDifficulty(name.to_string()))
}

//! Abstract audio boundary
//!
//! The core emits sound notifications; whether anything plays them is up to
//! an external audio layer. A missing backend must not change simulation
//! behavior, so the default sink does nothing.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile fired
    Fire,
    /// Balloon popped
    Pop,
}

/// Consumer of sound notifications
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink for running without an audio backend
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that logs effects, used by the headless demo binary
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sound: {:?}", effect);
    }
}

//! Screen state machine and input routing
//!
//! Owns the session, routes discrete input events per screen, runs the
//! wall-clock spawn scheduler, and handles high-score persistence at the
//! session boundaries. The spawn scheduler is an explicit "next spawn due"
//! timestamp evaluated once per tick, so scheduling stays correct regardless
//! of frame-rate variance; it is armed if and only if the game is playing.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::audio::{AudioSink, SoundEffect};
use crate::difficulty::{self, UnknownDifficulty};
use crate::highscore::HighScoreStore;
use crate::sim::{self, Session, TickInput, TickResult};
use crate::snapshot::{BalloonView, FrameSnapshot, ProjectileView, ShooterView};

/// The four screens; exactly one is active at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// Discrete input events from the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Fire,
    IncreaseSpeed,
    DecreaseSpeed,
    PauseToggle,
    SelectDifficulty(String),
    ConfirmNewGame,
    Quit,
}

/// Periodic balloon-spawn timer, compared against wall-clock milliseconds
#[derive(Debug, Clone, Copy, Default)]
struct SpawnTimer {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl SpawnTimer {
    fn arm(&mut self, interval_ms: u64, now_ms: u64) {
        self.interval_ms = interval_ms;
        self.next_due_ms = Some(now_ms + interval_ms);
    }

    fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Number of spawns due by `now_ms`; drains every elapsed interval so a
    /// late poll still yields one spawn per interval.
    fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(mut due) = self.next_due_ms else {
            return 0;
        };
        let mut count = 0;
        while due <= now_ms {
            count += 1;
            due += self.interval_ms;
        }
        self.next_due_ms = Some(due);
        count
    }
}

/// The game: screen state machine plus everything it owns
pub struct Game {
    screen: Screen,
    /// Present on every screen except start
    session: Option<Session>,
    spawn_timer: SpawnTimer,
    /// Directional input held for the next tick, cleared after each update
    input: TickInput,
    high_score: u64,
    store: HighScoreStore,
    audio: Box<dyn AudioSink>,
    rng: Pcg32,
    should_quit: bool,
}

impl Game {
    /// Loads the persisted high score once, at startup
    pub fn new(store: HighScoreStore, audio: Box<dyn AudioSink>, rng_seed: u64) -> Self {
        let high_score = store.load();
        log::info!("loaded high score: {high_score}");
        Self {
            screen: Screen::Start,
            session: None,
            spawn_timer: SpawnTimer::default(),
            input: TickInput::default(),
            high_score,
            store,
            audio,
            rng: Pcg32::seed_from_u64(rng_seed),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route one input event according to the current screen.
    ///
    /// Transitions not valid from the current screen are logged no-ops; the
    /// only error is an unknown difficulty name.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now_ms: u64,
    ) -> Result<(), UnknownDifficulty> {
        match event {
            InputEvent::MoveLeft => {
                if self.screen == Screen::Playing {
                    self.input.move_left = true;
                }
            }
            InputEvent::MoveRight => {
                if self.screen == Screen::Playing {
                    self.input.move_right = true;
                }
            }
            InputEvent::Fire => {
                if self.screen == Screen::Playing {
                    if let Some(session) = self.session.as_mut() {
                        session.fire();
                        self.audio.play(SoundEffect::Fire);
                    }
                }
            }
            InputEvent::IncreaseSpeed => {
                if self.screen == Screen::Playing {
                    if let Some(session) = self.session.as_mut() {
                        session.adjust_shooter_speed(1.0);
                    }
                }
            }
            InputEvent::DecreaseSpeed => {
                if self.screen == Screen::Playing {
                    if let Some(session) = self.session.as_mut() {
                        session.adjust_shooter_speed(-1.0);
                    }
                }
            }
            InputEvent::PauseToggle => match self.screen {
                Screen::Playing => {
                    log::info!("paused");
                    self.spawn_timer.disarm();
                    self.screen = Screen::Paused;
                }
                Screen::Paused => {
                    // Parameters unchanged; the scheduler restarts from now
                    log::info!("resumed");
                    if let Some(session) = &self.session {
                        self.spawn_timer
                            .arm(session.difficulty.spawn_interval_ms, now_ms);
                    }
                    self.screen = Screen::Playing;
                }
                _ => log::warn!("pause toggle ignored on {:?} screen", self.screen),
            },
            InputEvent::SelectDifficulty(name) => {
                if self.screen != Screen::Start {
                    log::warn!("difficulty selection ignored on {:?} screen", self.screen);
                    return Ok(());
                }
                let preset = difficulty::get(&name)?;
                log::info!(
                    "starting game: {} (interval {}ms, speed {}-{}, x{})",
                    preset.name,
                    preset.spawn_interval_ms,
                    preset.min_fall_speed,
                    preset.max_fall_speed,
                    preset.score_multiplier
                );
                self.session = Some(Session::new(preset));
                self.spawn_timer.arm(preset.spawn_interval_ms, now_ms);
                self.screen = Screen::Playing;
            }
            InputEvent::ConfirmNewGame => {
                if self.screen == Screen::GameOver {
                    log::info!("back to start screen");
                    self.session = None;
                    self.screen = Screen::Start;
                } else {
                    log::warn!("new game ignored on {:?} screen", self.screen);
                }
            }
            InputEvent::Quit => {
                log::info!("quitting, persisting high score {}", self.high_score);
                self.store.save(self.high_score);
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Run one fixed tick: evaluate the spawn scheduler, advance the
    /// simulation, emit notifications, and handle session end.
    ///
    /// Outside the playing screen this does nothing.
    pub fn update(&mut self, now_ms: u64) -> Option<TickResult> {
        if self.screen != Screen::Playing {
            return None;
        }
        let session = self.session.as_mut()?;
        debug_assert!(self.spawn_timer.is_armed());

        for _ in 0..self.spawn_timer.poll(now_ms) {
            session.spawn_balloon(&mut self.rng);
        }

        let result = sim::tick(session, &self.input);
        self.input = TickInput::default();

        for _ in 0..result.balloons_popped {
            self.audio.play(SoundEffect::Pop);
        }
        if result.balloons_missed > 0 {
            log::debug!(
                "{} balloon(s) missed, lives left: {}",
                result.balloons_missed,
                session.lives
            );
        }

        if result.should_end_game {
            self.end_session();
        }
        Some(result)
    }

    /// Lives exhausted: disarm the scheduler and persist a beaten high score
    /// at this exact moment.
    fn end_session(&mut self) {
        self.spawn_timer.disarm();
        self.screen = Screen::GameOver;
        if let Some(session) = &self.session {
            log::info!("game over, final score {}", session.score);
            if session.score > self.high_score {
                log::info!("new high score: {}", session.score);
                self.high_score = session.score;
                self.store.save(self.high_score);
            }
        }
    }

    /// Read-only state for the presentation adapter
    pub fn snapshot(&self) -> FrameSnapshot {
        let session = self.session.as_ref();
        FrameSnapshot {
            screen: self.screen,
            score: session.map(|s| s.score).unwrap_or(0),
            lives: session.map(|s| s.lives).unwrap_or(0),
            high_score: self.high_score,
            shooter: session.map(|s| ShooterView::at(s.shooter_x, s.shooter_speed)),
            balloons: session
                .map(|s| {
                    s.balloons
                        .iter()
                        .map(|b| BalloonView {
                            pos: b.pos,
                            radius: b.radius,
                            color: b.color,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            projectiles: session
                .map(|s| {
                    s.projectiles
                        .iter()
                        .map(|p| ProjectileView {
                            pos: p.pos,
                            width: crate::consts::BULLET_WIDTH,
                            height: crate::consts::BULLET_HEIGHT,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            difficulty: session.map(|s| s.difficulty.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::consts::*;
    use crate::sim::entity::Balloon;
    use glam::Vec2;
    use std::sync::{Arc, Mutex};

    struct RecordingAudio(Arc<Mutex<Vec<SoundEffect>>>);

    impl AudioSink for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.0.lock().unwrap().push(effect);
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("highscore.txt"))
    }

    fn game(dir: &tempfile::TempDir) -> Game {
        Game::new(store_in(dir), Box::new(NullAudio), 1)
    }

    /// A balloon one step from crossing the bottom boundary
    fn doomed_balloon() -> Balloon {
        Balloon {
            pos: Vec2::new(300.0, PLAY_HEIGHT + 27.0),
            radius: 27.0,
            fall_speed: 1.0,
            base_score: 1,
            color: [0, 0, 255],
        }
    }

    #[test]
    fn test_select_difficulty_starts_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        assert_eq!(g.screen(), Screen::Start);
        assert!(g.session().is_none());

        g.handle_event(InputEvent::SelectDifficulty("Hard".into()), 0)
            .unwrap();
        assert_eq!(g.screen(), Screen::Playing);
        assert!(g.spawn_timer.is_armed());
        let session = g.session().unwrap();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, INITIAL_LIVES);
        assert_eq!(session.difficulty.name, "Hard");
    }

    #[test]
    fn test_unknown_difficulty_is_error_and_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        let err = g
            .handle_event(InputEvent::SelectDifficulty("Impossible".into()), 0)
            .unwrap_err();
        assert_eq!(err.0, "Impossible");
        assert_eq!(g.screen(), Screen::Start);
        assert!(!g.spawn_timer.is_armed());
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);

        // Pause and new-game do nothing from start
        g.handle_event(InputEvent::PauseToggle, 0).unwrap();
        assert_eq!(g.screen(), Screen::Start);
        g.handle_event(InputEvent::ConfirmNewGame, 0).unwrap();
        assert_eq!(g.screen(), Screen::Start);

        // Selecting again while playing does not reset the session
        g.handle_event(InputEvent::SelectDifficulty("Easy".into()), 0)
            .unwrap();
        g.session.as_mut().unwrap().score = 99;
        g.handle_event(InputEvent::SelectDifficulty("Hard".into()), 0)
            .unwrap();
        assert_eq!(g.session().unwrap().score, 99);
        assert_eq!(g.session().unwrap().difficulty.name, "Easy");
    }

    #[test]
    fn test_pause_resume_preserves_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        g.handle_event(InputEvent::SelectDifficulty("Medium".into()), 0)
            .unwrap();

        // Accumulate some state
        g.handle_event(InputEvent::Fire, 0).unwrap();
        g.update(1300);
        let before = g.session().unwrap().clone();
        assert!(!before.balloons.is_empty());

        g.handle_event(InputEvent::PauseToggle, 2000).unwrap();
        assert_eq!(g.screen(), Screen::Paused);
        assert!(!g.spawn_timer.is_armed());
        // Ticks do nothing while paused
        assert!(g.update(2500).is_none());

        g.handle_event(InputEvent::PauseToggle, 3000).unwrap();
        assert_eq!(g.screen(), Screen::Playing);
        assert!(g.spawn_timer.is_armed());

        let after = g.session().unwrap();
        assert_eq!(after.score, before.score);
        assert_eq!(after.lives, before.lives);
        assert_eq!(after.shooter_x, before.shooter_x);
        assert_eq!(after.balloons, before.balloons);
        assert_eq!(after.projectiles, before.projectiles);
        assert_eq!(after.difficulty.name, before.difficulty.name);
    }

    #[test]
    fn test_scheduler_spawns_one_per_interval() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        // Hard: one spawn every 800ms
        g.handle_event(InputEvent::SelectDifficulty("Hard".into()), 0)
            .unwrap();

        g.update(10);
        assert_eq!(g.session().unwrap().balloons.len(), 0);
        g.update(800);
        assert_eq!(g.session().unwrap().balloons.len(), 1);
        // Late poll still yields one balloon per elapsed interval
        g.update(3200);
        assert_eq!(g.session().unwrap().balloons.len(), 4);
    }

    #[test]
    fn test_scheduler_never_fires_outside_playing() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        g.handle_event(InputEvent::SelectDifficulty("Hard".into()), 0)
            .unwrap();
        g.handle_event(InputEvent::PauseToggle, 100).unwrap();

        // A long pause spawns nothing
        assert!(g.update(60_000).is_none());
        assert!(g.session().unwrap().balloons.is_empty());

        // Resume re-arms relative to the resume time
        g.handle_event(InputEvent::PauseToggle, 60_000).unwrap();
        g.update(60_000 + 799);
        assert!(g.session().unwrap().balloons.is_empty());
        g.update(60_000 + 800);
        assert_eq!(g.session().unwrap().balloons.len(), 1);
    }

    #[test]
    fn test_fire_emits_sound_only_while_playing() {
        let dir = tempfile::tempdir().unwrap();
        let played = Arc::new(Mutex::new(Vec::new()));
        let mut g = Game::new(
            store_in(&dir),
            Box::new(RecordingAudio(played.clone())),
            1,
        );

        g.handle_event(InputEvent::Fire, 0).unwrap();
        assert!(played.lock().unwrap().is_empty());

        g.handle_event(InputEvent::SelectDifficulty("Easy".into()), 0)
            .unwrap();
        g.handle_event(InputEvent::Fire, 0).unwrap();
        assert_eq!(*played.lock().unwrap(), vec![SoundEffect::Fire]);
        assert_eq!(g.session().unwrap().projectiles.len(), 1);
    }

    #[test]
    fn test_pop_emits_sound() {
        let dir = tempfile::tempdir().unwrap();
        let played = Arc::new(Mutex::new(Vec::new()));
        let mut g = Game::new(
            store_in(&dir),
            Box::new(RecordingAudio(played.clone())),
            1,
        );
        g.handle_event(InputEvent::SelectDifficulty("Easy".into()), 0)
            .unwrap();

        let session = g.session.as_mut().unwrap();
        session.balloons.push(Balloon {
            pos: Vec2::new(300.0, 400.0),
            radius: 20.0,
            fall_speed: 0.0,
            base_score: 2,
            color: [255, 0, 0],
        });
        session
            .projectiles
            .push(crate::sim::entity::Projectile {
                pos: Vec2::new(297.5, 405.0),
            });
        let result = g.update(10).unwrap();
        assert_eq!(result.balloons_popped, 1);
        assert_eq!(*played.lock().unwrap(), vec![SoundEffect::Pop]);
    }

    #[test]
    fn test_speed_adjustment_routed_while_playing() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        g.handle_event(InputEvent::SelectDifficulty("Easy".into()), 0)
            .unwrap();
        g.handle_event(InputEvent::IncreaseSpeed, 0).unwrap();
        assert_eq!(
            g.session().unwrap().shooter_speed,
            INITIAL_SHOOTER_SPEED + 1.0
        );
        g.handle_event(InputEvent::PauseToggle, 0).unwrap();
        g.handle_event(InputEvent::IncreaseSpeed, 0).unwrap();
        assert_eq!(
            g.session().unwrap().shooter_speed,
            INITIAL_SHOOTER_SPEED + 1.0
        );
    }

    #[test]
    fn test_six_misses_end_the_game_without_touching_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(50);
        let mut g = Game::new(store, Box::new(NullAudio), 1);
        assert_eq!(g.high_score(), 50);

        g.handle_event(InputEvent::SelectDifficulty("Hard".into()), 0)
            .unwrap();
        for miss in 1..=6 {
            g.session.as_mut().unwrap().balloons.push(doomed_balloon());
            // now_ms stays below the spawn interval so no extra balloons
            g.update(miss as u64 * 10);
            if miss < 6 {
                assert_eq!(g.screen(), Screen::Playing, "still alive at miss {miss}");
            }
        }
        assert_eq!(g.screen(), Screen::GameOver);
        assert!(!g.spawn_timer.is_armed());
        // Score 0 never beats an existing high score
        assert_eq!(g.high_score(), 50);
        assert_eq!(store_in(&dir).load(), 50);
    }

    #[test]
    fn test_high_score_persisted_on_game_over() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        g.handle_event(InputEvent::SelectDifficulty("Hard".into()), 0)
            .unwrap();
        g.session.as_mut().unwrap().score = 77;
        g.session.as_mut().unwrap().lives = 0;
        g.session.as_mut().unwrap().balloons.push(doomed_balloon());
        g.update(10);
        assert_eq!(g.screen(), Screen::GameOver);
        assert_eq!(g.high_score(), 77);
        assert_eq!(store_in(&dir).load(), 77);
    }

    #[test]
    fn test_new_game_clears_difficulty() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        g.handle_event(InputEvent::SelectDifficulty("Medium".into()), 0)
            .unwrap();
        g.session.as_mut().unwrap().lives = 0;
        g.session.as_mut().unwrap().balloons.push(doomed_balloon());
        g.update(10);
        assert_eq!(g.screen(), Screen::GameOver);

        g.handle_event(InputEvent::ConfirmNewGame, 20).unwrap();
        assert_eq!(g.screen(), Screen::Start);
        assert!(g.session().is_none());
        assert!(g.snapshot().difficulty.is_none());

        // A fresh session resets score and lives regardless of the last run
        g.handle_event(InputEvent::SelectDifficulty("Easy".into()), 30)
            .unwrap();
        let session = g.session().unwrap();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, INITIAL_LIVES);
    }

    #[test]
    fn test_quit_persists_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);
        assert!(!g.should_quit());
        g.handle_event(InputEvent::Quit, 0).unwrap();
        assert!(g.should_quit());
        assert_eq!(store_in(&dir).load(), 0);
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = game(&dir);

        let snap = g.snapshot();
        assert_eq!(snap.screen, Screen::Start);
        assert!(snap.shooter.is_none());
        assert!(snap.difficulty.is_none());

        g.handle_event(InputEvent::SelectDifficulty("Medium".into()), 0)
            .unwrap();
        g.handle_event(InputEvent::Fire, 0).unwrap();
        g.update(1300);

        let snap = g.snapshot();
        assert_eq!(snap.screen, Screen::Playing);
        assert_eq!(snap.difficulty, Some("Medium"));
        assert_eq!(snap.lives, INITIAL_LIVES);
        assert_eq!(snap.balloons.len(), g.session().unwrap().balloons.len());
        assert_eq!(
            snap.projectiles.len(),
            g.session().unwrap().projectiles.len()
        );
        let shooter = snap.shooter.unwrap();
        assert_eq!(shooter.y, SHOOTER_Y);
        assert_eq!(shooter.width, SHOOTER_WIDTH);
    }
}

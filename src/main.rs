//! Balloon Shooter entry point
//!
//! Runs a headless autoplay demo: a simple pilot steers the shooter under
//! the lowest balloon and fires, exercising the whole core without a
//! renderer. Pass a difficulty name as the first argument (default Medium)
//! and optionally a duration in simulated seconds as the second.

use balloon_shooter::audio::LogAudio;
use balloon_shooter::consts::*;
use balloon_shooter::game::{Game, InputEvent, Screen};
use balloon_shooter::highscore::HighScoreStore;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = args.next().unwrap_or_else(|| "Medium".to_string());
    let seconds: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(
        HighScoreStore::default(),
        Box::new(LogAudio),
        seed,
    );

    let mut now_ms = 0u64;
    if let Err(err) = game.handle_event(InputEvent::SelectDifficulty(difficulty), now_ms) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let ticks = seconds * TICK_HZ as u64;
    for _ in 0..ticks {
        if game.screen() != Screen::Playing {
            break;
        }
        autopilot(&mut game, now_ms);
        game.update(now_ms);
        now_ms += TICK_MS;
    }

    let snap = game.snapshot();
    log::info!(
        "demo finished on {:?} screen after {}ms: score {}, lives {}, high score {}",
        snap.screen,
        now_ms,
        snap.score,
        snap.lives,
        snap.high_score
    );
    println!("score: {}  high score: {}", snap.score, snap.high_score);

    // Persists the high score on the way out
    let _ = game.handle_event(InputEvent::Quit, now_ms);
}

/// Steer under the lowest balloon and fire when roughly lined up
fn autopilot(game: &mut Game, now_ms: u64) {
    let Some(session) = game.session() else {
        return;
    };
    let Some(target) = session
        .balloons
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    else {
        return;
    };

    let muzzle_x = session.shooter_x + SHOOTER_WIDTH / 2.0;
    let dx = target.pos.x - muzzle_x;
    let event = if dx < -session.shooter_speed {
        Some(InputEvent::MoveLeft)
    } else if dx > session.shooter_speed {
        Some(InputEvent::MoveRight)
    } else if session.projectiles.len() < 3 {
        Some(InputEvent::Fire)
    } else {
        None
    };
    if let Some(event) = event {
        // Input routing never fails outside difficulty selection
        let _ = game.handle_event(event, now_ms);
    }
}

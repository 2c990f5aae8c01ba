//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use charades::{Card, Effect, Event, GameMode, Session, SessionConfig, Team};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a test-captured subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// `n` distinct cards.
pub fn cards(n: usize) -> Vec<Card> {
    (0..n).map(|i| Card::new(format!("Word {}", i), "Mixed")).collect()
}

pub fn two_teams() -> Vec<Team> {
    vec![
        Team::new("Reds", ["Ann", "Bo"]),
        Team::new("Blues", ["Cy", "Di", "Ed"]),
    ]
}

pub fn ffa_session(players: &[&str], rounds: u32, timer: Option<u32>) -> Session {
    init_logging();
    let mut config = SessionConfig::free_for_all(players.iter().copied())
        .with_rounds(rounds)
        .with_cards(cards(12))
        .with_seed(11);
    if let Some(secs) = timer {
        config = config.with_timer(secs);
    }
    Session::new(config).unwrap()
}

pub fn team_session(mode: GameMode, rounds: u32, timer: u32) -> Session {
    init_logging();
    let config = SessionConfig::teams(mode, two_teams())
        .with_rounds(rounds)
        .with_timer(timer)
        .with_cards(cards(12))
        .with_seed(11);
    Session::new(config).unwrap()
}

/// Deliver `n` ticks for the current timer epoch, collecting effects.
pub fn tick(session: &mut Session, n: u32) -> Vec<Effect> {
    let mut effects = Vec::new();
    for _ in 0..n {
        let epoch = session.timer_epoch();
        effects.extend(session.apply(Event::Tick { epoch }).unwrap());
    }
    effects
}

/// Epoch announced by a `TimerStarted` effect, if any.
pub fn started_epoch(effects: &[Effect]) -> Option<u64> {
    effects.iter().find_map(|e| match e {
        Effect::TimerStarted { epoch, .. } => Some(*epoch),
        _ => None,
    })
}

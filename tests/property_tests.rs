//! Property tests over dealing, rotation and whole sessions.
//!
//! Sessions are driven with arbitrary action sequences, most of them
//! invalid for the phase they land in. The properties must hold for every
//! state such a sequence reaches.

mod common;

use std::collections::HashMap;

use charades::schedule::TeamStandard;
use charades::{
    Card, CardDeck, Effect, Event, GameMode, GameRng, Guess, Phase, PlayerId, Session,
    SessionConfig, SessionError, Team,
};
use common::{cards, init_logging};
use proptest::prelude::*;

/// Inputs a player (or the clock) could produce at any moment.
#[derive(Clone, Copy, Debug)]
enum Action {
    ShowCard,
    Ready,
    Correct,
    Skip,
    NextPlayer,
    Select(u8),
    SelectNobody,
    Confirm,
    Tick,
    StaleTick,
    PlayAgain,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::ShowCard),
        1 => Just(Action::Ready),
        2 => Just(Action::Correct),
        1 => Just(Action::Skip),
        1 => Just(Action::NextPlayer),
        1 => (0u8..5).prop_map(Action::Select),
        1 => Just(Action::SelectNobody),
        1 => Just(Action::Confirm),
        4 => Just(Action::Tick),
        1 => Just(Action::StaleTick),
        1 => Just(Action::PlayAgain),
    ]
}

fn to_event(action: Action, session: &Session) -> Event {
    let epoch = session.timer_epoch();
    match action {
        Action::ShowCard => Event::ShowCard,
        Action::Ready => Event::Ready,
        Action::Correct => Event::Correct,
        Action::Skip => Event::Skip,
        Action::NextPlayer => Event::NextPlayer,
        Action::Select(i) => Event::SelectGuesser(Guess::Player(PlayerId::new(i))),
        Action::SelectNobody => Event::SelectGuesser(Guess::Nobody),
        Action::Confirm => Event::ConfirmGuess,
        Action::Tick => Event::Tick { epoch },
        Action::StaleTick => Event::Tick {
            epoch: epoch.wrapping_sub(1),
        },
        Action::PlayAgain => Event::PlayAgain,
    }
}

fn build_session(mode: u8, size: usize, rounds: u32, seed: u64) -> Session {
    init_logging();
    let config = match mode % 3 {
        0 => {
            let players: Vec<String> = (0..size).map(|i| format!("p{}", i)).collect();
            SessionConfig::free_for_all(players).with_timer(5)
        }
        m => {
            let mode = if m == 1 { GameMode::TeamStandard } else { GameMode::HotSeat };
            let teams = vec![
                Team::new("Reds", (0..size.max(2)).map(|i| format!("r{}", i))),
                Team::new("Blues", ["b0", "b1"]),
            ];
            SessionConfig::teams(mode, teams).with_timer(5)
        }
    };
    Session::new(config.with_rounds(rounds).with_cards(cards(6)).with_seed(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: N draws from a pool of N cards deal each card exactly once,
    /// and the next N draws do it again.
    #[test]
    fn prop_fair_shuffle_covers_pool(n in 1usize..40, seed in any::<u64>()) {
        let mut deck = CardDeck::new(cards(n), GameRng::new(seed)).unwrap();

        for cycle in 1..=2u32 {
            let mut counts: HashMap<Card, usize> = HashMap::new();
            for _ in 0..n {
                *counts.entry(deck.next_card()).or_default() += 1;
            }
            prop_assert_eq!(counts.len(), n);
            prop_assert!(counts.values().all(|&c| c == 1));
            prop_assert_eq!(deck.cycle(), cycle);
        }
    }

    /// Property: in a team-standard round nobody performs twice before every
    /// teammate has performed, and turns per player differ by at most one.
    #[test]
    fn prop_team_standard_fairness(
        sizes in proptest::collection::vec(2usize..=10, 2..=5),
        seed in any::<u64>(),
    ) {
        let teams: Vec<Team> = sizes
            .iter()
            .enumerate()
            .map(|(t, &size)| {
                Team::new(format!("T{}", t), (0..size).map(move |p| format!("t{}p{}", t, p)))
            })
            .collect();
        let max_turns = *sizes.iter().max().unwrap();
        let standard = TeamStandard::new(teams, 1, GameRng::new(seed)).unwrap();

        prop_assert_eq!(standard.order().len(), max_turns * sizes.len());

        for (t, &size) in sizes.iter().enumerate() {
            let turns: Vec<&str> = standard
                .order()
                .iter()
                .filter(|e| e.team.index() == t)
                .map(|e| e.player.as_str())
                .collect();
            prop_assert_eq!(turns.len(), max_turns);

            let mut first_pass = turns[..size].to_vec();
            first_pass.sort_unstable();
            first_pass.dedup();
            prop_assert_eq!(first_pass.len(), size);

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for &player in &turns {
                *counts.entry(player).or_default() += 1;
            }
            let floor = max_turns / size;
            prop_assert!(counts.values().all(|&c| c >= floor && c <= floor + 1));
        }
    }

    /// Property: no score ever goes down.
    #[test]
    fn prop_scores_never_decrease(
        mode in 0u8..3,
        size in 1usize..5,
        rounds in 1u32..3,
        seed in any::<u64>(),
        actions in proptest::collection::vec(action(), 0..150),
    ) {
        let mut session = build_session(mode, size, rounds, seed);
        let mut last = session.scoreboard().scores();

        for action in actions {
            let event = to_event(action, &session);
            let accepted = session.apply(event).is_ok();
            let scores = session.scoreboard().scores();
            if accepted && event == Event::PlayAgain {
                // Fresh game: scores start over.
                prop_assert!(scores.iter().all(|&s| s == 0));
            } else {
                prop_assert!(scores.iter().zip(&last).all(|(now, before)| now >= before));
            }
            last = scores;
        }
    }

    /// Property: while a guess is pending, only confirming it can close the turn.
    #[test]
    fn prop_guess_gate_holds(
        size in 1usize..5,
        seed in any::<u64>(),
        actions in proptest::collection::vec(action(), 0..150),
    ) {
        let mut session = build_session(0, size, 2, seed);

        for action in actions {
            let event = to_event(action, &session);
            let pending = session.phase() == Phase::AwaitingGuess;
            let before = session.snapshot();
            let outcome = session.apply(event);

            if !pending || event == Event::ConfirmGuess {
                continue;
            }
            prop_assert_eq!(session.phase(), Phase::AwaitingGuess);
            if let Ok(effects) = &outcome {
                prop_assert!(!effects.iter().any(|e| matches!(e, Effect::TurnEnded(_))));
            }
            if event == Event::NextPlayer {
                prop_assert_eq!(outcome, Err(SessionError::GuessPending));
                prop_assert_eq!(session.snapshot(), before);
            }
        }
    }
}

//! The session reducer.
//!
//! ## Event handling
//!
//! [`Session::apply`] takes one event, checks it against the current phase
//! and either rejects it with a [`SessionError`] or applies it and returns
//! the resulting effects. Handlers validate before they mutate, so a
//! rejected event leaves the session exactly as it was.
//!
//! ## Timer signals
//!
//! Ticks and expiries carry the timer epoch they were scheduled for. Signals
//! from an older epoch, or arriving in a phase without a running clock, are
//! dropped without effects. An expiry caused by a tick is queued and handled
//! after the tick itself, within the same `apply` call.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::cards::{Card, CardDeck};
use crate::core::{GameMode, GameRng, PlayerId, SessionConfig, TimerSettings, PENALTY_SECS};
use crate::error::{ConfigError, SessionError};
use crate::schedule::{
    Actor, Advance, AfterCorrect, AfterExpiry, PenaltyExit, Rotation, TurnScheduler,
};
use crate::scoring::{GameResult, Outcome, Scoreboard};
use crate::timer::{Countdown, TimerController};

use super::{ActorView, Cue, Effect, Event, Guess, Phase, SessionSnapshot, TimerView};

/// Skip cooldown in progress.
#[derive(Clone, Debug)]
struct Penalty {
    countdown: Countdown,
    exit: PenaltyExit,
}

/// One play-through from first turn to game over.
#[derive(Clone, Debug)]
pub struct Session {
    mode: GameMode,
    timer_settings: TimerSettings,
    phase: Phase,
    scheduler: TurnScheduler,
    deck: CardDeck,
    timer: TimerController,
    penalty: Option<Penalty>,
    board: Scoreboard,
    card: Option<Card>,
    guess: Option<Guess>,
    result: Option<GameResult>,
    queued: VecDeque<Event>,
}

impl Session {
    /// Validate `config` and set up the first turn.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let scheduler = TurnScheduler::new(
            config.mode,
            &config.roster,
            config.rounds_total,
            rng.for_context("turns"),
        )?;
        let board = Scoreboard::new(config.roster.entity_names());
        let deck = CardDeck::new(config.card_pool, rng.for_context("deck"))?;
        let phase = Phase::opening(scheduler.turn_start());

        info!(
            mode = %config.mode,
            seed = rng.seed(),
            entities = board.len(),
            rounds = config.rounds_total,
            timer = config.timer.enabled,
            cards = deck.pool_size(),
            "session created"
        );

        Ok(Self {
            mode: config.mode,
            timer_settings: config.timer,
            phase,
            scheduler,
            deck,
            timer: TimerController::new(config.timer.duration_secs),
            penalty: None,
            board,
            card: None,
            guess: None,
            result: None,
            queued: VecDeque::new(),
        })
    }

    /// Process one event.
    ///
    /// On error nothing changed; the error's message is the notice to show.
    pub fn apply(&mut self, event: Event) -> Result<Vec<Effect>, SessionError> {
        let mut effects = Vec::new();
        if let Err(err) = self.step(event, &mut effects) {
            warn!(phase = %self.phase, event = event.name(), error = %err, "event rejected");
            return Err(err);
        }

        while let Some(next) = self.queued.pop_front() {
            if let Err(err) = self.step(next, &mut effects) {
                debug!(event = next.name(), error = %err, "queued event dropped");
            }
        }
        Ok(effects)
    }

    /// Owned form of [`Session::apply`], for callers that fold over events.
    pub fn reduce(mut self, event: Event) -> (Self, Result<Vec<Effect>, SessionError>) {
        let outcome = self.apply(event);
        (self, outcome)
    }

    fn step(&mut self, event: Event, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        match event {
            Event::ShowCard => self.show_card(fx),
            Event::Ready => self.ready(fx),
            Event::Correct => self.correct(fx),
            Event::Skip => self.skip(fx),
            Event::NextPlayer => self.next_player(fx),
            Event::SelectGuesser(guess) => self.select_guesser(guess),
            Event::ConfirmGuess => self.confirm_guess(fx),
            Event::Tick { epoch } => {
                self.tick(epoch, fx);
                Ok(())
            }
            Event::TimerExpired { epoch } => {
                self.expire(epoch, fx);
                Ok(())
            }
            Event::PlayAgain => self.play_again(fx),
            Event::Restart => self.restart(fx),
        }
    }

    fn reject(&self, event: Event) -> SessionError {
        SessionError::InvalidTransition {
            phase: self.phase,
            event: event.name(),
        }
    }

    // === User actions ===

    fn show_card(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase != Phase::Ready {
            return Err(self.reject(Event::ShowCard));
        }
        self.deal(fx);
        self.start_timer(fx);
        self.enter(Phase::Playing, fx);
        Ok(())
    }

    fn ready(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        match self.phase {
            Phase::Handoff => {
                self.deal(fx);
                self.start_timer(fx);
            }
            Phase::CardHandoff => {
                // Clock kept running through the handoff.
                self.scheduler.commit_swap();
                self.deal(fx);
            }
            _ => return Err(self.reject(Event::Ready)),
        }
        self.enter(Phase::Playing, fx);
        Ok(())
    }

    fn correct(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase != Phase::Playing {
            return Err(self.reject(Event::Correct));
        }

        let follow = self.scheduler.on_correct();
        if let Some(outcome) = follow.award {
            self.award(outcome, fx);
        }
        match follow.next {
            AfterCorrect::AwaitGuess => {
                self.stop_timer(fx);
                self.open_guess(fx);
            }
            AfterCorrect::NextCard => self.deal(fx),
            AfterCorrect::SwapPerformer { next } => {
                debug!(performer = %next, "performer swap queued");
                self.card = None;
                self.enter(Phase::CardHandoff, fx);
            }
        }
        Ok(())
    }

    fn skip(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase != Phase::Playing {
            return Err(self.reject(Event::Skip));
        }
        let Some(exit) = self.scheduler.on_skip() else {
            return Err(self.reject(Event::Skip));
        };

        self.card = None;
        self.penalty = Some(Penalty {
            countdown: Countdown::new(PENALTY_SECS),
            exit,
        });
        self.enter(Phase::Penalty, fx);
        Ok(())
    }

    fn next_player(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase == Phase::AwaitingGuess {
            return Err(SessionError::GuessPending);
        }
        if self.phase != Phase::Playing || !self.scheduler.allows_manual_advance() {
            return Err(self.reject(Event::NextPlayer));
        }
        self.end_turn(fx);
        Ok(())
    }

    fn select_guesser(&mut self, guess: Guess) -> Result<(), SessionError> {
        if self.phase != Phase::AwaitingGuess {
            return Err(self.reject(Event::SelectGuesser(guess)));
        }
        if let Guess::Player(id) = guess {
            if id.index() >= self.board.len() {
                return Err(SessionError::UnknownPlayer(id.index()));
            }
            if self.scheduler.actor() == Actor::Player(id) {
                return Err(SessionError::GuesserIsPerformer(id.index()));
            }
        }
        self.guess = Some(guess);
        Ok(())
    }

    fn confirm_guess(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase != Phase::AwaitingGuess {
            return Err(self.reject(Event::ConfirmGuess));
        }
        let Actor::Player(performer) = self.scheduler.actor() else {
            return Err(self.reject(Event::ConfirmGuess));
        };

        let guesser = match self.guess.take() {
            Some(Guess::Player(id)) => Some(id),
            Some(Guess::Nobody) | None => None,
        };
        self.award(Outcome::Solo { performer, guesser }, fx);
        self.end_turn(fx);
        Ok(())
    }

    fn play_again(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase != Phase::GameOver {
            return Err(self.reject(Event::PlayAgain));
        }
        self.board = self.board.reset();
        self.scheduler.reset();
        self.stop_timer(fx);
        self.penalty = None;
        self.card = None;
        self.guess = None;
        self.result = None;

        info!(mode = %self.mode, "playing again");
        self.enter(Phase::opening(self.scheduler.turn_start()), fx);
        Ok(())
    }

    fn restart(&mut self, fx: &mut Vec<Effect>) -> Result<(), SessionError> {
        if self.phase != Phase::GameOver {
            return Err(self.reject(Event::Restart));
        }
        info!("restart requested");
        fx.push(Effect::RestartRequested);
        Ok(())
    }

    // === Timer signals ===

    fn tick(&mut self, epoch: u64, fx: &mut Vec<Effect>) {
        if !self.phase.is_timed() {
            debug!(epoch, phase = %self.phase, "tick outside timed phase dropped");
            return;
        }
        let Some(report) = self.timer.tick(epoch) else {
            debug!(epoch, current = self.timer.epoch(), "stale tick dropped");
            return;
        };

        fx.push(Effect::TimerTicked {
            remaining: report.remaining,
        });
        if report.crossed_cue_threshold {
            fx.push(Effect::Cue(Cue::TimerWarning));
        }
        if report.crossed_low_threshold {
            fx.push(Effect::LowTime);
        }
        if report.expired {
            fx.push(Effect::TimerStopped);
            self.queued.push_back(Event::TimerExpired { epoch });
            return;
        }

        let penalty_over = self
            .penalty
            .as_mut()
            .map(|p| p.countdown.tick())
            .unwrap_or(false);
        if penalty_over {
            self.end_penalty(fx);
        }
    }

    fn expire(&mut self, epoch: u64, fx: &mut Vec<Effect>) {
        let was_running = self.timer.is_running();
        if !self.phase.is_timed() || !self.timer.expire(epoch) {
            debug!(epoch, phase = %self.phase, "stale expiry dropped");
            return;
        }
        // A tick that ran the clock out has already reported the stop.
        if was_running {
            fx.push(Effect::TimerStopped);
        }

        debug!(phase = %self.phase, "timer expired");
        match self.scheduler.on_expiry() {
            AfterExpiry::AwaitGuess => self.open_guess(fx),
            AfterExpiry::EndTurn => self.end_turn(fx),
        }
    }

    // === Shared steps ===

    fn enter(&mut self, to: Phase, fx: &mut Vec<Effect>) {
        let from = self.phase;
        self.phase = to;
        debug!(%from, %to, "phase change");
        fx.push(Effect::PhaseChanged { from, to });
    }

    fn deal(&mut self, fx: &mut Vec<Effect>) {
        let card = self.deck.next_card();
        fx.push(Effect::CardDealt(card.clone()));
        self.card = Some(card);
    }

    fn start_timer(&mut self, fx: &mut Vec<Effect>) {
        if !self.timer_settings.enabled {
            return;
        }
        let duration = self.timer_settings.duration_secs;
        let epoch = self.timer.start(duration);
        fx.push(Effect::TimerStarted { epoch, duration });
    }

    fn stop_timer(&mut self, fx: &mut Vec<Effect>) {
        if self.timer.is_running() {
            self.timer.stop();
            fx.push(Effect::TimerStopped);
        }
    }

    fn award(&mut self, outcome: Outcome, fx: &mut Vec<Effect>) {
        let delta = outcome.delta();
        if delta.is_empty() {
            return;
        }
        self.board = self.board.apply(&delta);
        for &(index, points) in delta.awards() {
            fx.push(Effect::ScoreAwarded { index, points });
        }
        debug!(?outcome, "score awarded");
    }

    fn open_guess(&mut self, fx: &mut Vec<Effect>) {
        let default = match self.scheduler.actor() {
            Actor::Player(performer) => PlayerId::all(self.board.len())
                .find(|&p| p != performer)
                .map_or(Guess::Nobody, Guess::Player),
            Actor::Team { .. } => Guess::Nobody,
        };
        self.guess = Some(default);
        self.enter(Phase::AwaitingGuess, fx);
    }

    fn end_penalty(&mut self, fx: &mut Vec<Effect>) {
        let Some(penalty) = self.penalty.take() else {
            return;
        };
        match penalty.exit {
            PenaltyExit::NextCard => {
                self.deal(fx);
                self.enter(Phase::Playing, fx);
            }
            PenaltyExit::SwapPerformer { next } => {
                debug!(performer = %next, "penalty over, swapping performer");
                self.enter(Phase::CardHandoff, fx);
            }
        }
    }

    fn end_turn(&mut self, fx: &mut Vec<Effect>) {
        self.stop_timer(fx);
        self.penalty = None;
        self.card = None;
        self.guess = None;

        let advance = self.scheduler.advance();
        debug!(?advance, round = self.scheduler.round(), "turn ended");
        fx.push(Effect::TurnEnded(advance));

        if advance == Advance::Finished {
            self.finish(fx);
        } else {
            self.enter(Phase::opening(self.scheduler.turn_start()), fx);
        }
    }

    fn finish(&mut self, fx: &mut Vec<Effect>) {
        self.result = self.board.result();
        info!(result = ?self.result, scores = ?self.board.scores(), "game over");
        self.enter(Phase::GameOver, fx);
        fx.push(Effect::Cue(Cue::Fanfare));
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.scheduler.round()
    }

    #[must_use]
    pub fn actor(&self) -> Actor {
        self.scheduler.actor()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    #[must_use]
    pub fn pending_guess(&self) -> Option<Guess> {
        self.guess
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn timer(&self) -> &TimerController {
        &self.timer
    }

    /// Epoch the host must put on the next tick.
    #[must_use]
    pub fn timer_epoch(&self) -> u64 {
        self.timer.epoch()
    }

    #[must_use]
    pub fn penalty_remaining(&self) -> Option<u32> {
        self.penalty.as_ref().map(|p| p.countdown.remaining())
    }

    /// Capture the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            phase: self.phase,
            round: self.scheduler.round(),
            rounds_total: self.scheduler.rounds_total(),
            actor: ActorView::new(self.scheduler.actor(), &self.board),
            card: self.card.clone(),
            timer: TimerView {
                enabled: self.timer_settings.enabled,
                running: self.timer.is_running(),
                remaining: self.timer.remaining(),
                duration: self.timer.duration(),
                low: self.timer.is_low(),
            },
            penalty_remaining: self.penalty_remaining(),
            scoreboard: self.board.clone(),
            standings: self.board.standings(),
            pending_guess: self.guess,
            next_performer: self.scheduler.pending_performer().map(str::to_string),
            cards_left_in_cycle: self.deck.remaining_in_cycle(),
            result: self.result.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Team;

    fn cards() -> Vec<Card> {
        ["Kite", "Harp", "Drum", "Lamp"]
            .into_iter()
            .map(|w| Card::new(w, "Mixed"))
            .collect()
    }

    fn ffa(players: &[&str]) -> Session {
        let config = SessionConfig::free_for_all(players.iter().copied())
            .with_rounds(1)
            .with_cards(cards())
            .with_seed(3);
        Session::new(config).unwrap()
    }

    fn standard(timer: u32) -> Session {
        let teams = vec![Team::new("Reds", ["a", "b"]), Team::new("Blues", ["c", "d"])];
        let config = SessionConfig::teams(GameMode::TeamStandard, teams)
            .with_rounds(1)
            .with_timer(timer)
            .with_cards(cards())
            .with_seed(3);
        Session::new(config).unwrap()
    }

    #[test]
    fn test_opening_phase_follows_mode() {
        assert_eq!(ffa(&["a", "b"]).phase(), Phase::Ready);
        assert_eq!(standard(30).phase(), Phase::Handoff);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SessionConfig::free_for_all(["a"]).with_seed(1);
        assert_eq!(Session::new(config).unwrap_err(), ConfigError::EmptyCardPool);
    }

    #[test]
    fn test_rejection_leaves_session_unchanged() {
        let mut session = ffa(&["a", "b"]);
        let before = session.snapshot();

        let err = session.apply(Event::Correct).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                phase: Phase::Ready,
                event: "correct"
            }
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_skip_is_rejected_in_free_for_all() {
        let mut session = ffa(&["a", "b"]);
        session.apply(Event::ShowCard).unwrap();
        let before = session.snapshot();

        assert!(session.apply(Event::Skip).is_err());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_guess_defaults_to_first_other_player() {
        let mut session = ffa(&["a", "b", "c"]);
        session.apply(Event::ShowCard).unwrap();
        session.apply(Event::Correct).unwrap();

        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.pending_guess(), Some(Guess::Player(PlayerId::new(1))));
    }

    #[test]
    fn test_guess_defaults_to_nobody_when_alone() {
        let mut session = ffa(&["solo"]);
        session.apply(Event::ShowCard).unwrap();
        session.apply(Event::Correct).unwrap();
        assert_eq!(session.pending_guess(), Some(Guess::Nobody));
    }

    #[test]
    fn test_guess_selection_checks() {
        let mut session = ffa(&["a", "b"]);
        session.apply(Event::ShowCard).unwrap();
        session.apply(Event::Correct).unwrap();

        assert_eq!(
            session
                .apply(Event::SelectGuesser(Guess::Player(PlayerId::new(0))))
                .unwrap_err(),
            SessionError::GuesserIsPerformer(0)
        );
        assert_eq!(
            session
                .apply(Event::SelectGuesser(Guess::Player(PlayerId::new(5))))
                .unwrap_err(),
            SessionError::UnknownPlayer(5)
        );
        session.apply(Event::SelectGuesser(Guess::Nobody)).unwrap();
        assert_eq!(session.pending_guess(), Some(Guess::Nobody));
    }

    #[test]
    fn test_tick_in_untimed_phase_is_dropped() {
        let mut session = standard(30);
        let effects = session.apply(Event::Tick { epoch: 0 }).unwrap();
        assert!(effects.is_empty());
        assert_eq!(session.phase(), Phase::Handoff);
    }

    #[test]
    fn test_expiry_is_handled_after_tick() {
        let mut session = standard(5);
        let effects = session.apply(Event::Ready).unwrap();
        let epoch = match effects.iter().find(|e| matches!(e, Effect::TimerStarted { .. })) {
            Some(Effect::TimerStarted { epoch, duration }) => {
                assert_eq!(*duration, 5);
                *epoch
            }
            _ => panic!("timer was not started"),
        };

        for _ in 0..4 {
            session.apply(Event::Tick { epoch }).unwrap();
        }
        let effects = session.apply(Event::Tick { epoch }).unwrap();

        let ticked = effects
            .iter()
            .position(|e| *e == Effect::TimerTicked { remaining: 0 })
            .unwrap();
        let ended = effects
            .iter()
            .position(|e| matches!(e, Effect::TurnEnded(_)))
            .unwrap();
        assert!(ticked < ended);
        assert_eq!(session.phase(), Phase::Handoff);
    }

    #[test]
    fn test_reduce_returns_new_state() {
        let session = ffa(&["a", "b"]);
        let (session, outcome) = session.reduce(Event::ShowCard);
        assert!(outcome.is_ok());
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.current_card().is_some());
    }
}

//! Game session: composition root and view-layer entry points.

use glam::Vec3;

use super::event::{Generation, ResumeToken, SessionEvent};
use crate::core::{Player, PlayerId, PlayerMap, SessionConfig, TableState};
use crate::error::Result;
use crate::questions::{Deck, QuestionBank};
use crate::rules::{GameResult, PendingQuestion, Phase, PhaseKind, TurnEngine};

/// One running game.
///
/// Sole owner and mutator of the players, the deck view and the phase.
/// Single-threaded: the caller's event loop drives it through `tick`,
/// `submit_answer` and `resume`, then drains the queued events.
///
/// ## Example
///
/// ```
/// use trivia_track::core::SessionConfig;
/// use trivia_track::questions::Question;
/// use trivia_track::rules::PhaseKind;
/// use trivia_track::session::{GameSession, SessionEvent};
///
/// let config = SessionConfig::with_track_length(3)
///     .unwrap()
///     .with_questions(vec![Question::new("2+2?", ["3", "4"], 1)]);
/// let mut session = GameSession::start(config).unwrap();
///
/// session.tick(0.0).unwrap();
/// assert_eq!(session.phase_kind(), PhaseKind::AwaitingAnswer);
///
/// session.submit_answer(1).unwrap();
/// let events = session.drain_events();
/// assert!(events.iter().any(|e| matches!(e, SessionEvent::AnswerResolved { correct: true, .. })));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    table: TableState,
    engine: TurnEngine,
    generation: Generation,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Validate `config`, load and shuffle its questions, and seat the players.
    ///
    /// The session starts in `AwaitingQuestion` for player 0; the first
    /// `tick` or `next_question` serves the first question.
    pub fn start(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let bank = QuestionBank::load(config.questions.iter().cloned())?;
        let table = TableState::new(config.track.clone(), config.player_count, bank, config.seed);
        let generation = Generation::default();
        log::info!(
            "session started: {} player(s), {} waypoints, {} questions",
            config.player_count,
            config.track.len(),
            table.deck().len()
        );
        Ok(Self {
            config,
            table,
            engine: TurnEngine::new(generation),
            generation,
            events: Vec::new(),
        })
    }

    /// Answer the question on the table with option `index`.
    ///
    /// Only accepted in `AwaitingAnswer`; anywhere else it fails with a
    /// `State` error and nothing changes.
    pub fn submit_answer(&mut self, index: usize) -> Result<()> {
        self.engine
            .submit_answer(&mut self.table, &self.config, index, &mut self.events)
    }

    /// Serve the next question now (the "next" button).
    pub fn next_question(&mut self) -> Result<()> {
        self.engine.serve_question(&mut self.table, &mut self.events)
    }

    /// Advance timers and animations by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f32) -> Result<()> {
        self.engine
            .advance(&mut self.table, &self.config, dt_secs, &mut self.events)
    }

    /// End the suspension named by `token` now.
    ///
    /// Returns `false` for stale tokens, which are ignored.
    pub fn resume(&mut self, token: ResumeToken) -> Result<bool> {
        self.engine
            .resume(&mut self.table, &self.config, token, &mut self.events)
    }

    /// Reset to a fresh game with the same config and a re-shuffled deck.
    ///
    /// Pending suspensions are abandoned: the generation bump makes every
    /// outstanding `ResumeToken` stale, and queued events are dropped.
    pub fn restart(&mut self) {
        self.generation = self.generation.next();
        self.table.reset();
        self.engine = TurnEngine::new(self.generation);
        self.events.clear();
        self.events.push(SessionEvent::Restarted {
            generation: self.generation,
        });
        log::info!("session restarted ({})", self.generation);
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        self.engine.phase()
    }

    #[must_use]
    pub fn phase_kind(&self) -> PhaseKind {
        self.engine.phase_kind()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.engine.active_player()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.table.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        (id.index() < self.table.player_count()).then(|| &self.table.players[id])
    }

    #[must_use]
    pub fn scores(&self) -> Vec<(PlayerId, i64)> {
        self.table.scores()
    }

    #[must_use]
    pub fn token_position(&self, id: PlayerId) -> Option<Vec3> {
        self.player(id).map(|p| p.token_position)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&PendingQuestion> {
        self.engine.current_question()
    }

    #[must_use]
    pub fn question_cursor(&self) -> usize {
        self.table.question_cursor()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.table.deck()
    }

    /// Final result once the session is `Complete`.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match self.engine.phase() {
            Phase::Complete(result) => Some(result),
            _ => None,
        }
    }
}

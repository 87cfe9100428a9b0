//! Turn engine: the per-session state machine.
//!
//! One cycle per resolved question:
//!
//! 1. `AwaitingQuestion`: draw from the deck, compute the bonus flag
//! 2. `AwaitingAnswer`: accept exactly one `submit_answer`
//! 3. `Feedback`: wait `feedback_delay_secs`
//! 4. `Moving`: step the active token one waypoint, interpolate until arrival
//! 5. Hand off to the next player, or `Complete` once everyone is home
//!
//! The engine never blocks. `Feedback` and `Moving` are suspensions that
//! `advance` (driven by the caller's tick) or `resume` (driven by a
//! `ResumeToken`) move along.

use crate::core::{PlayerId, SessionConfig, TableState};
use crate::error::{Error, Result};
use crate::movement::TokenMotion;
use crate::questions::Question;
use crate::scoring;
use crate::session::{Generation, ResumeToken, SessionEvent, SuspensionKind};

use super::phase::{GameResult, PendingQuestion, Phase, PhaseKind};

/// State machine for one session generation.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    phase: Phase,
    active: PlayerId,
    generation: Generation,
    /// Questions resolved in this generation.
    turn: u64,
}

impl TurnEngine {
    /// Fresh engine in `AwaitingQuestion` for player 0.
    #[must_use]
    pub fn new(generation: Generation) -> Self {
        Self {
            phase: Phase::AwaitingQuestion,
            active: PlayerId::new(0),
            generation,
            turn: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&PendingQuestion> {
        match &self.phase {
            Phase::AwaitingAnswer(pending) => Some(pending),
            _ => None,
        }
    }

    fn reject(&self, operation: &'static str) -> Error {
        let phase = self.phase.kind();
        log::warn!("rejected `{operation}` in phase {phase}");
        Error::State { operation, phase }
    }

    fn token(&self, kind: SuspensionKind) -> ResumeToken {
        ResumeToken {
            generation: self.generation,
            turn: self.turn,
            kind,
        }
    }

    /// Serve the next question to the active player.
    pub fn serve_question(
        &mut self,
        table: &mut TableState,
        events: &mut Vec<SessionEvent>,
    ) -> Result<()> {
        if !matches!(self.phase, Phase::AwaitingQuestion) {
            return Err(self.reject("next_question"));
        }

        let ordinal = i64::from(table.players[self.active].questions_answered) + 1;
        let is_bonus = scoring::is_bonus(ordinal)?;
        let question: Question = table.draw_question();
        log::debug!(
            "{} gets question #{} (cursor {}, bonus: {})",
            self.active,
            ordinal,
            table.question_cursor(),
            is_bonus
        );

        events.push(SessionEvent::QuestionReady {
            player: self.active,
            options: question.answers.clone(),
            question: question.clone(),
            is_bonus,
        });
        self.phase = Phase::AwaitingAnswer(PendingQuestion { question, is_bonus });
        Ok(())
    }

    /// Resolve the active player's answer and enter `Feedback`.
    pub fn submit_answer(
        &mut self,
        table: &mut TableState,
        config: &SessionConfig,
        selected: usize,
        events: &mut Vec<SessionEvent>,
    ) -> Result<()> {
        let Phase::AwaitingAnswer(pending) = &self.phase else {
            return Err(self.reject("submit_answer"));
        };
        let question = &pending.question;
        if selected >= question.answers.len() {
            return Err(Error::invalid_argument(format!(
                "answer index {selected} out of range for {} options",
                question.answers.len()
            )));
        }

        let correct = question.is_correct(selected);
        let points = if correct {
            scoring::award(config.base_points, pending.is_bonus)?
        } else {
            0
        };
        let player = &mut table.players[self.active];
        let new_score = player
            .score
            .checked_add(points)
            .ok_or_else(|| Error::invalid_argument("score overflow"))?;
        player.score = new_score;
        player.questions_answered += 1;

        events.push(SessionEvent::AnswerResolved {
            player: self.active,
            correct_index: question.correct_answer_index,
            selected_index: selected,
            correct,
            points_earned: points,
            new_score,
        });
        log::debug!(
            "{} answered {} ({}), +{} -> {}",
            self.active,
            selected,
            if correct { "correct" } else { "wrong" },
            points,
            new_score
        );

        self.turn += 1;
        self.phase = Phase::Feedback {
            remaining_secs: config.feedback_delay_secs,
        };
        events.push(SessionEvent::SuspensionStarted {
            token: self.token(SuspensionKind::Feedback),
            duration_secs: config.feedback_delay_secs,
        });
        Ok(())
    }

    /// Run the state machine forward by `dt_secs` of caller time.
    ///
    /// Zero-time transitions (serving a question, starting a move, handing
    /// off the turn) all happen within one call; the loop stops at the
    /// next phase that needs outside input or more time.
    pub fn advance(
        &mut self,
        table: &mut TableState,
        config: &SessionConfig,
        dt_secs: f32,
        events: &mut Vec<SessionEvent>,
    ) -> Result<()> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(Error::invalid_argument(format!(
                "tick delta must be non-negative and finite, got {dt_secs}"
            )));
        }

        let mut budget = dt_secs;
        loop {
            match &mut self.phase {
                Phase::AwaitingQuestion => self.serve_question(table, events)?,
                Phase::AwaitingAnswer(_) | Phase::Complete(_) => return Ok(()),
                Phase::Feedback { remaining_secs } => {
                    if budget < *remaining_secs {
                        *remaining_secs -= budget;
                        return Ok(());
                    }
                    budget -= *remaining_secs;
                    self.begin_move(table, config, events);
                }
                Phase::Moving(motion) => {
                    let sample = motion.advance(budget, config.speed)?;
                    budget = 0.0;
                    let motion = *motion;
                    table.players[motion.player].token_position = sample.position;
                    if !sample.arrived(motion.end) {
                        return Ok(());
                    }
                    self.finish_move(table, motion, events);
                }
            }
        }
    }

    /// End the suspension named by `token` right away.
    ///
    /// Returns `Ok(false)` and changes nothing when the token is stale:
    /// minted by an earlier generation, an earlier turn, or for a
    /// suspension that already ended.
    pub fn resume(
        &mut self,
        table: &mut TableState,
        config: &SessionConfig,
        token: ResumeToken,
        events: &mut Vec<SessionEvent>,
    ) -> Result<bool> {
        let live = token.generation == self.generation
            && token.turn == self.turn
            && matches!(
                (&self.phase, token.kind),
                (Phase::Feedback { .. }, SuspensionKind::Feedback)
                    | (Phase::Moving(_), SuspensionKind::Moving)
            );
        if !live {
            log::debug!(
                "ignoring stale resume token {:?} (now {} turn {} in {})",
                token,
                self.generation,
                self.turn,
                self.phase.kind()
            );
            return Ok(false);
        }

        match &self.phase {
            Phase::Feedback { .. } => self.begin_move(table, config, events),
            Phase::Moving(motion) => {
                let motion = *motion;
                self.finish_move(table, motion, events);
            }
            _ => {}
        }
        self.advance(table, config, 0.0, events)?;
        Ok(true)
    }

    fn begin_move(
        &mut self,
        table: &mut TableState,
        config: &SessionConfig,
        events: &mut Vec<SessionEvent>,
    ) {
        let track_len = table.track().len();
        let player = &table.players[self.active];
        if player.is_finished(track_len) {
            // Nowhere left to go; the completion check runs as if a move ended.
            let start = player.token_position;
            let end = table.waypoint_of(self.active);
            self.finish_move(table, TokenMotion::new(self.active, start, end), events);
            return;
        }

        let start = player.token_position;
        table.players[self.active].waypoint_index += 1;
        let end = table.waypoint_of(self.active);
        let motion = TokenMotion::new(self.active, start, end);
        log::debug!(
            "{} moving to waypoint {}",
            self.active,
            table.players[self.active].waypoint_index
        );

        self.phase = Phase::Moving(motion);
        events.push(SessionEvent::SuspensionStarted {
            token: self.token(SuspensionKind::Moving),
            duration_secs: start.distance(end) / config.speed,
        });
    }

    fn finish_move(
        &mut self,
        table: &mut TableState,
        motion: TokenMotion,
        events: &mut Vec<SessionEvent>,
    ) {
        let player = &mut table.players[motion.player];
        player.token_position = motion.end;
        events.push(SessionEvent::TokenMoved {
            player: motion.player,
            waypoint_index: player.waypoint_index,
            coordinate: motion.end,
        });

        if table.all_finished() {
            let scores = table.scores();
            let result = GameResult::from_scores(&scores);
            log::info!("game complete: {:?} with scores {:?}", result, scores);
            events.push(SessionEvent::GameComplete {
                scores,
                result: result.clone(),
            });
            self.phase = Phase::Complete(result);
            return;
        }

        self.active = self.next_player(table);
        self.phase = Phase::AwaitingQuestion;
    }

    /// Next player in seating order who still has track left.
    fn next_player(&self, table: &TableState) -> PlayerId {
        let count = table.player_count();
        let track_len = table.track().len();
        let mut candidate = self.active.next(count);
        for _ in 0..count {
            if !table.players[candidate].is_finished(track_len) {
                return candidate;
            }
            candidate = candidate.next(count);
        }
        candidate
    }

    /// Phase discriminant.
    #[must_use]
    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }
}

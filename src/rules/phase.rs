//! Session phases and game results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::movement::TokenMotion;
use crate::questions::Question;

/// A question on the table, waiting for an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingQuestion {
    pub question: Question,
    pub is_bonus: bool,
}

/// Turn state machine phase.
///
/// `AwaitingQuestion -> AwaitingAnswer -> Feedback -> Moving ->
/// (AwaitingQuestion | Complete)`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Next question not yet served.
    AwaitingQuestion,
    /// Question shown; the only phase accepting answers.
    AwaitingAnswer(PendingQuestion),
    /// Timed pause after an answer is resolved.
    Feedback { remaining_secs: f32 },
    /// Active token travelling to its next waypoint.
    Moving(TokenMotion),
    /// Terminal.
    Complete(GameResult),
}

impl Phase {
    /// Payload-free discriminant.
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::AwaitingQuestion => PhaseKind::AwaitingQuestion,
            Phase::AwaitingAnswer(_) => PhaseKind::AwaitingAnswer,
            Phase::Feedback { .. } => PhaseKind::Feedback,
            Phase::Moving(_) => PhaseKind::Moving,
            Phase::Complete(_) => PhaseKind::Complete,
        }
    }
}

/// Phase without its payload, for errors, logs and comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    AwaitingQuestion,
    AwaitingAnswer,
    Feedback,
    Moving,
    Complete,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseKind::AwaitingQuestion => "AwaitingQuestion",
            PhaseKind::AwaitingAnswer => "AwaitingAnswer",
            PhaseKind::Feedback => "Feedback",
            PhaseKind::Moving => "Moving",
            PhaseKind::Complete => "Complete",
        };
        f.write_str(name)
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly highest score.
    Winner(PlayerId),
    /// Two or more players share the highest score.
    Tie,
}

impl GameResult {
    /// Decide the result from final scores.
    ///
    /// ```
    /// use trivia_track::core::PlayerId;
    /// use trivia_track::rules::GameResult;
    ///
    /// let p0 = PlayerId::new(0);
    /// let p1 = PlayerId::new(1);
    /// assert_eq!(GameResult::from_scores(&[(p0, 30), (p1, 20)]), GameResult::Winner(p0));
    /// assert_eq!(GameResult::from_scores(&[(p0, 20), (p1, 20)]), GameResult::Tie);
    /// ```
    #[must_use]
    pub fn from_scores(scores: &[(PlayerId, i64)]) -> Self {
        let Some(best) = scores.iter().map(|&(_, s)| s).max() else {
            return GameResult::Tie;
        };
        let mut leaders = scores.iter().filter(|&&(_, s)| s == best);
        match (leaders.next(), leaders.next()) {
            (Some(&(id, _)), None) => GameResult::Winner(id),
            _ => GameResult::Tie,
        }
    }

    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

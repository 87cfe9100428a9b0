//! Outbound session events and resume tokens.
//!
//! Events are the whole contract with the view layer: the session queues
//! them as it changes state and the view drains them once per frame.
//!
//! ## Resume tokens
//!
//! Entering `Feedback` or `Moving` emits a `ResumeToken`. A view that runs
//! its own timer or animation hands the token back via
//! `GameSession::resume`. Tokens carry the session generation, so a token
//! minted before `restart()` can never touch post-restart state.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::questions::{Answers, Question};
use crate::rules::GameResult;

/// Session generation, bumped by every `restart()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generation({})", self.0)
    }
}

/// Which suspension a token resumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuspensionKind {
    /// Answer feedback delay.
    Feedback,
    /// Token travel animation.
    Moving,
}

/// Handle to one pending suspension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResumeToken {
    pub generation: Generation,
    /// Ordinal of the resolved question this suspension belongs to.
    pub turn: u64,
    pub kind: SuspensionKind,
}

/// Something the view layer should react to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A question is on the table for `player`.
    QuestionReady {
        player: PlayerId,
        question: Question,
        options: Answers,
        is_bonus: bool,
    },

    /// An answer was resolved and scored.
    AnswerResolved {
        player: PlayerId,
        correct_index: usize,
        selected_index: usize,
        correct: bool,
        points_earned: i64,
        new_score: i64,
    },

    /// A timed suspension began; resume with `token` or let `tick` run it out.
    SuspensionStarted {
        token: ResumeToken,
        duration_secs: f32,
    },

    /// A token arrived at its waypoint.
    TokenMoved {
        player: PlayerId,
        waypoint_index: usize,
        coordinate: Vec3,
    },

    /// Every player reached the end of the track.
    GameComplete {
        scores: Vec<(PlayerId, i64)>,
        result: GameResult,
    },

    /// The session was reset; discard view state from older generations.
    Restarted { generation: Generation },
}

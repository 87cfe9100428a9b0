//! # trivia-track
//!
//! Rules engine for a turn-based trivia board game.
//!
//! Players move tokens along a fixed track by answering multiple-choice
//! questions drawn from a shuffled, cyclic deck. Every 4th, 8th, 12th and
//! 18th question a player sees is a bonus question worth double points.
//!
//! ## Design Principles
//!
//! 1. **One engine, N players**: a single `TurnEngine` parameterized by
//!    player count replaces separate one- and two-player variants.
//!
//! 2. **No ambient state**: a `GameSession` is an ordinary value owned by
//!    whatever drives the view layer.
//!
//! 3. **Caller-driven time**: the feedback pause and token animation are
//!    suspensions advanced by `tick` or ended by a `ResumeToken`. Tokens
//!    carry a generation, so nothing from before `restart()` can fire after it.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, table state
//! - `questions`: Question records, bank, shuffled deck, sample content
//! - `scoring`: Point awards and bonus eligibility
//! - `movement`: Track and token interpolation
//! - `rules`: Phases and the turn state machine
//! - `session`: `GameSession` entry points and outbound events

pub mod core;
pub mod error;
pub mod movement;
pub mod questions;
pub mod rules;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerId, PlayerMap, SessionConfig, TableState};

pub use crate::error::{Error, Result};

pub use crate::questions::{Deck, Difficulty, Question, QuestionBank};

pub use crate::scoring::{award, is_bonus, BONUS_ORDINALS};

pub use crate::movement::{step, MoveStep, TokenMotion, Track};

pub use crate::rules::{GameResult, Phase, PhaseKind, TurnEngine};

pub use crate::session::{GameSession, Generation, ResumeToken, SessionEvent, SuspensionKind};

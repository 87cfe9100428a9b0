//! Turn rules: the session state machine.
//!
//! `TurnEngine` sequences question, answer, feedback and movement for the
//! active player and hands the turn on. It mutates only the `TableState`
//! it is given and reports what happened as `SessionEvent`s.

pub mod engine;
pub mod phase;

pub use engine::TurnEngine;
pub use phase::{GameResult, PendingQuestion, Phase, PhaseKind};

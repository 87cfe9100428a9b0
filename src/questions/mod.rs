//! Question system: records, bank and shuffled deck.
//!
//! ## Key Types
//!
//! - `Question`: Immutable multiple-choice record
//! - `Difficulty`: Easy / medium / hard tag
//! - `QuestionBank`: Validated catalog
//! - `Deck`: Shuffled, cyclically indexed view a session draws from

pub mod bank;
pub mod question;
pub mod sample;

pub use bank::{Deck, QuestionBank};
pub use question::{Answers, Difficulty, Question, MAX_ANSWERS, MIN_ANSWERS};
pub use sample::sample_questions;

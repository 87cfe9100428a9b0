//! Bundled sample deck.
//!
//! A general-knowledge question set shipped as a JSON asset so a session
//! can be started without supplying content.

use super::bank::QuestionBank;
use super::question::Question;
use crate::error::Result;

const SAMPLE_QUESTIONS_JSON: &str = include_str!("../../assets/sample_questions.json");

impl QuestionBank {
    /// Load the bundled sample deck.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_QUESTIONS_JSON)
    }
}

/// The bundled sample questions in asset order.
pub fn sample_questions() -> Result<Vec<Question>> {
    Ok(QuestionBank::sample()?.iter().cloned().collect())
}

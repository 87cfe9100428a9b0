//! Question records - immutable trivia data.
//!
//! A `Question` is static content supplied to the engine. It is validated
//! once when a `QuestionBank` is loaded and never mutated afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Most answer options a question can show (one per answer button).
pub const MAX_ANSWERS: usize = 4;

/// Fewest answer options that make a multiple-choice question.
pub const MIN_ANSWERS: usize = 2;

/// Answer option storage; never spills for valid questions.
pub type Answers = SmallVec<[String; MAX_ANSWERS]>;

/// Question difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A multiple-choice trivia question.
///
/// ## Example
///
/// ```
/// use trivia_track::questions::{Difficulty, Question};
///
/// let q = Question::new("Largest ocean?", ["Atlantic", "Indian", "Pacific", "Arctic"], 2)
///     .with_category("Geography")
///     .with_difficulty(Difficulty::Easy);
///
/// assert!(q.is_correct(2));
/// assert_eq!(q.correct_answer(), Some("Pacific"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Answers,
    pub correct_answer_index: usize,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Question {
    /// Create a question with an empty category and medium difficulty.
    #[must_use]
    pub fn new<I, S>(text: impl Into<String>, answers: I, correct_answer_index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            answers: answers.into_iter().map(Into::into).collect(),
            correct_answer_index,
            category: String::new(),
            difficulty: Difficulty::default(),
        }
    }

    /// Set the category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the difficulty (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Check the answer-count and correct-index invariants.
    pub fn validate(&self) -> Result<()> {
        let count = self.answers.len();
        if !(MIN_ANSWERS..=MAX_ANSWERS).contains(&count) {
            return Err(Error::invalid_data(format!(
                "question {:?} has {} answers, expected {}..={}",
                self.text, count, MIN_ANSWERS, MAX_ANSWERS
            )));
        }
        if self.correct_answer_index >= count {
            return Err(Error::invalid_data(format!(
                "question {:?} marks answer {} correct but has only {} answers",
                self.text, self.correct_answer_index, count
            )));
        }
        Ok(())
    }

    /// Whether `index` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer_index
    }

    /// Text of the correct answer, if the question is well-formed.
    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_answer_index).map(String::as_str)
    }
}

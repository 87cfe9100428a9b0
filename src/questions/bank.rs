//! Question bank and shuffled deck views.
//!
//! `QuestionBank` owns the validated catalog. `Deck` is the fixed-order,
//! shuffled view a session draws from; it is cyclic, so a session can
//! outlast the number of questions in the bank.

use im::Vector;
use rustc_hash::FxHashMap;

use super::question::Question;
use crate::core::GameRng;
use crate::error::{Error, Result};

/// Validated, non-empty question catalog.
///
/// ## Example
///
/// ```
/// use trivia_track::questions::{Question, QuestionBank};
///
/// let bank = QuestionBank::load(vec![
///     Question::new("2+2?", ["3", "4"], 1),
///     Question::new("Red planet?", ["Mars", "Venus"], 0),
/// ]).unwrap();
///
/// let deck = bank.shuffled_view(Some(7));
/// assert_eq!(deck.len(), 2);
/// // Cyclic: cursor 2 wraps back to the first slot.
/// assert_eq!(deck.question_at(2), deck.question_at(0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionBank {
    questions: Vector<Question>,
}

impl QuestionBank {
    /// Validate and take ownership of a question list.
    ///
    /// Fails with `InvalidData` on an empty list or on the first question
    /// that violates the answer-count / correct-index invariant.
    pub fn load(questions: impl IntoIterator<Item = Question>) -> Result<Self> {
        let questions: Vector<Question> = questions.into_iter().collect();
        if questions.is_empty() {
            return Err(Error::invalid_data("question bank is empty"));
        }
        for (i, question) in questions.iter().enumerate() {
            question.validate().map_err(|err| match err {
                Error::InvalidData(msg) => Error::InvalidData(format!("question #{i}: {msg}")),
                other => other,
            })?;
        }
        log::debug!("loaded question bank with {} questions", questions.len());
        Ok(Self { questions })
    }

    /// Parse a JSON array of questions and load it.
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)
            .map_err(|err| Error::invalid_data(format!("malformed question JSON: {err}")))?;
        Self::load(questions)
    }

    /// Number of questions in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a loaded bank; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of questions per category.
    #[must_use]
    pub fn category_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for question in &self.questions {
            *counts.entry(question.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Shuffled view of the bank.
    ///
    /// Deterministic for `Some(seed)`; `None` draws a fresh seed.
    #[must_use]
    pub fn shuffled_view(&self, seed: Option<u64>) -> Deck {
        let mut rng = GameRng::new(seed.unwrap_or_else(rand::random));
        self.shuffle_with(&mut rng)
    }

    /// Shuffled view drawn from an existing RNG stream.
    #[must_use]
    pub fn shuffle_with(&self, rng: &mut GameRng) -> Deck {
        let mut order: Vec<Question> = self.questions.iter().cloned().collect();
        rng.shuffle(&mut order);
        Deck {
            questions: order.into_iter().collect(),
        }
    }
}

/// Fixed-order shuffled view of a `QuestionBank`.
///
/// Cloning is O(1) thanks to the persistent vector, so the view layer can
/// hold its own copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    questions: Vector<Question>,
}

impl Deck {
    /// Question at `cursor mod len`.
    #[must_use]
    pub fn question_at(&self, cursor: usize) -> &Question {
        &self.questions[cursor % self.questions.len()]
    }

    /// Number of distinct questions in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: decks come from non-empty banks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(format!("Q{i}"), ["a", "b", "c", "d"], i % 4)
                    .with_category(if i % 2 == 0 { "Even" } else { "Odd" })
            })
            .collect()
    }

    #[test]
    fn test_load_rejects_empty() {
        assert!(matches!(QuestionBank::load(Vec::new()), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_load_rejects_bad_question() {
        let mut questions = numbered(3);
        questions[1].correct_answer_index = 5;
        let err = QuestionBank::load(questions).unwrap_err();
        match err {
            Error::InvalidData(msg) => assert!(msg.starts_with("question #1")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_shuffled_view_is_permutation() {
        let bank = QuestionBank::load(numbered(12)).unwrap();
        let deck = bank.shuffled_view(Some(42));

        assert_eq!(deck.len(), 12);
        let mut texts: Vec<_> = deck.iter().map(|q| q.text.clone()).collect();
        let shuffled = texts.clone();
        texts.sort();
        let mut expected: Vec<_> = bank.iter().map(|q| q.text.clone()).collect();
        expected.sort();
        assert_eq!(texts, expected);

        let original: Vec<_> = bank.iter().map(|q| q.text.clone()).collect();
        assert_ne!(shuffled, original);
    }

    #[test]
    fn test_shuffled_view_deterministic() {
        let bank = QuestionBank::load(numbered(8)).unwrap();
        assert_eq!(bank.shuffled_view(Some(5)), bank.shuffled_view(Some(5)));
    }

    #[test]
    fn test_question_at_wraps() {
        let bank = QuestionBank::load(numbered(3)).unwrap();
        let deck = bank.shuffled_view(Some(1));
        for cursor in 0..10 {
            assert_eq!(deck.question_at(cursor), deck.question_at(cursor % 3));
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"text": "Largest ocean?", "answers": ["Atlantic", "Indian", "Pacific", "Arctic"],
             "correct_answer_index": 2, "category": "Geography", "difficulty": "easy"}
        ]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.len(), 1);

        assert!(matches!(QuestionBank::from_json("not json"), Err(Error::InvalidData(_))));
        assert!(matches!(QuestionBank::from_json("[]"), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_category_counts() {
        let bank = QuestionBank::load(numbered(5)).unwrap();
        let counts = bank.category_counts();
        assert_eq!(counts.get("Even"), Some(&3));
        assert_eq!(counts.get("Odd"), Some(&2));
    }
}

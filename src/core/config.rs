//! Session configuration.
//!
//! `SessionConfig` is supplied once to `GameSession::start` and never
//! mutated by the engine. Runtime state lives in `TableState` and the
//! `TurnEngine`; nothing here doubles as a live counter.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::movement::Track;
use crate::questions::{sample_questions, Question};

/// Largest supported player count.
pub const MAX_PLAYERS: usize = 2;

/// Default pause between resolving an answer and moving the token.
pub const DEFAULT_FEEDBACK_DELAY_SECS: f32 = 1.0;

/// Default points for a correct non-bonus answer.
pub const DEFAULT_BASE_POINTS: i64 = 10;

/// Default token speed in track units per second.
pub const DEFAULT_SPEED: f32 = 5.0;

/// Default seed for the deck shuffle.
pub const DEFAULT_SEED: u64 = 0x7417_1A00;

/// Immutable configuration for one game session.
///
/// ## Example
///
/// ```
/// use trivia_track::core::SessionConfig;
/// use trivia_track::movement::Track;
/// use trivia_track::questions::Question;
///
/// let config = SessionConfig::new(Track::evenly_spaced(5, 1.0).unwrap())
///     .with_players(2)
///     .with_questions(vec![Question::new("2+2?", ["3", "4"], 1)])
///     .with_base_points(10)
///     .with_feedback_delay(0.5);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub track: Track,
    pub player_count: usize,
    pub questions: Vec<Question>,
    /// Token speed in track units per second.
    pub speed: f32,
    pub feedback_delay_secs: f32,
    pub base_points: i64,
    pub seed: u64,
}

impl SessionConfig {
    /// Single-player config with defaults and no questions.
    #[must_use]
    pub fn new(track: Track) -> Self {
        Self {
            track,
            player_count: 1,
            questions: Vec::new(),
            speed: DEFAULT_SPEED,
            feedback_delay_secs: DEFAULT_FEEDBACK_DELAY_SECS,
            base_points: DEFAULT_BASE_POINTS,
            seed: DEFAULT_SEED,
        }
    }

    /// Straight track of `track_length` waypoints, one unit apart.
    pub fn with_track_length(track_length: usize) -> Result<Self> {
        Ok(Self::new(Track::evenly_spaced(track_length, 1.0)?))
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    /// Use the bundled sample deck.
    pub fn with_sample_questions(self) -> Result<Self> {
        Ok(self.with_questions(sample_questions()?))
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, secs: f32) -> Self {
        self.feedback_delay_secs = secs;
        self
    }

    #[must_use]
    pub fn with_base_points(mut self, points: i64) -> Self {
        self.base_points = points;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the numeric settings and the track.
    ///
    /// Question content is checked separately by `QuestionBank::load`.
    pub fn validate(&self) -> Result<()> {
        self.track.validate()?;
        if !(1..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(Error::invalid_argument(format!(
                "player count must be 1..={MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        if !self.feedback_delay_secs.is_finite() || self.feedback_delay_secs < 0.0 {
            return Err(Error::invalid_argument(format!(
                "feedback delay must be non-negative and finite, got {}",
                self.feedback_delay_secs
            )));
        }
        if self.base_points < 0 {
            return Err(Error::invalid_argument(format!(
                "base points must be non-negative, got {}",
                self.base_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SessionConfig {
        SessionConfig::with_track_length(5).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = base();
        assert_eq!(config.player_count, 1);
        assert_eq!(config.feedback_delay_secs, 1.0);
        assert_eq!(config.base_points, 10);
        assert_eq!(config.track.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(base().with_players(0).validate().is_err());
        assert!(base().with_players(2).validate().is_ok());
        assert!(matches!(
            base().with_players(3).validate(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(base().with_speed(0.0).validate().is_err());
        assert!(base().with_speed(f32::NAN).validate().is_err());
        assert!(base().with_feedback_delay(-1.0).validate().is_err());
        assert!(base().with_feedback_delay(0.0).validate().is_ok());
        assert!(base().with_base_points(-5).validate().is_err());
    }

    #[test]
    fn test_sample_questions() {
        let config = base().with_sample_questions().unwrap();
        assert!(!config.questions.is_empty());
    }

    #[test]
    fn test_serde_round_trip_revalidates_track() {
        let config = base().with_players(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let single = r#"{"track":{"waypoints":[[0.0,0.0,0.0]]},"player_count":1,"questions":[],
            "speed":1.0,"feedback_delay_secs":1.0,"base_points":10,"seed":1}"#;
        let single: SessionConfig = serde_json::from_str(single).unwrap();
        assert!(matches!(single.validate(), Err(Error::InvalidArgument(_))));
    }
}

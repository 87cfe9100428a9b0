//! Point awards and bonus eligibility.

use crate::error::{Error, Result};

/// 1-based per-player question ordinals that are bonus questions.
pub const BONUS_ORDINALS: [i64; 4] = [4, 8, 12, 18];

/// Multiplier applied to a correct bonus answer.
pub const BONUS_MULTIPLIER: i64 = 2;

/// Points for a correct answer: doubled on bonus questions.
///
/// ```
/// use trivia_track::scoring::award;
///
/// assert_eq!(award(10, true).unwrap(), 20);
/// assert_eq!(award(10, false).unwrap(), 10);
/// assert_eq!(award(0, true).unwrap(), 0);
/// ```
pub fn award(base_points: i64, is_bonus: bool) -> Result<i64> {
    if base_points < 0 {
        return Err(Error::invalid_argument(format!(
            "base points must be non-negative, got {base_points}"
        )));
    }
    if !is_bonus {
        return Ok(base_points);
    }
    base_points
        .checked_mul(BONUS_MULTIPLIER)
        .ok_or_else(|| Error::invalid_argument(format!("bonus award for {base_points} overflows")))
}

/// Whether the player's `ordinal`-th question (1-based) is a bonus question.
pub fn is_bonus(ordinal: i64) -> Result<bool> {
    if ordinal < 0 {
        return Err(Error::invalid_argument(format!(
            "question count must be non-negative, got {ordinal}"
        )));
    }
    Ok(BONUS_ORDINALS.contains(&ordinal))
}

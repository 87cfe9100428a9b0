//! Scoring: stateless point awards.
//!
//! Callers pass every input explicitly and apply the returned points
//! themselves; nothing here touches session state.

pub mod award;

pub use award::{award, is_bonus, BONUS_MULTIPLIER, BONUS_ORDINALS};

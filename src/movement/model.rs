//! Linear token interpolation between two waypoints.
//!
//! Everything here is a pure function of its arguments except
//! `TokenMotion`, a small record the session keeps while a token is
//! travelling.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{Error, Result};

/// Result of sampling a move at some elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveStep {
    /// Rendered token position.
    pub position: Vec3,
    /// Raw fraction of the journey covered; may exceed 1.0.
    pub fraction: f32,
}

impl MoveStep {
    /// The move is done once the fraction reaches 1.0 or the rendered
    /// position already equals the target, whichever happens first.
    #[must_use]
    pub fn arrived(&self, end: Vec3) -> bool {
        self.fraction >= 1.0 || self.position == end
    }
}

/// Fraction of a `distance`-long journey covered after `travelled` units.
///
/// Fails with `DivisionByZero` for a zero-length segment; `step` checks for
/// that case before calling.
pub fn fraction_of_journey(distance: f32, travelled: f32) -> Result<f32> {
    if distance == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(travelled / distance)
}

/// Sample a linear move from `start` to `end` at `speed` units per second.
///
/// ```
/// use glam::Vec3;
/// use trivia_track::movement::step;
///
/// let end = Vec3::new(10.0, 0.0, 0.0);
/// let half = step(Vec3::ZERO, end, 5.0, 1.0).unwrap();
/// assert_eq!(half.position, Vec3::new(5.0, 0.0, 0.0));
///
/// let done = step(Vec3::ZERO, end, 5.0, 3.0).unwrap();
/// assert_eq!(done.position, end);
/// assert!(done.arrived(end));
/// ```
pub fn step(start: Vec3, end: Vec3, speed: f32, elapsed_secs: f32) -> Result<MoveStep> {
    if !start.is_finite() || !end.is_finite() {
        return Err(Error::invalid_argument("move endpoints must be finite"));
    }
    if !speed.is_finite() || speed <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "speed must be positive and finite, got {speed}"
        )));
    }
    if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
        return Err(Error::invalid_argument(format!(
            "elapsed time must be non-negative and finite, got {elapsed_secs}"
        )));
    }

    let distance = start.distance(end);
    if distance == 0.0 {
        return Ok(MoveStep {
            position: end,
            fraction: 1.0,
        });
    }

    let fraction = fraction_of_journey(distance, elapsed_secs * speed)?;
    let position = if fraction >= 1.0 {
        end
    } else {
        start.lerp(end, fraction)
    };
    Ok(MoveStep { position, fraction })
}

/// An in-flight token move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenMotion {
    pub player: PlayerId,
    pub start: Vec3,
    pub end: Vec3,
    pub elapsed_secs: f32,
}

impl TokenMotion {
    #[must_use]
    pub fn new(player: PlayerId, start: Vec3, end: Vec3) -> Self {
        Self {
            player,
            start,
            end,
            elapsed_secs: 0.0,
        }
    }

    /// Advance the clock by `dt_secs` and sample the new position.
    pub fn advance(&mut self, dt_secs: f32, speed: f32) -> Result<MoveStep> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(Error::invalid_argument(format!(
                "tick delta must be non-negative and finite, got {dt_secs}"
            )));
        }
        let sample = step(self.start, self.end, speed, self.elapsed_secs + dt_secs)?;
        self.elapsed_secs += dt_secs;
        Ok(sample)
    }
}

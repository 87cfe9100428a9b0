//! The fixed board track.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered waypoint coordinates, at least two, fixed for a session.
///
/// ```
/// use glam::Vec3;
/// use trivia_track::movement::Track;
///
/// let track = Track::evenly_spaced(5, 2.0).unwrap();
/// assert_eq!(track.len(), 5);
/// assert_eq!(track.last_index(), 4);
/// assert_eq!(track.waypoint(4), Some(Vec3::new(8.0, 0.0, 0.0)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    waypoints: Vec<Vec3>,
}

impl Track {
    /// Minimum number of waypoints on a track.
    pub const MIN_LEN: usize = 2;

    /// Build a track from explicit coordinates.
    pub fn new(waypoints: Vec<Vec3>) -> Result<Self> {
        let track = Self { waypoints };
        track.validate()?;
        Ok(track)
    }

    /// A straight track along +X with `length` waypoints `spacing` apart.
    pub fn evenly_spaced(length: usize, spacing: f32) -> Result<Self> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "waypoint spacing must be positive and finite, got {spacing}"
            )));
        }
        Self::new(
            (0..length)
                .map(|i| Vec3::new(i as f32 * spacing, 0.0, 0.0))
                .collect(),
        )
    }

    /// Check length and coordinate finiteness.
    ///
    /// Deserialized tracks skip `new`, so configs re-run this.
    pub fn validate(&self) -> Result<()> {
        if self.waypoints.len() < Self::MIN_LEN {
            return Err(Error::invalid_argument(format!(
                "track needs at least {} waypoints, got {}",
                Self::MIN_LEN,
                self.waypoints.len()
            )));
        }
        if let Some(i) = self.waypoints.iter().position(|w| !w.is_finite()) {
            return Err(Error::invalid_argument(format!("waypoint {i} is not finite")));
        }
        Ok(())
    }

    /// Number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the final waypoint.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Coordinate of waypoint `index`.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    /// Coordinate of the first waypoint, where every token starts.
    #[must_use]
    pub fn start(&self) -> Vec3 {
        self.waypoints.first().copied().unwrap_or(Vec3::ZERO)
    }
}

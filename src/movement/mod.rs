//! Token movement along the board track.
//!
//! - `Track`: fixed waypoint coordinates
//! - `step`: linear interpolation sample for a start/end pair
//! - `TokenMotion`: an in-flight move advanced by session ticks

pub mod model;
pub mod track;

pub use model::{fraction_of_journey, step, MoveStep, TokenMotion};
pub use track::Track;

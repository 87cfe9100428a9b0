//! Core engine types: players, RNG, configuration and table state.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    SessionConfig, DEFAULT_BASE_POINTS, DEFAULT_FEEDBACK_DELAY_SECS, DEFAULT_SEED, DEFAULT_SPEED,
    MAX_PLAYERS,
};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::TableState;

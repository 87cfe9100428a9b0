//! Game session: the public entry points and outbound events.
//!
//! - `GameSession`: owns players, deck view and turn engine
//! - `SessionEvent`: everything the view layer needs to render
//! - `ResumeToken` / `Generation`: cancellation-safe suspension handles

pub mod event;
pub mod game;

pub use event::{Generation, ResumeToken, SessionEvent, SuspensionKind};
pub use game::GameSession;

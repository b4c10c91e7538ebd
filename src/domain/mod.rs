//! Core domain types for Piggy

mod event;
mod progress;

pub use event::{Effect, Event};
pub use progress::{DEFAULT_GOAL, ProgressState};

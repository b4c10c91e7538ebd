//! Piggy - gamified savings goals in your terminal
//!
//! Piggy tracks progress toward a single savings goal and layers a small
//! rewards scheme on top: deposits earn XP, XP rolls into levels, and six
//! achievements unlock along the way.
//!
//! The interesting part lives in [`rewards`]: a pure engine that takes the
//! current [`domain::ProgressState`] plus one event and returns the side
//! effects to run. The CLI wires those effects to [`store`] and [`render`].

pub mod config;
pub mod domain;
pub mod render;
pub mod rewards;
pub mod store;

pub use domain::*;

//! Gamification system: Achievements, XP, and Levels
//!
//! This module is the rule engine behind the savings tracker. It is pure:
//! the CLI feeds it events and runs the effects it returns.

mod checker;
mod definitions;
mod engine;
mod xp;

pub use checker::Moment;
pub use definitions::{ACHIEVEMENTS, Achievement, AchievementId};
pub use engine::apply;
pub use xp::{XP_PER_LEVEL, XpRewards};

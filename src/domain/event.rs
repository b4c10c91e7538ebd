//! Events fed into the rewards engine and the effects it asks for in return

use crate::rewards::AchievementId;

/// A user action, already validated at the input boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Add money toward the goal
    Deposit { amount: f64 },
    /// Replace the goal amount
    SetGoal { goal: f64 },
}

/// A side effect the engine wants performed.
///
/// The engine itself touches nothing outside the state value; the caller
/// runs these in order after the transition returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Play the unlock celebration for this achievement
    UnlockAnimation(AchievementId),
    /// Announce the level just reached
    LevelUpAnimation { level: u32 },
    /// Write the state to disk
    Persist,
    /// Redraw the status view
    Render,
}

//! Achievement checking logic
//!
//! Contains the unlock condition for each achievement and the scan that
//! picks the next one to unlock.

use chrono::{Local, Timelike};

use super::definitions::{ACHIEVEMENTS, AchievementId};
use crate::domain::ProgressState;

/// The wall-clock context an unlock condition may read.
///
/// Captured once at the input boundary and passed in, so the conditions
/// stay deterministic and tests can pin the hour.
#[derive(Debug, Clone, Copy)]
pub struct Moment {
    /// Local hour of day, 0..24
    pub hour: u32,
}

impl Moment {
    /// Capture the current local time
    pub fn now() -> Self {
        Self {
            hour: Local::now().hour(),
        }
    }

    /// A moment at a fixed hour
    pub fn at_hour(hour: u32) -> Self {
        Self { hour }
    }
}

/// Check whether a single achievement's condition currently holds.
///
/// Conditions read the state after the triggering mutation, so a deposit
/// that crosses a threshold satisfies the matching condition immediately.
pub fn is_satisfied(id: AchievementId, state: &ProgressState, moment: &Moment) -> bool {
    match id {
        AchievementId::FirstSave => state.saved > 0.0,
        AchievementId::Halfway => state.saved >= state.goal * 0.5,
        AchievementId::GoalReached => state.saved >= state.goal,
        AchievementId::Level5 => state.level >= 5,
        AchievementId::Saver => state.saved >= 500.0,
        AchievementId::EarlyBird => moment.hour < 12,
    }
}

/// Find the first achievement in catalog order that is satisfied but not
/// yet unlocked. None means nothing new qualifies right now.
pub fn next_unlockable(state: &ProgressState, moment: &Moment) -> Option<AchievementId> {
    ACHIEVEMENTS
        .iter()
        .map(|a| a.id)
        .find(|id| !state.is_unlocked(*id) && is_satisfied(*id, state, moment))
}

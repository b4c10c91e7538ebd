//! Progress state: the record everything else reads and mutates

use serde::{Deserialize, Serialize};

use crate::rewards::AchievementId;

/// Goal amount used when no state file exists yet
pub const DEFAULT_GOAL: f64 = 1000.0;

/// The full progress record, persisted as-is to the state file.
///
/// Only the rewards engine mutates this; everything else reads it. All five
/// fields are required in the stored JSON, so a truncated or hand-edited
/// file surfaces as a corrupt-state error instead of silently resetting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Target amount in dollars, always positive
    pub goal: f64,
    /// Total saved so far, never negative
    pub saved: f64,
    /// Current level, starts at 1 and only increases
    pub level: u32,
    /// XP within the current level, always in 0..100
    pub xp: u32,
    /// Unlocked achievements in unlock order, no duplicates
    pub unlocked: Vec<AchievementId>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL,
            saved: 0.0,
            level: 1,
            xp: 0,
            unlocked: Vec::new(),
        }
    }
}

impl ProgressState {
    /// Check whether an achievement has already been unlocked
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Record an unlock. Returns false if the id was already present.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.push(id);
        true
    }

    /// Fraction of the goal reached, clamped to [0, 1] for rendering
    pub fn goal_fraction(&self) -> f64 {
        (self.saved / self.goal).clamp(0.0, 1.0)
    }

    /// Verify the numeric invariants a well-formed state file satisfies.
    ///
    /// A parsed file that fails this check is reported as corrupt rather
    /// than loaded, since the engine assumes these bounds hold.
    pub fn validate(&self) -> Result<(), String> {
        if !self.goal.is_finite() || self.goal <= 0.0 {
            return Err(format!("goal must be a positive number, got {}", self.goal));
        }
        if !self.saved.is_finite() || self.saved < 0.0 {
            return Err(format!("saved must be non-negative, got {}", self.saved));
        }
        if self.level < 1 {
            return Err("level must be at least 1".to_string());
        }
        if self.xp >= 100 {
            return Err(format!("xp must be below 100, got {}", self.xp));
        }
        for (i, id) in self.unlocked.iter().enumerate() {
            if self.unlocked[..i].contains(id) {
                return Err(format!("duplicate achievement '{}'", id.as_str()));
            }
        }
        Ok(())
    }
}

//! Achievement definitions and metadata
//!
//! All achievements are defined here with their display metadata. The unlock
//! conditions live in [`crate::rewards::checker`].

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    FirstSave,
    Halfway,
    GoalReached,
    #[serde(rename = "level-5")]
    Level5,
    Saver,
    EarlyBird,
}

impl AchievementId {
    /// Get the string ID used in the state file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSave => "first-save",
            Self::Halfway => "halfway",
            Self::GoalReached => "goal-reached",
            Self::Level5 => "level-5",
            Self::Saver => "saver",
            Self::EarlyBird => "early-bird",
        }
    }

    /// Parse from the state file string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first-save" => Some(Self::FirstSave),
            "halfway" => Some(Self::Halfway),
            "goal-reached" => Some(Self::GoalReached),
            "level-5" => Some(Self::Level5),
            "saver" => Some(Self::Saver),
            "early-bird" => Some(Self::EarlyBird),
            _ => None,
        }
    }

    /// Get all achievement IDs in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstSave,
            Self::Halfway,
            Self::GoalReached,
            Self::Level5,
            Self::Saver,
            Self::EarlyBird,
        ]
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// All achievement definitions, in catalog order.
///
/// The order matters: the unlock cascade scans this slice front to back, so
/// a single deposit that satisfies several conditions at once unlocks them
/// in exactly this order.
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstSave,
        name: "First Save",
        description: "Save your first dollar",
        icon: "🪙",
    },
    Achievement {
        id: AchievementId::Halfway,
        name: "Halfway There",
        description: "Reach 50% of your goal",
        icon: "📈",
    },
    Achievement {
        id: AchievementId::GoalReached,
        name: "Goal Reached",
        description: "Complete your savings goal",
        icon: "🏆",
    },
    Achievement {
        id: AchievementId::Level5,
        name: "Level 5",
        description: "Reach level 5",
        icon: "⭐",
    },
    Achievement {
        id: AchievementId::Saver,
        name: "Saver",
        description: "Save $500 total",
        icon: "🐷",
    },
    Achievement {
        id: AchievementId::EarlyBird,
        name: "Early Bird",
        description: "Save before noon",
        icon: "🌅",
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
